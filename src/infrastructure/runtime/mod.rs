//! Poll runtime - Tokio runtime bridge for the dashboard poller

mod bridge;
mod worker;

pub use bridge::{PollerBridge, PollerCommand, PollerEvent};
pub use worker::run_poll_worker;
