//! Infrastructure layer - mess server HTTP client and the poll runtime
//!
//! This layer contains:
//! - The `MessApi` seam over the server's JSON endpoint (reqwest)
//! - The Tokio runtime bridge that drives the fixed-interval poller

pub mod api;
pub mod runtime;

pub use api::{ApiError, HttpMessApi, MessApi, DATA_ENDPOINT_PATH};
pub use runtime::{run_poll_worker, PollerBridge, PollerCommand, PollerEvent};
