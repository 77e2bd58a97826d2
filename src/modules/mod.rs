//! Content modules
//!
//! Each module implements the `Module` trait and owns its section of
//! the dashboard page. All of them are constructed at startup and
//! registered with the app; exactly one is visible at a time.
//!
//! Modules:
//! - dashboard: bill, leave and notice-board cards (default)
//! - billing: latest mess bill in detail
//! - leaves: leave-request summary
//! - announcements: full admin notice board

pub mod announcements;
pub mod billing;
pub mod dashboard;
pub mod leaves;

pub use announcements::Announcements;
pub use billing::Billing;
pub use dashboard::Dashboard;
pub use leaves::Leaves;
