//! Shared context passed to modules

use chrono::{DateTime, Local};

use crate::domain::{DashboardSnapshot, WidgetState};

/// Read-mostly state every module can see. The app refreshes it once
/// per applied snapshot; modules never mutate the data, only their own
/// scroll/focus fields.
#[derive(Debug, Default)]
pub struct Context {
    /// Raw data from the most recent successful poll
    pub snapshot: Option<DashboardSnapshot>,

    /// Widget cards derived from that snapshot
    pub widgets: Option<WidgetState>,

    /// Wall-clock time of the last successful poll
    pub last_synced: Option<DateTime<Local>>,

    /// Server host shown in the header
    pub server: String,

    /// Whether the terminal is below the sidebar-overlay threshold
    pub narrow: bool,

    /// Poll cadence in seconds, for display
    pub poll_secs: u64,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notice_count(&self) -> usize {
        self.widgets
            .as_ref()
            .map(|widgets| widgets.notices.entries.len())
            .unwrap_or(0)
    }
}
