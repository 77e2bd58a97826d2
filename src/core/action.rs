//! Actions that modules can return to communicate with the app

/// Actions returned by modules and input handlers.
#[derive(Debug, Clone)]
pub enum Action {
    /// No action needed
    None,

    /// Switch the visible module by slug
    Switch(String),

    /// Toggle sidebar visibility
    ToggleSidebar,

    /// Request an immediate out-of-schedule poll
    Refresh,

    /// Show a one-shot flash message
    Notify(String, NotifyLevel),

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
