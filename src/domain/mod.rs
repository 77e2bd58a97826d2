//! Domain layer - dashboard payload types and derived widget state

pub mod cards;
pub mod snapshot;

pub use cards::{
    Accent, BillCard, LeaveCard, Notice, NoticeBoard, WidgetState, CURRENCY_GLYPH,
    NO_NOTICES_PLACEHOLDER,
};
pub use snapshot::{Bill, BillStatus, DashboardPayload, DashboardSnapshot, LeaveStatus, Notification};
