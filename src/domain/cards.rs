//! Per-widget view state, recomputed wholesale from each snapshot
//!
//! Widgets never patch themselves incrementally: every poll produces a
//! fresh `WidgetState` and the renderer draws whatever is current.
//! Carrying a single `Accent` per card means exactly one highlight
//! color exists at a time; replacing the card replaces the color.

use super::snapshot::{Bill, BillStatus, DashboardSnapshot, LeaveStatus, Notification};

pub const CURRENCY_GLYPH: &str = "₹";
pub const NO_NOTICES_PLACEHOLDER: &str = "No active announcements from the administration.";

/// Highlight color tag carried by a widget card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Red,
    Green,
    Amber,
    Indigo,
    Gray,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillCard {
    pub amount: String,
    pub due_date: String,
    pub status_label: String,
    pub accent: Accent,
}

impl BillCard {
    pub fn from_bill(bill: &Bill) -> Self {
        let accent = match bill.status_code {
            BillStatus::Due => Accent::Red,
            BillStatus::Paid => Accent::Green,
            BillStatus::Unknown => Accent::Indigo,
        };
        Self {
            amount: format!("{CURRENCY_GLYPH}{}", bill.amount),
            due_date: bill.due_date.clone(),
            status_label: format!("({})", bill.status),
            accent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveCard {
    pub summary: String,
    pub accent: Accent,
}

impl LeaveCard {
    /// A non-zero pending count wins over whatever the latest request
    /// resolved to.
    pub fn from_counts(pending: u32, latest: LeaveStatus) -> Self {
        if pending > 0 {
            return Self {
                summary: format!("{pending} Pending Requests"),
                accent: Accent::Amber,
            };
        }
        match latest {
            LeaveStatus::Approved => Self {
                summary: "Latest: Approved".to_string(),
                accent: Accent::Green,
            },
            LeaveStatus::Rejected => Self {
                summary: "Latest: Rejected".to_string(),
                accent: Accent::Red,
            },
            LeaveStatus::None => Self {
                summary: "All Resolved / No Requests".to_string(),
                accent: Accent::Gray,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub date: String,
}

/// Admin notice board, fully replaced each cycle, input order kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    pub entries: Vec<Notice>,
}

impl NoticeBoard {
    pub fn from_notifications(notifications: &[Notification]) -> Self {
        Self {
            entries: notifications
                .iter()
                .map(|notif| Notice {
                    message: notif.message.clone(),
                    date: notif.date.clone(),
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the widgets show from one poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    pub bill: Option<BillCard>,
    pub leave: LeaveCard,
    pub notices: NoticeBoard,
}

impl WidgetState {
    pub fn from_snapshot(snapshot: &DashboardSnapshot) -> Self {
        Self {
            bill: snapshot.bill.as_ref().map(BillCard::from_bill),
            leave: LeaveCard::from_counts(snapshot.pending_leaves, snapshot.latest_leave_status),
            notices: NoticeBoard::from_notifications(&snapshot.notifications),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill(code: &str, label: &str) -> Bill {
        Bill {
            amount: "1250.00".to_string(),
            due_date: "Mar 10, 2024".to_string(),
            status: label.to_string(),
            status_code: BillStatus::from(code.to_string()),
        }
    }

    #[test]
    fn bill_accent_follows_status_code() {
        assert_eq!(BillCard::from_bill(&bill("D", "Due")).accent, Accent::Red);
        assert_eq!(BillCard::from_bill(&bill("P", "Paid")).accent, Accent::Green);
        assert_eq!(
            BillCard::from_bill(&bill("X", "On Hold")).accent,
            Accent::Indigo
        );
    }

    #[test]
    fn bill_text_is_glyph_prefixed_and_parenthesized() {
        let card = BillCard::from_bill(&bill("D", "Due"));
        assert_eq!(card.amount, "₹1250.00");
        assert_eq!(card.status_label, "(Due)");
        assert_eq!(card.due_date, "Mar 10, 2024");
    }

    #[test]
    fn pending_leaves_win_over_latest_status() {
        let card = LeaveCard::from_counts(3, LeaveStatus::Approved);
        assert_eq!(card.summary, "3 Pending Requests");
        assert_eq!(card.accent, Accent::Amber);
    }

    #[test]
    fn leave_branches_without_pending() {
        let approved = LeaveCard::from_counts(0, LeaveStatus::Approved);
        assert_eq!(approved.summary, "Latest: Approved");
        assert_eq!(approved.accent, Accent::Green);

        let rejected = LeaveCard::from_counts(0, LeaveStatus::Rejected);
        assert_eq!(rejected.summary, "Latest: Rejected");
        assert_eq!(rejected.accent, Accent::Red);

        let resolved = LeaveCard::from_counts(0, LeaveStatus::None);
        assert_eq!(resolved.summary, "All Resolved / No Requests");
        assert_eq!(resolved.accent, Accent::Gray);
    }

    #[test]
    fn notice_board_keeps_input_order() {
        let notifications = vec![
            Notification {
                message: "Payroll update".to_string(),
                date: "2024-01-01".to_string(),
            },
            Notification {
                message: "Gate closed".to_string(),
                date: "2024-01-02".to_string(),
            },
        ];
        let board = NoticeBoard::from_notifications(&notifications);
        assert_eq!(board.entries.len(), 2);
        assert_eq!(board.entries[0].message, "Payroll update");
        assert_eq!(board.entries[0].date, "2024-01-01");
        assert_eq!(board.entries[1].message, "Gate closed");
    }

    #[test]
    fn empty_notifications_make_an_empty_board() {
        let board = NoticeBoard::from_notifications(&[]);
        assert!(board.is_empty());
    }
}
