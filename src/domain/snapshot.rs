//! Wire types for the `/data-endpoint/` polling response
//!
//! Each poll fully replaces the previously rendered state; there is no
//! diffing or merging. A 200 response that does not decode into this
//! shape counts as a failed cycle, the same as a transport error.

use serde::{Deserialize, Deserializer};

/// Envelope returned by the endpoint. The server also sends a `status`
/// field alongside `dashboard`; nothing reads it, so it is not decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardPayload {
    pub dashboard: DashboardSnapshot,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSnapshot {
    /// The server emits an empty object when the resident has no bill.
    #[serde(default, deserialize_with = "bill_or_none")]
    pub bill: Option<Bill>,
    pub pending_leaves: u32,
    #[serde(default)]
    pub latest_leave_status: LeaveStatus,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Bill {
    /// Decimal amount as the server formats it (e.g. "1250.00").
    pub amount: String,
    pub due_date: String,
    /// Human-readable status label (e.g. "Due").
    pub status: String,
    pub status_code: BillStatus,
}

/// One-letter bill status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum BillStatus {
    Due,
    Paid,
    Unknown,
}

impl From<String> for BillStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "D" => BillStatus::Due,
            "P" => BillStatus::Paid,
            _ => BillStatus::Unknown,
        }
    }
}

/// Status of the most recent leave request. The server sends "N" when
/// the resident has no leave history; any unrecognized code lands on
/// `None` as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum LeaveStatus {
    Approved,
    Rejected,
    #[default]
    None,
}

impl From<String> for LeaveStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "A" => LeaveStatus::Approved,
            "R" => LeaveStatus::Rejected,
            _ => LeaveStatus::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Notification {
    pub message: String,
    pub date: String,
}

fn bill_or_none<'de, D>(deserializer: D) -> Result<Option<Bill>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match &value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Object(map) if map.is_empty() => Ok(None),
        _ => Bill::deserialize(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_shape() {
        let body = r#"{
            "status": "success",
            "dashboard": {
                "bill": {
                    "amount": "1250.00",
                    "due_date": "Mar 10, 2024",
                    "status": "Due",
                    "status_code": "D"
                },
                "pending_leaves": 2,
                "latest_leave_status": "A",
                "notifications": [
                    {"message": "Water off on Sunday", "date": "02 Mar"}
                ]
            }
        }"#;

        let payload: DashboardPayload = serde_json::from_str(body).expect("decodes");
        let dash = payload.dashboard;
        let bill = dash.bill.expect("bill present");
        assert_eq!(bill.amount, "1250.00");
        assert_eq!(bill.status_code, BillStatus::Due);
        assert_eq!(dash.pending_leaves, 2);
        assert_eq!(dash.latest_leave_status, LeaveStatus::Approved);
        assert_eq!(dash.notifications.len(), 1);
    }

    #[test]
    fn empty_bill_object_decodes_to_none() {
        let body = r#"{
            "dashboard": {
                "bill": {},
                "pending_leaves": 0,
                "latest_leave_status": "N",
                "notifications": []
            }
        }"#;

        let payload: DashboardPayload = serde_json::from_str(body).expect("decodes");
        assert!(payload.dashboard.bill.is_none());
        assert_eq!(payload.dashboard.latest_leave_status, LeaveStatus::None);
    }

    #[test]
    fn missing_bill_field_decodes_to_none() {
        let body = r#"{
            "dashboard": {
                "pending_leaves": 0,
                "notifications": []
            }
        }"#;

        let payload: DashboardPayload = serde_json::from_str(body).expect("decodes");
        assert!(payload.dashboard.bill.is_none());
        assert_eq!(payload.dashboard.latest_leave_status, LeaveStatus::None);
    }

    #[test]
    fn missing_notifications_is_a_decode_error() {
        let body = r#"{
            "dashboard": {
                "bill": {},
                "pending_leaves": 1,
                "latest_leave_status": "A"
            }
        }"#;

        assert!(serde_json::from_str::<DashboardPayload>(body).is_err());
    }

    #[test]
    fn unknown_codes_fall_back() {
        let body = r#"{
            "dashboard": {
                "bill": {
                    "amount": "900.00",
                    "due_date": "N/A",
                    "status": "On Hold",
                    "status_code": "X"
                },
                "pending_leaves": 0,
                "latest_leave_status": "Z",
                "notifications": []
            }
        }"#;

        let payload: DashboardPayload = serde_json::from_str(body).expect("decodes");
        let dash = payload.dashboard;
        assert_eq!(dash.bill.expect("bill").status_code, BillStatus::Unknown);
        assert_eq!(dash.latest_leave_status, LeaveStatus::None);
    }
}
