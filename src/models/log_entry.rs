use super::log_action::LogAction;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One timestamped clock-in/out event for one employee.
///
/// Entries reference the employee by name, not by id (continuity with the
/// stored log structure). Entries are append-only and immutable; they are
/// only meaningful interpreted in chronological order per employee. The
/// model does NOT enforce Login/Logout alternation: two consecutive Logins
/// are legal and resolved by the hours calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    pub id: String, // ⇔ opaque unique identifier (UUID v4)
    #[serde(rename = "employeeName")]
    pub employee_name: String,
    pub timestamp: DateTime<Local>, // ⇔ RFC 3339 on the wire
    pub action: LogAction,
}

impl LogEntry {
    pub fn new(employee_name: &str, action: LogAction, timestamp: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            employee_name: employee_name.to_string(),
            timestamp,
            action,
        }
    }

    pub fn date_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}
