use super::log_action::LogAction;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Employee,
    Manager,
}

/// The authenticated identity behind a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub role: UserRole,
}

/// Transient in-memory clock status for one authenticated employee.
/// Derived from the attendance log at login time, never persisted.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub current_user: Option<User>,
    pub clocked_in: bool,
    pub last_action_time: Option<DateTime<Local>>,
    pub last_action: Option<LogAction>,
}
