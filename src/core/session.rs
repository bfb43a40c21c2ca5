//! Session orchestration: login-time state derivation and the clock toggle.

use crate::core::attendance::AttendanceLog;
use crate::core::directory::Directory;
use crate::errors::{AppError, AppResult};
use crate::models::log_action::LogAction;
use crate::models::log_entry::LogEntry;
use crate::models::session::{SessionState, User, UserRole};
use crate::notify::{self, Notifier};
use crate::store::KvStore;
use chrono::{DateTime, Local};

/// Result of one successful clock toggle.
pub struct ToggleOutcome {
    pub action: LogAction,
    pub time: DateTime<Local>,
    pub notification: String,
}

pub struct Session<'a> {
    attendance: AttendanceLog<'a>,
    notifier: &'a Notifier,
    pub state: SessionState,
}

impl<'a> Session<'a> {
    /// Open an employee session. The clock status is derived from the most
    /// recent log entry for that employee: clocked in if and only if it is a
    /// Login; an empty history means clocked out.
    pub fn open_employee(store: &'a KvStore, notifier: &'a Notifier, name: &str) -> AppResult<Self> {
        let directory = Directory::new(store);
        let employee = directory.find_employee(name).ok_or_else(|| {
            AppError::NotFound(format!("No employee named \"{name}\" is registered."))
        })?;

        let attendance = AttendanceLog::new(store);
        let mut history = attendance.list_for_employee(&employee.name);
        history.sort_by_key(|e| std::cmp::Reverse(e.timestamp));

        let state = match history.first() {
            Some(last) => SessionState {
                current_user: Some(User {
                    name: employee.name.clone(),
                    role: UserRole::Employee,
                }),
                clocked_in: last.action.is_login(),
                last_action_time: Some(last.timestamp),
                last_action: Some(last.action),
            },
            None => SessionState {
                current_user: Some(User {
                    name: employee.name.clone(),
                    role: UserRole::Employee,
                }),
                ..SessionState::default()
            },
        };

        Ok(Self {
            attendance,
            notifier,
            state,
        })
    }

    /// Validate the shared secret and open a manager session.
    pub fn open_manager(store: &'a KvStore, notifier: &'a Notifier, secret: &str) -> AppResult<Self> {
        let directory = Directory::new(store);
        if !directory.validate_manager(secret) {
            return Err(AppError::NotFound(
                "The manager secret is not valid.".to_string(),
            ));
        }

        Ok(Self {
            attendance: AttendanceLog::new(store),
            notifier,
            state: SessionState {
                current_user: Some(User {
                    name: "manager".to_string(),
                    role: UserRole::Manager,
                }),
                ..SessionState::default()
            },
        })
    }

    pub fn employee_name(&self) -> &str {
        self.state
            .current_user
            .as_ref()
            .map(|u| u.name.as_str())
            .unwrap_or_default()
    }

    /// Toggle the clock status for the session's employee.
    ///
    /// The wall-clock instant is captured before the notification call so
    /// the recorded timestamp is the invocation time, not the time the
    /// collaborator answers. A notification failure falls back to the local
    /// template; only an append failure aborts, leaving the in-memory state
    /// untouched.
    pub fn toggle(&mut self) -> AppResult<ToggleOutcome> {
        let name = self.employee_name().to_string();
        let action = if self.state.clocked_in {
            LogAction::Logout
        } else {
            LogAction::Login
        };
        let now = Local::now();

        let notification = match self.notifier.generate(&name, action, &now) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("notification fallback for {name}: {e}");
                notify::fallback_message(&name, action, &now)
            }
        };

        let entry = LogEntry::new(&name, action, now);
        self.attendance.append(&entry)?;

        self.state.clocked_in = action.is_login();
        self.state.last_action_time = Some(now);
        self.state.last_action = Some(action);

        Ok(ToggleOutcome {
            action,
            time: now,
            notification,
        })
    }
}
