use serde::{Deserialize, Serialize};

/// The two attendance event kinds. Serialized on the wire as the
/// labels "Login" / "Logout".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogAction {
    Login,
    Logout,
}

impl LogAction {
    pub fn la_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "login" | "in" => Some(Self::Login),
            "logout" | "out" => Some(Self::Logout),
            _ => None,
        }
    }

    pub fn la_as_str(&self) -> &'static str {
        match self {
            LogAction::Login => "Login",
            LogAction::Logout => "Logout",
        }
    }

    /// Verb used in notification and status sentences.
    pub fn verb(&self) -> &'static str {
        match self {
            LogAction::Login => "clocked in",
            LogAction::Logout => "clocked out",
        }
    }

    /// The action that undoes this one, used by the session toggle.
    pub fn opposite(&self) -> Self {
        match self {
            LogAction::Login => LogAction::Logout,
            LogAction::Logout => LogAction::Login,
        }
    }

    pub fn is_login(&self) -> bool {
        matches!(self, LogAction::Login)
    }

    pub fn is_logout(&self) -> bool {
        matches!(self, LogAction::Logout)
    }
}
