use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered employee. Records are immutable after creation and removed
/// only by a full data reset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: String,   // ⇔ opaque unique identifier (UUID v4)
    pub name: String, // ⇔ unique case-insensitively among registered employees
}

impl Employee {
    /// Build a new record with a freshly generated identifier.
    /// The caller is responsible for trimming and uniqueness checks.
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
        }
    }
}
