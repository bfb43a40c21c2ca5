use serde::Serialize;

/// Per-employee worked-hours total, derived on demand from the full
/// attendance log. Never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CalculatedHours {
    pub employee_name: String,
    pub total_hours: f64, // rounded to 2 decimal places
}
