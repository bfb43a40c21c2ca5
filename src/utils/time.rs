//! Time utilities: timestamp formatting and hour totals.

use chrono::{DateTime, Local};

pub fn format_date(ts: &DateTime<Local>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

pub fn format_time(ts: &DateTime<Local>) -> String {
    ts.format("%H:%M:%S").to_string()
}

pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Render a worked-hours total with two decimals, e.g. "8.00".
pub fn format_hours(hours: f64) -> String {
    format!("{hours:.2}")
}
