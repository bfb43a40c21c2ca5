//! Worked-hours aggregation over the full attendance log.
//!
//! Pairing rules per employee, over entries sorted by timestamp ascending:
//! a Login sets the pending login instant, overwriting any unconsumed one
//! (consecutive Logins keep only the most recent for accounting); a Logout
//! with a pending login closes the interval and adds it to the total; a
//! Logout without one contributes zero.

use crate::models::hours::CalculatedHours;
use crate::models::log_action::LogAction;
use crate::models::log_entry::LogEntry;
use chrono::{DateTime, Local};
use std::collections::HashMap;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Derive one `CalculatedHours` record per employee with at least one log
/// entry, sorted by total hours descending. Ties keep the first-seen order
/// of the partition step (stable sort).
pub fn calculate_hours(entries: &[LogEntry]) -> Vec<CalculatedHours> {
    // -----------------------------
    // Partition by employee name
    // -----------------------------
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&LogEntry>> = HashMap::new();

    for entry in entries {
        let name = entry.employee_name.as_str();
        if !groups.contains_key(name) {
            order.push(name);
        }
        groups.entry(name).or_default().push(entry);
    }

    // -----------------------------
    // Pair Login/Logout per group
    // -----------------------------
    let mut totals = Vec::with_capacity(order.len());

    for name in order {
        let mut group = groups.remove(name).unwrap_or_default();
        group.sort_by_key(|e| e.timestamp);

        let mut pending_login: Option<DateTime<Local>> = None;
        let mut total_millis: i64 = 0;

        for entry in group {
            match entry.action {
                LogAction::Login => {
                    pending_login = Some(entry.timestamp);
                }
                LogAction::Logout => {
                    if let Some(login_time) = pending_login.take() {
                        total_millis += (entry.timestamp - login_time).num_milliseconds();
                    }
                }
            }
        }

        totals.push(CalculatedHours {
            employee_name: name.to_string(),
            total_hours: round_hours(total_millis),
        });
    }

    // -----------------------------
    // Highest totals first
    // -----------------------------
    totals.sort_by(|a, b| {
        b.total_hours
            .partial_cmp(&a.total_hours)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    totals
}

/// Milliseconds → hours, rounded to 2 decimals (half away from zero).
fn round_hours(millis: i64) -> f64 {
    (millis as f64 / MILLIS_PER_HOUR * 100.0).round() / 100.0
}
