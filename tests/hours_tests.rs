//! Aggregation rules for the worked-hours calculator.

use attlog::core::calculator::hours::calculate_hours;
use attlog::models::hours::CalculatedHours;
use attlog::models::log_action::LogAction;
use attlog::models::log_entry::LogEntry;
use chrono::{Local, TimeZone};

mod common;
use common::{atl, seed_entry, setup_test_store};
use predicates::str::contains;

fn entry(name: &str, action: LogAction, hour: u32, minute: u32) -> LogEntry {
    let ts = Local.with_ymd_and_hms(2025, 6, 2, hour, minute, 0).unwrap();
    LogEntry::new(name, action, ts)
}

#[test]
fn paired_login_logout_sums_interval() {
    let log = vec![
        entry("Alice", LogAction::Login, 9, 0),
        entry("Alice", LogAction::Logout, 17, 0),
    ];
    let hours = calculate_hours(&log);
    assert_eq!(hours.len(), 1);
    assert_eq!(hours[0].employee_name, "Alice");
    assert_eq!(hours[0].total_hours, 8.00);
}

#[test]
fn consecutive_logins_keep_only_most_recent() {
    let log = vec![
        entry("Bob", LogAction::Login, 9, 0),
        entry("Bob", LogAction::Login, 10, 0),
        entry("Bob", LogAction::Logout, 11, 0),
    ];
    let hours = calculate_hours(&log);
    assert_eq!(
        hours,
        vec![CalculatedHours {
            employee_name: "Bob".to_string(),
            total_hours: 1.00,
        }]
    );
}

#[test]
fn orphan_logout_contributes_zero() {
    let log = vec![
        entry("Carol", LogAction::Logout, 9, 0),
        entry("Carol", LogAction::Login, 10, 0),
        entry("Carol", LogAction::Logout, 11, 30),
    ];
    let hours = calculate_hours(&log);
    assert_eq!(hours[0].total_hours, 1.50);
}

#[test]
fn login_only_yields_zero_hours() {
    let log = vec![entry("Dana", LogAction::Login, 9, 0)];
    let hours = calculate_hours(&log);
    assert_eq!(hours.len(), 1);
    assert_eq!(hours[0].total_hours, 0.00);
}

#[test]
fn logout_only_yields_zero_hours() {
    let log = vec![entry("Dana", LogAction::Logout, 17, 0)];
    let hours = calculate_hours(&log);
    assert_eq!(hours.len(), 1);
    assert_eq!(hours[0].total_hours, 0.00);
}

#[test]
fn empty_log_yields_empty_summary() {
    assert!(calculate_hours(&[]).is_empty());
}

#[test]
fn unsorted_input_is_ordered_before_pairing() {
    let log = vec![
        entry("Eve", LogAction::Logout, 17, 0),
        entry("Eve", LogAction::Login, 9, 0),
    ];
    let hours = calculate_hours(&log);
    assert_eq!(hours[0].total_hours, 8.00);
}

#[test]
fn totals_are_sorted_descending() {
    let log = vec![
        entry("Short", LogAction::Login, 9, 0),
        entry("Short", LogAction::Logout, 10, 0),
        entry("Long", LogAction::Login, 9, 0),
        entry("Long", LogAction::Logout, 15, 0),
    ];
    let hours = calculate_hours(&log);
    assert_eq!(hours[0].employee_name, "Long");
    assert_eq!(hours[1].employee_name, "Short");
}

#[test]
fn fractional_intervals_round_to_two_decimals() {
    // 9:00 → 9:20 is a third of an hour
    let log = vec![
        entry("Finn", LogAction::Login, 9, 0),
        entry("Finn", LogAction::Logout, 9, 20),
    ];
    let hours = calculate_hours(&log);
    assert_eq!(hours[0].total_hours, 0.33);
}

#[test]
fn multiple_pairs_accumulate() {
    let log = vec![
        entry("Gus", LogAction::Login, 9, 0),
        entry("Gus", LogAction::Logout, 12, 0),
        entry("Gus", LogAction::Login, 13, 0),
        entry("Gus", LogAction::Logout, 17, 30),
    ];
    let hours = calculate_hours(&log);
    assert_eq!(hours[0].total_hours, 7.50);
}

#[test]
fn hours_command_prints_totals() {
    let data_dir = setup_test_store("hours_cli");

    seed_entry(&data_dir, "Alice", LogAction::Login, 2, 9, 0);
    seed_entry(&data_dir, "Alice", LogAction::Logout, 2, 17, 0);
    seed_entry(&data_dir, "Bob", LogAction::Login, 2, 9, 0);
    seed_entry(&data_dir, "Bob", LogAction::Login, 2, 10, 0);
    seed_entry(&data_dir, "Bob", LogAction::Logout, 2, 11, 0);

    atl()
        .args(["--data-dir", &data_dir, "hours", "--secret", "1234"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("8.00"))
        .stdout(contains("Bob"))
        .stdout(contains("1.00"));
}

#[test]
fn hours_command_with_empty_log() {
    let data_dir = setup_test_store("hours_cli_empty");

    atl()
        .args(["--data-dir", &data_dir, "hours", "--secret", "1234"])
        .assert()
        .success()
        .stdout(contains("Not enough data"));
}
