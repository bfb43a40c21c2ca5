//! Clock toggling and login-time session state derivation.

use attlog::models::log_action::LogAction;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{atl, init_store_with_employee, seed_entry, setup_test_store};

#[test]
fn clock_unknown_employee_fails() {
    let data_dir = setup_test_store("clock_unknown");

    atl()
        .args(["--data-dir", &data_dir, "clock", "Nobody"])
        .assert()
        .failure()
        .stderr(contains("No employee named \"Nobody\" is registered."));
}

#[test]
fn employee_lookup_is_case_sensitive() {
    let data_dir = setup_test_store("clock_case");
    init_store_with_employee(&data_dir, "Ali");

    // registration was case-insensitive for uniqueness, lookup is not
    atl()
        .args(["--data-dir", &data_dir, "clock", "ALI"])
        .assert()
        .failure()
        .stderr(contains("No employee named \"ALI\" is registered."));
}

#[test]
fn first_clock_logs_in() {
    let data_dir = setup_test_store("clock_first");
    init_store_with_employee(&data_dir, "Ali");

    atl()
        .args(["--data-dir", &data_dir, "clock", "Ali"])
        .assert()
        .success()
        .stdout(contains("clocked in"))
        .stdout(contains("Manager notification"));

    atl()
        .args(["--data-dir", &data_dir, "status", "Ali"])
        .assert()
        .success()
        .stdout(contains("clocked IN"))
        .stdout(contains("Last action: Login"));
}

#[test]
fn second_clock_logs_out() {
    let data_dir = setup_test_store("clock_second");
    init_store_with_employee(&data_dir, "Ali");

    atl()
        .args(["--data-dir", &data_dir, "clock", "Ali"])
        .assert()
        .success()
        .stdout(contains("clocked in"));

    atl()
        .args(["--data-dir", &data_dir, "clock", "Ali"])
        .assert()
        .success()
        .stdout(contains("clocked out"));

    atl()
        .args(["--data-dir", &data_dir, "status", "Ali"])
        .assert()
        .success()
        .stdout(contains("clocked OUT"));
}

#[test]
fn status_without_history_is_clocked_out() {
    let data_dir = setup_test_store("status_empty");
    init_store_with_employee(&data_dir, "Ali");

    atl()
        .args(["--data-dir", &data_dir, "status", "Ali"])
        .assert()
        .success()
        .stdout(contains("clocked OUT"))
        .stdout(contains("No attendance recorded yet."));
}

#[test]
fn status_follows_most_recent_entry_not_stored_order() {
    let data_dir = setup_test_store("status_order");
    init_store_with_employee(&data_dir, "Ali");

    // stored out of order: the Logout is appended first but is the older one
    seed_entry(&data_dir, "Ali", LogAction::Logout, 2, 17, 0);
    seed_entry(&data_dir, "Ali", LogAction::Login, 3, 9, 0);

    atl()
        .args(["--data-dir", &data_dir, "status", "Ali"])
        .assert()
        .success()
        .stdout(contains("clocked IN"));
}

#[test]
fn report_lists_entries_chronologically() {
    let data_dir = setup_test_store("report_order");
    init_store_with_employee(&data_dir, "Ali");

    seed_entry(&data_dir, "Ali", LogAction::Login, 2, 9, 0);
    seed_entry(&data_dir, "Ali", LogAction::Logout, 2, 17, 0);

    atl()
        .args(["--data-dir", &data_dir, "report", "--secret", "1234"])
        .assert()
        .success()
        .stdout(contains("Login"))
        .stdout(contains("Logout"))
        .stdout(contains("2025-06-02"));
}

#[test]
fn report_filters_by_employee() {
    let data_dir = setup_test_store("report_filter");
    init_store_with_employee(&data_dir, "Ali");

    seed_entry(&data_dir, "Ali", LogAction::Login, 2, 9, 0);
    seed_entry(&data_dir, "Megan Cole", LogAction::Login, 2, 10, 0);

    atl()
        .args([
            "--data-dir",
            &data_dir,
            "report",
            "--employee",
            "Ali",
            "--secret",
            "1234",
        ])
        .assert()
        .success()
        .stdout(contains("Ali"))
        .stdout(predicates::str::contains("Megan Cole").not());
}

#[test]
fn report_requires_valid_secret() {
    let data_dir = setup_test_store("report_secret");

    atl()
        .args(["--data-dir", &data_dir, "report", "--secret", "wrong"])
        .assert()
        .failure()
        .stderr(contains("manager secret is not valid"));
}
