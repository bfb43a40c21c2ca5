//! Employee registration: validation, duplicates, secret gating.

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{atl, setup_test_store};

#[test]
fn register_adds_employee_to_roster() {
    let data_dir = setup_test_store("register_ok");

    atl()
        .args(["--data-dir", &data_dir, "--test", "init"])
        .assert()
        .success();

    atl()
        .args(["--data-dir", &data_dir, "register", "Ali", "--secret", "1234"])
        .assert()
        .success()
        .stdout(contains("registered"));

    atl()
        .args(["--data-dir", &data_dir, "employees"])
        .assert()
        .success()
        .stdout(contains("Ali"));
}

#[test]
fn register_trims_surrounding_whitespace() {
    let data_dir = setup_test_store("register_trim");

    atl()
        .args(["--data-dir", &data_dir, "register", "  Zoe  ", "--secret", "1234"])
        .assert()
        .success()
        .stdout(contains("\"Zoe\""));
}

#[test]
fn register_rejects_case_insensitive_duplicate() {
    let data_dir = setup_test_store("register_dup");

    atl()
        .args(["--data-dir", &data_dir, "register", "Ali", "--secret", "1234"])
        .assert()
        .success();

    // differs only in case and trailing whitespace
    atl()
        .args(["--data-dir", &data_dir, "register", "ali ", "--secret", "1234"])
        .assert()
        .failure()
        .stderr(contains("already registered"));

    // roster unchanged: one "Ali", no "ali"
    atl()
        .args(["--data-dir", &data_dir, "employees"])
        .assert()
        .success()
        .stdout(contains("Ali"))
        .stdout(contains("ali ").not());

    let store = attlog::store::KvStore::new(&data_dir);
    let roster = attlog::core::directory::Directory::new(&store).list_employees();
    assert_eq!(
        roster.iter().filter(|e| e.name.eq_ignore_ascii_case("ali")).count(),
        1
    );
}

#[test]
fn register_rejects_blank_name() {
    let data_dir = setup_test_store("register_blank");

    atl()
        .args(["--data-dir", &data_dir, "register", "   ", "--secret", "1234"])
        .assert()
        .failure()
        .stderr(contains("cannot be empty"));

    // stored roster untouched: still exactly the three seeded defaults
    let store = attlog::store::KvStore::new(&data_dir);
    let roster = attlog::core::directory::Directory::new(&store).list_employees();
    assert_eq!(roster.len(), 3);
}

#[test]
fn register_rejects_wrong_secret() {
    let data_dir = setup_test_store("register_secret");

    atl()
        .args(["--data-dir", &data_dir, "register", "Ali", "--secret", "nope"])
        .assert()
        .failure()
        .stderr(contains("manager secret is not valid"));

    atl()
        .args(["--data-dir", &data_dir, "employees"])
        .assert()
        .success()
        .stdout(contains("Ali").not());
}

#[test]
fn default_roster_is_seeded_on_first_use() {
    let data_dir = setup_test_store("register_defaults");

    atl()
        .args(["--data-dir", &data_dir, "employees"])
        .assert()
        .success()
        .stdout(contains("Megan Cole"))
        .stdout(contains("Arjun Patel"))
        .stdout(contains("Lena Fischer"));
}
