#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use attlog::core::attendance::AttendanceLog;
use attlog::models::log_action::LogAction;
use attlog::models::log_entry::LogEntry;
use attlog::store::KvStore;
use chrono::{Local, TimeZone};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn atl() -> Command {
    let mut cmd = cargo_bin_cmd!("attlog");
    // keep the notifier offline regardless of the host environment
    cmd.env_remove("ATTLOG_API_KEY");
    cmd
}

/// Create a unique test data dir inside the system temp dir and remove any
/// leftover content from a previous run
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attlog", name));
    let data_dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&data_dir).ok();
    data_dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Append one attendance entry with a fixed timestamp directly via the
/// library API (bypasses the notifier and wall clock)
pub fn seed_entry(
    data_dir: &str,
    employee: &str,
    action: LogAction,
    day: u32,
    hour: u32,
    minute: u32,
) {
    let store = KvStore::new(data_dir);
    let ts = Local.with_ymd_and_hms(2025, 6, day, hour, minute, 0).unwrap();
    AttendanceLog::new(&store)
        .append(&LogEntry::new(employee, action, ts))
        .expect("append entry");
}

/// Initialize a seeded store and register one extra employee via the CLI
pub fn init_store_with_employee(data_dir: &str, employee: &str) {
    atl()
        .args(["--data-dir", data_dir, "--test", "init"])
        .assert()
        .success();

    atl()
        .args([
            "--data-dir",
            data_dir,
            "register",
            employee,
            "--secret",
            "1234",
        ])
        .assert()
        .success();
}
