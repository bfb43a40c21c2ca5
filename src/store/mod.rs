//! File-backed key-value store (lightweight for CLI usage).
//!
//! Each logical key maps to one JSON text file inside the data directory,
//! mirroring an origin-scoped browser storage namespace: no expiry, no
//! cross-device sync, no transactional isolation. Two processes writing the
//! same key can race and lose an update; acceptable for the single-user,
//! single-terminal deployment this tool targets.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Fixed storage keys.
pub const EMPLOYEES_KEY: &str = "registered_employees";
pub const MANAGER_SECRET_KEY: &str = "manager_secret";
pub const ATTENDANCE_LOG_KEY: &str = "attendance_log";
pub const OPS_LOG_KEY: &str = "ops_log";

pub struct KvStore {
    dir: PathBuf,
}

impl KvStore {
    pub fn new(dir: &str) -> Self {
        Self {
            dir: PathBuf::from(dir),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read the raw value for `key`, or `None` when absent.
    /// Unreadable files degrade to `None` and are reported on the operator
    /// console only, never to the end user.
    pub fn read(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                log::error!("error reading store key '{key}': {e}");
                None
            }
        }
    }

    /// Write the raw value for `key`, creating the data directory on first
    /// use. Failures surface as `Persistence` so callers can report
    /// "could not save".
    pub fn write(&self, key: &str, raw: &str) -> AppResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| AppError::Persistence(format!("could not create data directory: {e}")))?;
        fs::write(self.key_path(key), raw)
            .map_err(|e| AppError::Persistence(format!("could not write key '{key}': {e}")))
    }

    /// Remove `key` from the store. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Persistence(format!(
                "could not remove key '{key}': {e}"
            ))),
        }
    }

    /// All keys currently present in the store, in directory order.
    pub fn keys(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        let mut keys = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem()
            {
                keys.push(stem.to_string_lossy().to_string());
            }
        }
        keys
    }
}
