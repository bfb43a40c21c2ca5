//! Append-only attendance log on top of the key-value store.

use crate::errors::AppResult;
use crate::models::log_entry::LogEntry;
use crate::store::{ATTENDANCE_LOG_KEY, KvStore};

pub struct AttendanceLog<'a> {
    store: &'a KvStore,
}

impl<'a> AttendanceLog<'a> {
    pub fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// Append one entry to the end of the persisted log.
    ///
    /// Read-modify-write on a single key, no cross-process locking: two
    /// near-simultaneous writers can lose an update (single-user deployment
    /// assumption). No dedup, no alternation check.
    pub fn append(&self, entry: &LogEntry) -> AppResult<()> {
        let mut entries = self.list_all();
        entries.push(entry.clone());
        let raw = serde_json::to_string_pretty(&entries)?;
        self.store.write(ATTENDANCE_LOG_KEY, &raw)
    }

    /// All entries in stored order. Callers sort by timestamp when order
    /// matters. Corrupt stored JSON degrades to an empty log.
    pub fn list_all(&self) -> Vec<LogEntry> {
        let Some(raw) = self.store.read(ATTENDANCE_LOG_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("error retrieving attendance log: {e}");
                Vec::new()
            }
        }
    }

    /// Entries for one employee, exact name match, stored order.
    pub fn list_for_employee(&self, name: &str) -> Vec<LogEntry> {
        self.list_all()
            .into_iter()
            .filter(|entry| entry.employee_name == name)
            .collect()
    }
}
