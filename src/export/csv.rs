// src/export/csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::employee::Employee;
use crate::models::log_entry::LogEntry;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Fixed column header set; consumers rely on this exact order.
const HEADERS: [&str; 5] = ["employee_id", "employee", "action", "date", "time"];

/// Export CSV with a UTF-8 byte-order marker for spreadsheet compatibility.
pub(crate) fn export_csv(entries: &[LogEntry], roster: &[Employee], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut file = File::create(path)?;
    file.write_all("\u{FEFF}".as_bytes())?;

    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record(HEADERS)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;

    for entry in entries {
        let employee_id = roster
            .iter()
            .find(|e| e.name == entry.employee_name)
            .map(|e| e.id.clone())
            .unwrap_or_default();

        wtr.write_record([
            employee_id,
            entry.employee_name.clone(),
            entry.action.la_as_str().to_string(),
            entry.date_str(),
            entry.time_str(),
        ])
        .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    notify_export_success("CSV", path);
    Ok(())
}
