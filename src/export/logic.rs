// src/export/logic.rs

use crate::core::attendance::AttendanceLog;
use crate::core::directory::Directory;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::store::KvStore;
use crate::ui::messages::warning;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the full attendance log.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: absolute path of the output file
    ///
    /// Rows are ordered by timestamp ascending. The CSV flavor joins the
    /// roster to resolve employee ids and carries a UTF-8 BOM so
    /// spreadsheet tools pick the right encoding.
    pub fn export(store: &KvStore, format: &ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let mut entries = AttendanceLog::new(store).list_all();
        entries.sort_by_key(|e| e.timestamp);

        if entries.is_empty() {
            warning("⚠️  No attendance entries to export.");
            return Ok(());
        }

        let roster = Directory::new(store).list_employees();

        match format {
            ExportFormat::Csv => export_csv(&entries, &roster, path)?,
            ExportFormat::Json => export_json(&entries, path)?,
        }

        Ok(())
    }
}
