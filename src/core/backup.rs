//! Snapshot backup of the whole store.

use crate::core::oplog;
use crate::errors::AppResult;
use crate::store::KvStore;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Bundle every store key into a single JSON document at `dest_file`,
    /// optionally compressed into a `.zip` next to it.
    pub fn backup(store: &KvStore, dest_file: &str, compress: bool) -> AppResult<()> {
        let dest = Path::new(dest_file);

        // 1️⃣ Collect all keys into one snapshot document
        let mut snapshot: BTreeMap<String, String> = BTreeMap::new();
        for key in store.keys() {
            if let Some(raw) = store.read(&key) {
                snapshot.insert(key, raw);
            }
        }

        if snapshot.is_empty() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("No data found in store: {}", store.dir().display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Write the snapshot
        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(dest, json)?;
        println!("✅ Backup created: {}", dest.display());

        // 4️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(dest)?;

            if compressed != dest.to_path_buf() {
                if let Err(e) = fs::remove_file(dest) {
                    eprintln!("⚠️ Failed to remove uncompressed backup: {}", e);
                } else {
                    println!("🗑️ Removed uncompressed backup: {}", dest.display());
                }
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        // 5️⃣ Record in the operations log (non-blocking)
        if let Err(e) = oplog::record(
            store,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        ) {
            eprintln!("⚠️ Failed to write operations log: {}", e);
        }

        Ok(())
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(
        path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "attlog-backup.json".to_string()),
        options,
    )
    .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    println!("📦 Compressed: {}", zip_path.display());

    Ok(zip_path)
}
