//! Internal operations log, kept under its own store key.
//! Best-effort: a failure to record never blocks the operation itself.

use crate::errors::AppResult;
use crate::store::{KvStore, OPS_LOG_KEY};
use ansi_term::Colour;
use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpsEntry {
    pub timestamp: String, // RFC 3339
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append one line to the internal operations log.
pub fn record(store: &KvStore, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let mut entries = load(store);
    entries.push(OpsEntry {
        timestamp: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    });
    let raw = serde_json::to_string_pretty(&entries)?;
    store.write(OPS_LOG_KEY, &raw)
}

fn load(store: &KvStore) -> Vec<OpsEntry> {
    let Some(raw) = store.read(OPS_LOG_KEY) else {
        return Vec::new();
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::error!("error reading operations log: {e}");
        Vec::new()
    })
}

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Color per operation kind.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "register" => Colour::Green,
        "reset" => Colour::Red,
        "clock" => Colour::Cyan,
        "export" => Colour::Yellow,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct OplogLogic;

impl OplogLogic {
    pub fn print_log(store: &KvStore) -> AppResult<()> {
        let entries = load(store);

        if entries.is_empty() {
            println!("The operations log is empty.");
            return Ok(());
        }

        let date_w = entries.iter().map(|e| e.timestamp.len()).max().unwrap_or(0);
        let op_w = entries
            .iter()
            .map(|e| {
                if e.target.is_empty() {
                    e.operation.len()
                } else {
                    e.operation.len() + e.target.len() + 3
                }
            })
            .max()
            .unwrap_or(10)
            .min(60);

        println!("📜 Operations log:\n");

        for e in entries {
            let colored_op = color_for_operation(&e.operation).paint(&e.operation).to_string();
            let op_target = if e.target.is_empty() {
                colored_op
            } else {
                format!("{} ({})", colored_op, e.target)
            };

            // padding computed on the visible width, without ANSI codes
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op_target).len()));

            println!(
                "{:<date_w$} | {}{} => {}",
                e.timestamp,
                op_target,
                padding,
                e.message,
                date_w = date_w
            );
        }

        Ok(())
    }
}
