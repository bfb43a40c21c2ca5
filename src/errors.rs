//! Unified application error type.
//! All modules (store, core, cli, export, notify) return AppError to keep
//! the error handling consistent and easy to manage.
//! User-facing variants carry full sentences, never bare codes.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Could not save: {0}")]
    Persistence(String),

    #[error("Stored data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    NotFound(String),

    // ---------------------------
    // Notification collaborator
    // ---------------------------
    #[error("Notification service error: {0}")]
    Notification(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
