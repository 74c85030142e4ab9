//! Unified application error type.
//! The storage, config, CLI and export layers return AppError so the binary
//! has one place to report failures. Decoding and compliance evaluation never
//! fail: they degrade to empty entities or skipped fields instead.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing / serialization
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid entity kind: {0}")]
    InvalidKind(String),

    #[error("Record of {len} slots does not fit the {kind} layout")]
    InvalidRecord { kind: &'static str, len: usize },

    #[error("Invalid status kind: {0}")]
    InvalidStatus(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("No {kind} found with id {id}")]
    NotFound { kind: &'static str, id: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

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
