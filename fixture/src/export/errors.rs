//! Error types for fixture export

use thiserror::Error;

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while rendering a fixture
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV writer failure
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying writer failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Unrecognized export format name
    #[error("Unknown export format: {0} (expected table, csv, html or json)")]
    UnknownFormat(String),
}
