//! Error types for the rowscope library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rowscope operations.
#[derive(Debug, Error)]
pub enum RowscopeError {
    /// Non-success HTTP response from the dataset API.
    #[error("HTTP {status} from dataset API: {body}")]
    Http { status: u16, body: String },

    /// Network-level failure (connection refused, timeout, etc.).
    #[error("network error: {0}")]
    Network(String),

    /// A page request failed on every allowed attempt.
    #[error("request failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// The rows endpoint returned an empty page before the reported total
    /// was reached.
    #[error("dataset API returned no rows at offset {offset}; expected {total} rows total")]
    ShortRead { offset: usize, total: usize },

    /// No rows available where at least one was required.
    #[error("empty dataset: {0}")]
    EmptyDataset(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Error saving or loading a file.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Error reading or writing an export file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for rowscope operations.
pub type Result<T> = std::result::Result<T, RowscopeError>;
