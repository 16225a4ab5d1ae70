//! Error types for the built-in adapters.

use thiserror::Error;

/// Errors that can occur while reading or writing a medium.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// I/O error from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CBOR encoding or decoding error.
    #[error("CBOR error: {0}")]
    Cbor(String),

    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// A lock guarding the medium was poisoned.
    #[error("lock poisoned: {0}")]
    Poisoned(String),

    /// A blocking task could not be joined.
    #[error("blocking task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;
