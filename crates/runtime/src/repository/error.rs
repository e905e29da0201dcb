//! Error types raised by history repository implementations.

use thiserror::Error;

/// Errors surfaced by history repositories and the result store.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("page size must be positive")]
    InvalidPageSize,
}

pub type Result<T> = std::result::Result<T, HistoryError>;
