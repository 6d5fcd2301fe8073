//! Error types for catalogue document operations.

use thiserror::Error;

/// Errors that can occur while reading or rewriting a catalogue document.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
