//! Error types for the datacommons library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for datacommons operations.
#[derive(Debug, Error)]
pub enum DatacommonsError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No dataset is registered under the requested identifier.
    #[error("Dataset '{dataset_id}' not found.")]
    NotFound { dataset_id: String },

    /// Metadata violated a construction invariant.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration document is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DatacommonsError {
    /// Wrap an I/O error with the path it occurred on.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DatacommonsError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for datacommons operations.
pub type Result<T> = std::result::Result<T, DatacommonsError>;
