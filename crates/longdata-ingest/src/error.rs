//! Error types for dataset loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Dataset file does not exist.
    #[error("dataset file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not a well-formed delimited table.
    #[error("malformed dataset {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    /// A column the lookup depends on is absent from the header.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;
