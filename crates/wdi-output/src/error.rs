//! Error types for panel output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while persisting or summarizing a panel.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to write the output file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode a CSV record.
    #[error("failed to encode CSV: {message}")]
    CsvEncode { message: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for OutputError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for OutputError {
    fn from(err: csv::Error) -> Self {
        Self::CsvEncode {
            message: err.to_string(),
        }
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
