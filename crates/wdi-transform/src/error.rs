//! Error types for panel transformation.

use thiserror::Error;

/// Errors raised while reshaping an extract into a panel.
///
/// Data-quality problems (sentinels, non-numeric cells, empty rows) are not
/// errors; they are absorbed by the cleaning rules and only counted.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Column not found in DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Column exists but is not a string column.
    #[error("column '{column}' is not a string column: {message}")]
    ColumnType { column: String, message: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
