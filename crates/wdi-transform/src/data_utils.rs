//! DataFrame access helpers.

use polars::prelude::{DataFrame, StringChunked};

use crate::error::{Result, TransformError};

/// Borrow a string column by name.
pub fn string_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    let column = df
        .column(name)
        .map_err(|_| TransformError::ColumnNotFound {
            column: name.to_string(),
        })?;
    column.str().map_err(|e| TransformError::ColumnType {
        column: name.to_string(),
        message: e.to_string(),
    })
}

/// Non-empty string value at `idx`, exactly as read.
pub fn non_empty_value(column: &StringChunked, idx: usize) -> Option<&str> {
    column.get(idx).filter(|value| !value.is_empty())
}
