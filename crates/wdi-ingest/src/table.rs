//! In-memory WDI extract.

use std::path::PathBuf;

use polars::prelude::DataFrame;

use crate::csv::YearColumn;

/// A loaded WDI extract: one row per (country, series), one column per year.
#[derive(Debug, Clone)]
pub struct WdiTable {
    /// Source file.
    pub path: PathBuf,
    /// Every column typed as string.
    pub data: DataFrame,
    /// Year columns in header order.
    pub year_columns: Vec<YearColumn>,
}

impl WdiTable {
    pub fn row_count(&self) -> usize {
        self.data.height()
    }

    /// Returns a copy of this table with `data` replaced.
    ///
    /// Used by row filters; the column layout must be unchanged.
    pub fn with_data(&self, data: DataFrame) -> Self {
        Self {
            path: self.path.clone(),
            data,
            year_columns: self.year_columns.clone(),
        }
    }
}
