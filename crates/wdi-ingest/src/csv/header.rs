//! Header normalization, required-column checks, and year column detection.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use wdi_model::{REQUIRED_COLUMNS, YEAR_COLUMN_MARKER};

use crate::error::{IngestError, Result};

/// First run of exactly four ASCII digits.
static YEAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])([0-9]{4})(?:[^0-9]|$)").expect("year pattern is valid")
});

/// A year column of the wide extract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearColumn {
    /// Header as it appears in the DataFrame.
    pub name: String,
    /// Year parsed from the header.
    pub year: i32,
}

/// Normalizes a header value by trimming whitespace and a leading BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_start_matches('\u{feff}').trim().to_string()
}

/// Returns true if the header names a year column (contains `[YR`).
pub fn is_year_column(header: &str) -> bool {
    header.contains(YEAR_COLUMN_MARKER)
}

/// Extracts the year from a year column header such as `"2015 [YR2015]"`.
///
/// The year is the first run of exactly four digits in the header.
pub fn extract_year(header: &str) -> Option<i32> {
    YEAR_PATTERN
        .captures(header)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

/// Fails with [`IngestError::MissingColumn`] for the first absent identifier column.
pub fn validate_required_columns(headers: &[String], path: &Path) -> Result<()> {
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(IngestError::MissingColumn {
                column: required.to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Finds every year column, in header order.
///
/// A header with the year marker but no four-digit year is fatal, as is an
/// extract with no year columns at all.
pub fn detect_year_columns(headers: &[String], path: &Path) -> Result<Vec<YearColumn>> {
    let mut columns = Vec::new();
    for header in headers.iter().filter(|h| is_year_column(h)) {
        let Some(year) = extract_year(header) else {
            return Err(IngestError::InvalidYearColumn {
                column: header.clone(),
                path: path.to_path_buf(),
            });
        };
        columns.push(YearColumn {
            name: header.clone(),
            year,
        });
    }
    if columns.is_empty() {
        return Err(IngestError::NoYearColumns {
            path: path.to_path_buf(),
        });
    }
    Ok(columns)
}
