//! Value cleaning.
//!
//! The `..` sentinel and anything that does not parse as a number become
//! absent. Absent cells are dropped.

use tracing::trace;

use wdi_model::{LongRecord, MISSING_SENTINEL};

use crate::unpivot::MeltedCell;

/// Classification of one raw cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellOutcome {
    Value(f64),
    /// The `..` missing-value token.
    Sentinel,
    /// Non-empty text that is not a number.
    Unparsable,
    Empty,
}

impl CellOutcome {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// Classifies a raw cell.
pub fn clean_value(raw: Option<&str>) -> CellOutcome {
    let Some(raw) = raw else {
        return CellOutcome::Empty;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellOutcome::Empty;
    }
    if trimmed == MISSING_SENTINEL {
        return CellOutcome::Sentinel;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if !v.is_nan() => CellOutcome::Value(v),
        _ => CellOutcome::Unparsable,
    }
}

/// Counts of each cell outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleaningStats {
    pub values: usize,
    pub sentinel: usize,
    pub unparsable: usize,
    pub empty: usize,
}

impl CleaningStats {
    pub fn total(&self) -> usize {
        self.values + self.sentinel + self.unparsable + self.empty
    }

    pub fn dropped(&self) -> usize {
        self.total() - self.values
    }

    fn record(&mut self, outcome: CellOutcome) {
        match outcome {
            CellOutcome::Value(_) => self.values += 1,
            CellOutcome::Sentinel => self.sentinel += 1,
            CellOutcome::Unparsable => self.unparsable += 1,
            CellOutcome::Empty => self.empty += 1,
        }
    }
}

/// Cleans melted cells, keeping only those with a numeric value.
pub fn clean_values(cells: Vec<MeltedCell>) -> (Vec<LongRecord>, CleaningStats) {
    let mut stats = CleaningStats::default();
    let mut records = Vec::with_capacity(cells.len());
    for cell in cells {
        let outcome = clean_value(cell.raw.as_deref());
        stats.record(outcome);
        if outcome == CellOutcome::Unparsable {
            trace!(
                country_code = %cell.country_code,
                series_code = %cell.series_code,
                year = cell.year,
                raw = cell.raw.as_deref().unwrap_or_default(),
                "non-numeric cell treated as missing"
            );
        }
        if let Some(value) = outcome.value() {
            records.push(LongRecord {
                country_name: cell.country_name,
                country_code: cell.country_code,
                series_code: cell.series_code,
                year: cell.year,
                value,
            });
        }
    }
    (records, stats)
}
