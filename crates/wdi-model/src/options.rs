//! Processing options for the panel builder.

use crate::catalog::IndicatorCatalog;

/// Inclusive range of calendar years kept in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

/// Years retained in the published panel.
pub const WDI_YEAR_RANGE: YearRange = YearRange {
    start: 1975,
    end: 2023,
};

impl YearRange {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Returns true if `year` lies within the range, both bounds included.
    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }
}

impl Default for YearRange {
    fn default() -> Self {
        WDI_YEAR_RANGE
    }
}

/// Options controlling panel construction.
///
/// The command-line tool always runs with [`PanelOptions::default`]; the
/// fields exist so the pipeline stages do not reach for globals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelOptions {
    /// Indicators to retain, in output column order.
    pub catalog: IndicatorCatalog,
    /// Years to retain.
    pub year_range: YearRange,
}

impl PanelOptions {
    #[must_use]
    pub fn with_year_range(mut self, year_range: YearRange) -> Self {
        self.year_range = year_range;
        self
    }
}
