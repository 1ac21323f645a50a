//! End-to-end panel construction.
//!
//! Stages run in a fixed order:
//!
//! 1. indicator filter
//! 2. unpivot year columns
//! 3. value cleaning (`..` and non-numeric cells become absent and are dropped)
//! 4. pivot to one row per (country name, country code, year)
//! 5. year-range filter
//! 6. completeness filter (at least one indicator present)
//! 7. sort by country name, then year
//! 8. frame assembly and rename of indicator columns to short names
//!
//! Renaming only touches column names, so it commutes with the row filters
//! and is applied once the frame exists.

use std::collections::BTreeSet;

use tracing::{debug, info, info_span};

use wdi_ingest::WdiTable;
use wdi_model::PanelOptions;

use crate::clean::{CleaningStats, clean_values};
use crate::error::Result;
use crate::filter::filter_indicators;
use crate::frame::{PanelFrame, build_pivot_frame, rename_indicator_columns};
use crate::panel::{drop_empty_rows, filter_year_range, sort_panel};
use crate::pivot::pivot_panel;
use crate::unpivot::unpivot_years;

/// Row counts and data-quality figures collected while building a panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelReport {
    /// Rows in the loaded extract.
    pub input_rows: usize,
    /// Rows kept by the indicator filter.
    pub indicator_rows: usize,
    /// Distinct catalog series present in the extract.
    pub retained_series: BTreeSet<String>,
    /// Catalog series absent from the extract.
    pub missing_series: Vec<&'static str>,
    /// Cells produced by the unpivot, by cleaning outcome.
    pub cleaning: CleaningStats,
    /// Values dropped by the pivot because their slot was already filled.
    pub duplicates: usize,
    /// Country-year rows produced by the pivot.
    pub pivot_rows: usize,
    /// Rows removed by the year-range filter.
    pub out_of_range_rows: usize,
    /// Rows removed because every indicator was absent.
    pub empty_rows: usize,
    /// Rows in the final panel.
    pub output_rows: usize,
}

impl PanelReport {
    pub fn retained_count(&self) -> usize {
        self.retained_series.len()
    }
}

/// A built panel with its report.
#[derive(Debug, Clone)]
pub struct PanelBuild {
    pub frame: PanelFrame,
    pub report: PanelReport,
}

/// Reshapes a loaded extract into the country-year panel.
///
/// Only DataFrame failures surface as errors; every data-quality issue is
/// absorbed by the cleaning and filtering rules and shows up in the report.
pub fn build_panel(table: &WdiTable, options: &PanelOptions) -> Result<PanelBuild> {
    let span = info_span!("transform", rows = table.row_count());
    let _guard = span.enter();
    let catalog = &options.catalog;
    let mut report = PanelReport {
        input_rows: table.row_count(),
        ..PanelReport::default()
    };

    let selection = filter_indicators(table, catalog)?;
    report.indicator_rows = selection.table.row_count();
    info!(
        retained = selection.retained_count(),
        catalog = catalog.len(),
        "retained target indicators"
    );

    let cells = unpivot_years(&selection.table)?;
    debug!(cells = cells.len(), "unpivoted year columns");
    let (records, cleaning) = clean_values(cells);
    info!(
        kept = cleaning.values,
        dropped = cleaning.dropped(),
        sentinel = cleaning.sentinel,
        unparsable = cleaning.unparsable,
        empty = cleaning.empty,
        "cleaned values"
    );

    let pivot = pivot_panel(records, catalog);
    report.pivot_rows = pivot.rows.len();
    report.duplicates = pivot.duplicates;

    let in_range = filter_year_range(pivot.rows, options.year_range);
    report.out_of_range_rows = report.pivot_rows - in_range.len();
    let before_completeness = in_range.len();
    let mut rows = drop_empty_rows(in_range);
    report.empty_rows = before_completeness - rows.len();
    sort_panel(&mut rows);
    report.output_rows = rows.len();
    debug!(
        pivot_rows = report.pivot_rows,
        out_of_range = report.out_of_range_rows,
        empty = report.empty_rows,
        output_rows = report.output_rows,
        "filtered panel rows"
    );

    let mut data = build_pivot_frame(&rows, catalog)?;
    rename_indicator_columns(&mut data, catalog)?;

    report.retained_series = selection.retained;
    report.missing_series = selection.missing;
    report.cleaning = cleaning;

    Ok(PanelBuild {
        frame: PanelFrame::new(data),
        report,
    })
}
