//! WDI panel transformation.
//!
//! Reshapes a wide World Development Indicators extract (one row per country
//! and series, one column per year) into a country-year panel:
//!
//! - **filter**: keep catalog indicators only
//! - **unpivot**: one cell per (row, year column)
//! - **clean**: `..` and non-numeric cells become absent
//! - **pivot**: one row per (country, year), one slot per indicator
//! - **panel**: year-range and completeness filters, ordering
//! - **frame**: Polars DataFrame assembly and column renaming
//! - **pipeline**: all of the above in order, with a run report

pub mod clean;
pub mod data_utils;
pub mod error;
pub mod filter;
pub mod frame;
pub mod panel;
pub mod pipeline;
pub mod pivot;
pub mod unpivot;

pub use clean::{CellOutcome, CleaningStats, clean_value, clean_values};
pub use error::{Result, TransformError};
pub use filter::{IndicatorSelection, filter_indicators};
pub use frame::{PanelFrame, build_pivot_frame, rename_indicator_columns};
pub use panel::{drop_empty_rows, filter_year_range, sort_panel};
pub use pipeline::{PanelBuild, PanelReport, build_panel};
pub use pivot::{PivotResult, pivot_panel};
pub use unpivot::{MeltedCell, unpivot_years};
