//! Data model for the WDI panel builder.
//!
//! - **catalog**: the fixed set of indicators retained in the panel
//! - **columns**: source and output column names, sentinel tokens, default paths
//! - **options**: year range and processing options threaded through the pipeline
//! - **record**: long (unpivoted) and panel (country-year) records

pub mod catalog;
pub mod columns;
pub mod options;
pub mod record;

pub use catalog::{Indicator, IndicatorCatalog, WDI_INDICATORS};
pub use columns::{
    COUNTRY_CODE, COUNTRY_NAME, DEFAULT_INPUT_PATH, DEFAULT_METADATA_PATH, DEFAULT_OUTPUT_PATH,
    MISSING_SENTINEL, REQUIRED_COLUMNS, SERIES_CODE, SERIES_NAME, YEAR, YEAR_COLUMN_MARKER,
};
pub use options::{PanelOptions, WDI_YEAR_RANGE, YearRange};
pub use record::{LongRecord, PanelKey, PanelRecord};
