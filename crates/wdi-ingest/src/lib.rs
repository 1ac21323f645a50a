//! WDI extract ingestion.
//!
//! Loads a World Development Indicators DataBank export into a Polars
//! DataFrame and identifies its year columns.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use wdi_ingest::read_wdi_table;
//!
//! let table = read_wdi_table(Path::new("wdi_extract.csv"))?;
//! for column in &table.year_columns {
//!     println!("{} -> {}", column.name, column.year);
//! }
//! ```

mod csv;
mod error;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    YearColumn, detect_year_columns, extract_year, is_year_column, normalize_header,
    read_wdi_table, validate_required_columns,
};

// === Tables ===
pub use table::WdiTable;
