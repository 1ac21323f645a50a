//! WDI panel output: CSV persistence and descriptive statistics.

pub mod csv_writer;
pub mod describe;
pub mod error;
pub mod format;

pub use csv_writer::{render_panel_csv, write_panel_csv};
pub use describe::{ColumnStats, ColumnSummary, NumericSummary, TextSummary, describe_frame};
pub use error::{OutputError, Result};
pub use format::{any_to_field, format_float, format_stat};
