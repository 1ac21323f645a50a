//! CSV reading utilities.

mod header;
mod reader;

pub use header::{
    YearColumn, detect_year_columns, extract_year, is_year_column, normalize_header,
    validate_required_columns,
};
pub use reader::read_wdi_table;
