//! Column names, tokens, and file locations shared across the pipeline.

pub const COUNTRY_NAME: &str = "Country Name";
pub const COUNTRY_CODE: &str = "Country Code";
pub const SERIES_NAME: &str = "Series Name";
pub const SERIES_CODE: &str = "Series Code";
pub const YEAR: &str = "Year";

/// Identifier columns every WDI extract must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = [COUNTRY_NAME, COUNTRY_CODE, SERIES_NAME, SERIES_CODE];

/// Substring marking a year column header, e.g. "2015 [YR2015]".
pub const YEAR_COLUMN_MARKER: &str = "[YR";

/// Token WDI uses for a missing observation.
pub const MISSING_SENTINEL: &str = "..";

/// Data extract as exported by the WDI DataBank.
pub const DEFAULT_INPUT_PATH: &str = "ce0f13d9-ba3f-4150-8b8c-bdd9a04cec8f_Data.csv";

/// Series metadata exported alongside the data extract. Not read by the transform.
pub const DEFAULT_METADATA_PATH: &str =
    "ce0f13d9-ba3f-4150-8b8c-bdd9a04cec8f_Series - Metadata.csv";

pub const DEFAULT_OUTPUT_PATH: &str = "WDI_cleaned_1975_2023.csv";
