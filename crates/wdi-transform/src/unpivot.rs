//! Wide-to-long reshape over year columns.

use tracing::warn;

use wdi_ingest::WdiTable;
use wdi_model::{COUNTRY_CODE, COUNTRY_NAME, SERIES_CODE};

use crate::data_utils::{non_empty_value, string_column};
use crate::error::Result;

/// One (country, series, year) cell before value cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeltedCell {
    pub country_name: String,
    pub country_code: String,
    pub series_code: String,
    pub year: i32,
    /// Cell text as read; `None` for an empty field.
    pub raw: Option<String>,
}

/// Unpivots every year column into one [`MeltedCell`] per (row, year column).
///
/// Rows without a country name, country code or series code cannot be keyed
/// and are skipped. Identifiers are carried verbatim, the same way the
/// indicator filter matches series codes.
pub fn unpivot_years(table: &WdiTable) -> Result<Vec<MeltedCell>> {
    let df = &table.data;
    let names = string_column(df, COUNTRY_NAME)?;
    let codes = string_column(df, COUNTRY_CODE)?;
    let series = string_column(df, SERIES_CODE)?;
    let mut years = Vec::with_capacity(table.year_columns.len());
    for column in &table.year_columns {
        years.push((string_column(df, &column.name)?, column.year));
    }

    let mut cells = Vec::with_capacity(df.height() * years.len());
    let mut unkeyed = 0usize;
    for idx in 0..df.height() {
        let (Some(name), Some(code), Some(series_code)) = (
            non_empty_value(names, idx),
            non_empty_value(codes, idx),
            non_empty_value(series, idx),
        ) else {
            unkeyed += 1;
            continue;
        };
        for (column, year) in &years {
            cells.push(MeltedCell {
                country_name: name.to_string(),
                country_code: code.to_string(),
                series_code: series_code.to_string(),
                year: *year,
                raw: column.get(idx).map(str::to_string),
            });
        }
    }
    if unkeyed > 0 {
        warn!(rows = unkeyed, "skipped rows without country or series identifiers");
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
    use wdi_ingest::YearColumn;

    use super::*;

    const YEAR_2000: &str = "2000 [YR2000]";

    fn table(names: Vec<Option<&str>>, values: Vec<Option<&str>>) -> WdiTable {
        let height = names.len();
        let data = DataFrame::new(vec![
            Series::new(COUNTRY_NAME.into(), names).into_column(),
            Series::new(COUNTRY_CODE.into(), vec!["CHL"; height]).into_column(),
            Series::new(SERIES_CODE.into(), vec!["NY.GDP.MKTP.CD"; height]).into_column(),
            Series::new(YEAR_2000.into(), values).into_column(),
        ])
        .unwrap();
        WdiTable {
            path: PathBuf::from("extract.csv"),
            data,
            year_columns: vec![YearColumn {
                name: YEAR_2000.to_string(),
                year: 2000,
            }],
        }
    }

    #[test]
    fn identifiers_are_not_trimmed() {
        let cells = unpivot_years(&table(
            vec![Some(" Chile"), Some("Chile")],
            vec![Some("1"), Some("2")],
        ))
        .unwrap();

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].country_name, " Chile");
        assert_eq!(cells[1].country_name, "Chile");
        assert_ne!(cells[0].country_name, cells[1].country_name);
    }

    #[test]
    fn unkeyed_rows_are_skipped() {
        let cells = unpivot_years(&table(
            vec![Some("Chile"), None, Some("")],
            vec![Some("1"), Some("2"), Some("3")],
        ))
        .unwrap();

        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].year, 2000);
        assert_eq!(cells[0].raw.as_deref(), Some("1"));
    }

    #[test]
    fn empty_cells_are_carried_as_none() {
        let cells = unpivot_years(&table(vec![Some("Chile")], vec![None])).unwrap();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].raw, None);
    }
}
