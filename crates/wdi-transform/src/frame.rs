//! Panel frame assembly.
//!
//! Panel rows become a Polars DataFrame with the identifier columns first,
//! then one nullable Float64 column per catalog indicator.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use wdi_model::{COUNTRY_CODE, COUNTRY_NAME, IndicatorCatalog, PanelRecord, YEAR};

use crate::error::Result;

/// The finished country-year panel.
#[derive(Debug, Clone)]
pub struct PanelFrame {
    /// `Country Name`, `Country Code`, `Year`, then the indicator short names.
    pub data: DataFrame,
}

impl PanelFrame {
    pub fn new(data: DataFrame) -> Self {
        Self { data }
    }

    /// Returns the number of country-year rows.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    /// (rows, columns).
    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }
}

/// Builds a DataFrame from panel rows with indicator columns named by series code.
pub fn build_pivot_frame(rows: &[PanelRecord], catalog: &IndicatorCatalog) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(3 + catalog.len());
    columns.push(
        Series::new(
            COUNTRY_NAME.into(),
            rows.iter().map(|r| r.country_name.clone()).collect::<Vec<_>>(),
        )
        .into_column(),
    );
    columns.push(
        Series::new(
            COUNTRY_CODE.into(),
            rows.iter().map(|r| r.country_code.clone()).collect::<Vec<_>>(),
        )
        .into_column(),
    );
    columns.push(
        Series::new(YEAR.into(), rows.iter().map(|r| r.year).collect::<Vec<i32>>())
            .into_column(),
    );
    for (slot, indicator) in catalog.iter().enumerate() {
        let values: Vec<Option<f64>> = rows
            .iter()
            .map(|r| r.values.get(slot).copied().flatten())
            .collect();
        columns.push(Series::new(indicator.series_code.into(), values).into_column());
    }
    Ok(DataFrame::new(columns)?)
}

/// Renames series-code columns to their catalog short names.
///
/// Columns whose series code is absent from the frame are skipped.
pub fn rename_indicator_columns(df: &mut DataFrame, catalog: &IndicatorCatalog) -> Result<()> {
    for indicator in catalog.iter() {
        if df.column(indicator.series_code).is_ok() {
            df.rename(indicator.series_code, indicator.short_name.into())?;
        }
    }
    Ok(())
}
