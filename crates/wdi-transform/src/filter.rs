//! Indicator filter.

use std::collections::BTreeSet;

use polars::prelude::{BooleanChunked, NamedFrom};
use tracing::{debug, warn};

use wdi_ingest::WdiTable;
use wdi_model::{IndicatorCatalog, SERIES_CODE};

use crate::data_utils::string_column;
use crate::error::Result;

/// Rows kept by [`filter_indicators`] and the series they cover.
#[derive(Debug, Clone)]
pub struct IndicatorSelection {
    /// Extract restricted to catalog series.
    pub table: WdiTable,
    /// Distinct series codes present after filtering.
    pub retained: BTreeSet<String>,
    /// Catalog series codes absent from the extract, in catalog order.
    pub missing: Vec<&'static str>,
}

impl IndicatorSelection {
    pub fn retained_count(&self) -> usize {
        self.retained.len()
    }
}

/// Keeps only rows whose Series Code is a catalog key.
///
/// Catalog indicators missing from the extract are reported, not raised.
pub fn filter_indicators(table: &WdiTable, catalog: &IndicatorCatalog) -> Result<IndicatorSelection> {
    let codes = string_column(&table.data, SERIES_CODE)?;
    let mut retained = BTreeSet::new();
    let mut keep = Vec::with_capacity(table.data.height());
    for code in codes.into_iter() {
        let hit = code.is_some_and(|code| catalog.contains(code));
        if let (true, Some(code)) = (hit, code) {
            retained.insert(code.to_string());
        }
        keep.push(hit);
    }

    let mask = BooleanChunked::new("keep".into(), keep);
    let filtered = table.data.filter(&mask)?;

    let missing: Vec<&'static str> = catalog
        .iter()
        .map(|indicator| indicator.series_code)
        .filter(|code| !retained.contains(*code))
        .collect();
    for code in &missing {
        warn!(series_code = %code, "indicator not present in extract");
    }
    debug!(
        input_rows = table.data.height(),
        kept_rows = filtered.height(),
        retained = retained.len(),
        "filtered indicators"
    );

    Ok(IndicatorSelection {
        table: table.with_data(filtered),
        retained,
        missing,
    })
}
