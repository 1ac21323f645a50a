//! Long-to-wide pivot keyed by (country name, country code, year).

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::warn;

use wdi_model::{IndicatorCatalog, LongRecord, PanelKey, PanelRecord};

/// Pivoted rows in key order, plus what the pivot had to discard.
#[derive(Debug, Clone, Default)]
pub struct PivotResult {
    pub rows: Vec<PanelRecord>,
    /// Values dropped because their (country, year, series) slot was already filled.
    pub duplicates: usize,
}

/// Spreads long records into one row per (country name, country code, year).
///
/// Each catalog indicator gets one slot, in catalog order. If the same
/// (country, year, series) triple appears more than once, the first value in
/// input order is kept and later ones are counted as duplicates. Values are
/// never averaged. Records whose series is not in the catalog are skipped.
pub fn pivot_panel(records: Vec<LongRecord>, catalog: &IndicatorCatalog) -> PivotResult {
    let width = catalog.len();
    let mut grid: BTreeMap<PanelKey, PanelRecord> = BTreeMap::new();
    let mut duplicates = 0usize;

    for record in records {
        let Some(slot) = catalog.position(&record.series_code) else {
            continue;
        };
        let row = match grid.entry(record.key()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let key = entry.key().clone();
                entry.insert(PanelRecord::empty(key, width))
            }
        };
        if row.values[slot].is_some() {
            duplicates += 1;
            warn!(
                country_code = %row.country_code,
                year = row.year,
                series_code = %record.series_code,
                kept = ?row.values[slot],
                dropped = record.value,
                "duplicate observation, keeping first value"
            );
            continue;
        }
        row.values[slot] = Some(record.value);
    }

    PivotResult {
        rows: grid.into_values().collect(),
        duplicates,
    }
}
