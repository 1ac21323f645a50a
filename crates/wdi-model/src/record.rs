//! Intermediate and output records.

/// One observation after unpivoting and cleaning.
#[derive(Debug, Clone, PartialEq)]
pub struct LongRecord {
    pub country_name: String,
    pub country_code: String,
    pub series_code: String,
    pub year: i32,
    pub value: f64,
}

impl LongRecord {
    pub fn key(&self) -> PanelKey {
        PanelKey {
            country_name: self.country_name.clone(),
            country_code: self.country_code.clone(),
            year: self.year,
        }
    }
}

/// Pivot key identifying one panel row.
///
/// Ordering is (country name, country code, year), which is the grouping
/// order of the pivot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PanelKey {
    pub country_name: String,
    pub country_code: String,
    pub year: i32,
}

/// One country-year row of the panel.
///
/// `values` holds one slot per catalog indicator, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelRecord {
    pub country_name: String,
    pub country_code: String,
    pub year: i32,
    pub values: Vec<Option<f64>>,
}

impl PanelRecord {
    pub fn empty(key: PanelKey, width: usize) -> Self {
        Self {
            country_name: key.country_name,
            country_code: key.country_code,
            year: key.year,
            values: vec![None; width],
        }
    }

    /// Returns true if at least one indicator value is present.
    pub fn has_any_value(&self) -> bool {
        self.values.iter().any(Option::is_some)
    }
}
