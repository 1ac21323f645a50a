//! Indicator catalog.
//!
//! The catalog maps WDI series codes to the short field names used in the
//! panel output. It doubles as the row filter (only catalog series survive)
//! and as the rename table for the pivoted columns. Insertion order is the
//! output column order.

/// One retained WDI indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    /// WDI series code (e.g. "NY.GDP.MKTP.CD").
    pub series_code: &'static str,
    /// Output column name (e.g. "GDP").
    pub short_name: &'static str,
}

impl Indicator {
    const fn new(series_code: &'static str, short_name: &'static str) -> Self {
        Self {
            series_code,
            short_name,
        }
    }
}

/// Indicators kept in the economic panel, in output column order.
pub const WDI_INDICATORS: [Indicator; 8] = [
    Indicator::new("NY.GDP.MKTP.CD", "GDP"),
    Indicator::new("NY.GDP.MKTP.KD.ZG", "GDP_Growth"),
    Indicator::new("FP.CPI.TOTL.ZG", "Inflation"),
    Indicator::new("SL.UEM.TOTL.NE.ZS", "Unemployment"),
    Indicator::new("NE.TRD.GNFS.ZS", "Trade"),
    Indicator::new("GC.DOD.TOTL.GD.ZS", "Debt"),
    Indicator::new("FS.AST.PRVT.GD.ZS", "Credit_to_Private_Sector"),
    Indicator::new("FB.AST.NPER.ZS", "NPLs"),
];

/// Ordered, read-only view over a set of indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorCatalog {
    indicators: &'static [Indicator],
}

impl Default for IndicatorCatalog {
    fn default() -> Self {
        Self::wdi()
    }
}

impl IndicatorCatalog {
    /// The standard eight-indicator economic catalog.
    pub const fn wdi() -> Self {
        Self {
            indicators: &WDI_INDICATORS,
        }
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Indicator> {
        self.indicators.iter()
    }

    /// Returns true if the series code is one of the catalog keys.
    ///
    /// Matching is exact; WDI series codes are case-sensitive identifiers.
    pub fn contains(&self, series_code: &str) -> bool {
        self.position(series_code).is_some()
    }

    /// Column index of a series code within the panel's indicator block.
    pub fn position(&self, series_code: &str) -> Option<usize> {
        self.indicators
            .iter()
            .position(|indicator| indicator.series_code == series_code)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn catalog_has_eight_unique_keys() {
        let catalog = IndicatorCatalog::wdi();
        assert_eq!(catalog.len(), 8);
        let keys: BTreeSet<_> = catalog.iter().map(|i| i.series_code).collect();
        assert_eq!(keys.len(), 8);
        let names: BTreeSet<_> = catalog.iter().map(|i| i.short_name).collect();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn short_names_follow_insertion_order() {
        assert_eq!(
            IndicatorCatalog::wdi()
                .iter()
                .map(|i| i.short_name)
                .collect::<Vec<_>>(),
            vec![
                "GDP",
                "GDP_Growth",
                "Inflation",
                "Unemployment",
                "Trade",
                "Debt",
                "Credit_to_Private_Sector",
                "NPLs",
            ]
        );
    }

    #[test]
    fn lookup_is_exact() {
        let catalog = IndicatorCatalog::wdi();
        assert_eq!(catalog.position("FP.CPI.TOTL.ZG"), Some(2));
        assert_eq!(catalog.position("FB.AST.NPER.ZS"), Some(7));
        assert!(!catalog.contains("fp.cpi.totl.zg"));
        assert!(!catalog.contains("SP.POP.TOTL"));
        assert!(!catalog.contains(""));
    }
}
