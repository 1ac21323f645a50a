//! Property tests for the panel row invariants.

use proptest::prelude::*;

use wdi_model::{IndicatorCatalog, LongRecord, WDI_INDICATORS, WDI_YEAR_RANGE};
use wdi_transform::{clean_value, drop_empty_rows, filter_year_range, pivot_panel, sort_panel};

const COUNTRIES: [(&str, &str); 4] = [
    ("Chile", "CHL"),
    ("Congo, Dem. Rep.", "COD"),
    ("Congo, Rep.", "COG"),
    ("Peru", "PER"),
];

fn long_record() -> impl Strategy<Value = LongRecord> {
    (0usize..COUNTRIES.len(), 0usize..8, 1960i32..=2030, -1e6f64..1e6).prop_map(
        |(country, slot, year, value)| {
            let (name, code) = COUNTRIES[country];
            LongRecord {
                country_name: name.to_string(),
                country_code: code.to_string(),
                series_code: WDI_INDICATORS[slot].series_code.to_string(),
                year,
                value,
            }
        },
    )
}

proptest! {
    #[test]
    fn panel_rows_satisfy_invariants(records in prop::collection::vec(long_record(), 0..200)) {
        let catalog = IndicatorCatalog::wdi();
        let pivot = pivot_panel(records, &catalog);
        let mut rows = drop_empty_rows(filter_year_range(pivot.rows, WDI_YEAR_RANGE));
        sort_panel(&mut rows);

        for row in &rows {
            prop_assert!(WDI_YEAR_RANGE.contains(row.year));
            prop_assert!(row.has_any_value());
        }
        for pair in rows.windows(2) {
            let a = (&pair[0].country_name, pair[0].year);
            let b = (&pair[1].country_name, pair[1].year);
            prop_assert!(a <= b);
            let key_a = (&pair[0].country_name, &pair[0].country_code, pair[0].year);
            let key_b = (&pair[1].country_name, &pair[1].country_code, pair[1].year);
            prop_assert_ne!(key_a, key_b);
        }
    }

    #[test]
    fn numeric_text_round_trips(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let text = value.to_string();
        prop_assert_eq!(clean_value(Some(&text)).value(), Some(value));
    }

    #[test]
    fn alphabetic_text_is_absent(text in "[a-zA-Z ]{1,12}") {
        // Rust parses "inf" and "infinity" as floats.
        prop_assume!(!["inf", "infinity"].contains(&text.trim().to_lowercase().as_str()));
        prop_assert_eq!(clean_value(Some(&text)).value(), None);
    }
}
