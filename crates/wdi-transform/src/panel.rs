//! Row filters and ordering for pivoted panel rows.

use wdi_model::{PanelRecord, YearRange};

/// Keeps rows whose year lies in `range` (both bounds inclusive).
pub fn filter_year_range(rows: Vec<PanelRecord>, range: YearRange) -> Vec<PanelRecord> {
    rows.into_iter()
        .filter(|row| range.contains(row.year))
        .collect()
}

/// Drops rows where every indicator is absent.
pub fn drop_empty_rows(rows: Vec<PanelRecord>) -> Vec<PanelRecord> {
    rows.into_iter().filter(PanelRecord::has_any_value).collect()
}

/// Stable sort by country name, then year.
pub fn sort_panel(rows: &mut [PanelRecord]) {
    rows.sort_by(|a, b| {
        a.country_name
            .cmp(&b.country_name)
            .then_with(|| a.year.cmp(&b.year))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, code: &str, year: i32, values: Vec<Option<f64>>) -> PanelRecord {
        PanelRecord {
            country_name: name.to_string(),
            country_code: code.to_string(),
            year,
            values,
        }
    }

    #[test]
    fn year_filter_is_inclusive() {
        let rows = vec![
            row("A", "A", 1974, vec![Some(1.0)]),
            row("A", "A", 1975, vec![Some(1.0)]),
            row("A", "A", 2023, vec![Some(1.0)]),
            row("A", "A", 2024, vec![Some(1.0)]),
        ];
        let kept = filter_year_range(rows, YearRange::new(1975, 2023));
        let years: Vec<i32> = kept.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![1975, 2023]);
    }

    #[test]
    fn partially_present_rows_survive() {
        let rows = vec![
            row("A", "A", 2000, vec![None, None]),
            row("A", "A", 2001, vec![None, Some(0.0)]),
        ];
        let kept = drop_empty_rows(rows);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].year, 2001);
    }

    #[test]
    fn sort_is_by_name_then_year_and_stable() {
        // Same name, different codes: ties on (name, year) keep input order.
        let mut rows = vec![
            row("Zambia", "ZMB", 2000, vec![]),
            row("Congo", "COG", 2001, vec![]),
            row("Congo", "COD", 2001, vec![]),
            row("Congo", "COG", 2000, vec![]),
        ];
        sort_panel(&mut rows);
        let keys: Vec<(&str, i32)> = rows
            .iter()
            .map(|r| (r.country_code.as_str(), r.year))
            .collect();
        assert_eq!(
            keys,
            vec![("COG", 2000), ("COG", 2001), ("COD", 2001), ("ZMB", 2000)]
        );
    }
}
