//! Integration tests for panel construction.

use std::io::Write;

use polars::prelude::DataFrame;
use tempfile::NamedTempFile;

use wdi_ingest::read_wdi_table;
use wdi_model::{IndicatorCatalog, PanelOptions, SERIES_CODE, YearRange};
use wdi_transform::{build_panel, filter_indicators};

const HEADER: &str =
    "Country Name,Country Code,Series Name,Series Code,1974 [YR1974],2000 [YR2000],2001 [YR2001]";

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

fn strings(df: &DataFrame, name: &str) -> Vec<String> {
    let col = df.column(name).unwrap().str().unwrap();
    (0..df.height())
        .map(|i| col.get(i).unwrap_or_default().to_string())
        .collect()
}

fn years(df: &DataFrame) -> Vec<i32> {
    let col = df.column("Year").unwrap().i32().unwrap();
    (0..df.height()).map(|i| col.get(i).unwrap()).collect()
}

fn floats(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    let col = df.column(name).unwrap().f64().unwrap();
    (0..df.height()).map(|i| col.get(i)).collect()
}

fn sample_extract() -> String {
    [
        HEADER,
        "Peru,PER,GDP (current US$),NY.GDP.MKTP.CD,1.0,51.7,..",
        "Peru,PER,Inflation,FP.CPI.TOTL.ZG,9.9,3.8,2.0",
        "Chile,CHL,GDP (current US$),NY.GDP.MKTP.CD,..,77.9,71.0",
        "Chile,CHL,\"Population, total\",SP.POP.TOTL,1,2,3",
        "Chile,CHL,Inflation,FP.CPI.TOTL.ZG,..,n/a,..",
        "Data from database: World Development Indicators,,,,,,",
    ]
    .join("\n")
}

#[test]
fn indicator_filter_keeps_only_catalog_series() {
    let file = create_temp_csv(&sample_extract());
    let table = read_wdi_table(file.path()).unwrap();
    let catalog = IndicatorCatalog::wdi();

    let selection = filter_indicators(&table, &catalog).unwrap();

    for code in strings(&selection.table.data, SERIES_CODE) {
        assert!(catalog.contains(&code), "unexpected series {code}");
    }
    assert_eq!(selection.retained_count(), 2);
    assert_eq!(selection.missing.len(), 6);
    assert!(!selection.missing.contains(&"NY.GDP.MKTP.CD"));
}

#[test]
fn builds_sorted_complete_panel_within_year_range() {
    let file = create_temp_csv(&sample_extract());
    let table = read_wdi_table(file.path()).unwrap();

    let build = build_panel(&table, &PanelOptions::default()).unwrap();
    let df = &build.frame.data;

    assert_eq!(strings(df, "Country Name"), vec!["Chile", "Chile", "Peru", "Peru"]);
    assert_eq!(years(df), vec![2000, 2001, 2000, 2001]);
    assert_eq!(
        floats(df, "GDP"),
        vec![Some(77.9), Some(71.0), Some(51.7), None]
    );
    assert_eq!(
        floats(df, "Inflation"),
        vec![None, None, Some(3.8), Some(2.0)]
    );
    assert_eq!(floats(df, "NPLs"), vec![None; 4]);
    assert_eq!(build.frame.shape(), (4, 11));

    let report = &build.report;
    assert_eq!(report.retained_count(), 2);
    assert_eq!(report.cleaning.sentinel, 4);
    assert_eq!(report.cleaning.unparsable, 1);
    assert_eq!(report.out_of_range_rows, 1);
    assert_eq!(report.empty_rows, 0);
    assert_eq!(report.output_rows, 4);
}

#[test]
fn rows_with_no_surviving_indicator_are_dropped() {
    let content = [
        HEADER,
        "Chile,CHL,GDP,NY.GDP.MKTP.CD,..,..,5",
        "Chile,CHL,Trade,NE.TRD.GNFS.ZS,..,..,..",
    ]
    .join("\n");
    let file = create_temp_csv(&content);
    let table = read_wdi_table(file.path()).unwrap();

    let build = build_panel(&table, &PanelOptions::default()).unwrap();

    assert_eq!(years(&build.frame.data), vec![2001]);
    assert_eq!(build.report.pivot_rows, 1);
}

#[test]
fn custom_year_range_bounds_are_inclusive() {
    let file = create_temp_csv(&sample_extract());
    let table = read_wdi_table(file.path()).unwrap();
    let options = PanelOptions::default().with_year_range(YearRange::new(1974, 2000));

    let build = build_panel(&table, &options).unwrap();

    assert_eq!(years(&build.frame.data), vec![2000, 1974, 2000]);
}

#[test]
fn duplicate_observations_keep_first_value() {
    let content = [
        HEADER,
        "Chile,CHL,Trade,NE.TRD.GNFS.ZS,..,60.5,..",
        "Chile,CHL,Trade (dup),NE.TRD.GNFS.ZS,..,99.9,..",
    ]
    .join("\n");
    let file = create_temp_csv(&content);
    let table = read_wdi_table(file.path()).unwrap();

    let build = build_panel(&table, &PanelOptions::default()).unwrap();

    assert_eq!(floats(&build.frame.data, "Trade"), vec![Some(60.5)]);
    assert_eq!(build.report.duplicates, 1);
}

#[test]
fn identifiers_are_matched_verbatim() {
    let content = [
        HEADER,
        "\" Chile\",CHL,GDP,NY.GDP.MKTP.CD,,1.0,",
        "Chile,CHL,GDP,NY.GDP.MKTP.CD,,2.0,",
        "Chile,CHL,GDP,\" NY.GDP.MKTP.CD\",,3.0,",
    ]
    .join("\n");
    let file = create_temp_csv(&content);
    let table = read_wdi_table(file.path()).unwrap();

    let build = build_panel(&table, &PanelOptions::default()).unwrap();
    let df = &build.frame.data;

    assert_eq!(strings(df, "Country Name"), vec![" Chile", "Chile"]);
    assert_eq!(floats(df, "GDP"), vec![Some(1.0), Some(2.0)]);
    assert_eq!(build.report.indicator_rows, 2);
    assert_eq!(build.report.duplicates, 0);
}

#[test]
fn extract_without_catalog_series_yields_empty_panel() {
    let content = [HEADER, "Chile,CHL,Population,SP.POP.TOTL,1,2,3"].join("\n");
    let file = create_temp_csv(&content);
    let table = read_wdi_table(file.path()).unwrap();

    let build = build_panel(&table, &PanelOptions::default()).unwrap();

    assert_eq!(build.frame.shape(), (0, 11));
    assert_eq!(build.report.retained_count(), 0);
}
