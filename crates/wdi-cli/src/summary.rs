use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use wdi_output::{ColumnStats, ColumnSummary, NumericSummary, TextSummary, format_stat};

use crate::types::BuildResult;

const STAT_HEADERS: [&str; 12] = [
    "Column", "count", "unique", "top", "freq", "mean", "std", "min", "25%", "50%", "75%", "max",
];

pub fn print_summary(result: &BuildResult) {
    let (rows, columns) = result.shape;
    println!("Final shape: ({rows}, {columns})");
    print_quality_table(result);
    println!();
    println!("Summary Statistics:");
    println!("{}", statistics_table(&result.columns));
    if !result.report.missing_series.is_empty() {
        eprintln!("Indicators not present in {}:", result.input.display());
        for code in &result.report.missing_series {
            eprintln!("- {code}");
        }
    }
}

fn print_quality_table(result: &BuildResult) {
    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let cleaning = &report.cleaning;
    let rows: [(&str, usize); 10] = [
        ("Input rows", report.input_rows),
        ("Rows with target indicators", report.indicator_rows),
        ("Numeric cells", cleaning.values),
        ("'..' cells", cleaning.sentinel),
        ("Non-numeric cells", cleaning.unparsable),
        ("Empty cells", cleaning.empty),
        ("Duplicate observations", report.duplicates),
        ("Country-year rows", report.pivot_rows),
        ("Outside year range", report.out_of_range_rows),
        ("Without any indicator", report.empty_rows),
    ];
    for (label, count) in rows {
        table.add_row(vec![Cell::new(label), count_cell(count)]);
    }
    table.add_row(vec![
        Cell::new("Output rows")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.output_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn statistics_table(columns: &[ColumnSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(STAT_HEADERS.iter().copied().map(header_cell).collect::<Vec<_>>());
    apply_statistics_table_style(&mut table);
    for idx in 1..STAT_HEADERS.len() {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for column in columns {
        let mut row = vec![
            Cell::new(&column.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
        ];
        match &column.stats {
            ColumnStats::Numeric(stats) => row.extend(numeric_cells(stats)),
            ColumnStats::Text(stats) => row.extend(text_cells(stats)),
        }
        table.add_row(row);
    }
    table
}

fn numeric_cells(stats: &NumericSummary) -> Vec<Cell> {
    vec![
        Cell::new(stats.count),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        stat_cell(stats.mean),
        stat_cell(stats.std),
        stat_cell(stats.min),
        stat_cell(stats.q25),
        stat_cell(stats.median),
        stat_cell(stats.q75),
        stat_cell(stats.max),
    ]
}

fn text_cells(stats: &TextSummary) -> Vec<Cell> {
    let mut cells = vec![
        Cell::new(stats.count),
        Cell::new(stats.unique),
        match &stats.top {
            Some(top) => Cell::new(top),
            None => dim_cell("-"),
        },
        Cell::new(stats.freq),
    ];
    cells.extend((0..7).map(|_| dim_cell("-")));
    cells
}

fn stat_cell(value: Option<f64>) -> Cell {
    match value {
        Some(v) => Cell::new(format_stat(v)),
        None => dim_cell("NaN"),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_statistics_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(200);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
