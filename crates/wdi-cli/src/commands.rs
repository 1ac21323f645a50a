use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use tracing::{debug, info, info_span};

use wdi_ingest::read_wdi_table;
use wdi_model::{DEFAULT_METADATA_PATH, IndicatorCatalog, PanelOptions};
use wdi_output::{describe_frame, write_panel_csv};
use wdi_transform::build_panel;

use crate::cli::BuildArgs;
use crate::summary::{apply_table_style, header_cell};
use crate::types::BuildResult;

pub fn run_indicators() -> Result<()> {
    let catalog = IndicatorCatalog::wdi();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Series Code"),
        header_cell("Column"),
    ]);
    apply_table_style(&mut table);
    for (idx, indicator) in catalog.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(indicator.series_code),
            Cell::new(indicator.short_name),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Loads the extract, builds the panel, and writes it to `args.output`.
///
/// Progress lines go to stdout as each stage completes. Nothing is written
/// if loading or transforming fails.
pub fn run_build(args: &BuildArgs) -> Result<BuildResult> {
    let options = PanelOptions::default();
    let started = Instant::now();

    println!("Loading data ...");
    log_metadata_presence(Path::new(DEFAULT_METADATA_PATH));
    let table = info_span!("load", path = %args.input.display())
        .in_scope(|| read_wdi_table(&args.input))
        .with_context(|| format!("load extract {}", args.input.display()))?;
    info!(
        rows = table.row_count(),
        year_columns = table.year_columns.len(),
        "loaded extract"
    );

    let build = build_panel(&table, &options).context("build panel")?;
    println!(
        "Retained {} target indicators",
        build.report.retained_count()
    );

    info_span!("persist", path = %args.output.display())
        .in_scope(|| write_panel_csv(&build.frame.data, &args.output))
        .with_context(|| format!("write panel {}", args.output.display()))?;
    println!("Saved cleaned dataset: {}", args.output.display());

    let columns = describe_frame(&build.frame.data).context("describe panel")?;
    info!(
        rows = build.frame.record_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "build complete"
    );

    Ok(BuildResult {
        input: args.input.clone(),
        output: args.output.clone(),
        shape: build.frame.shape(),
        report: build.report,
        columns,
    })
}

/// The series metadata export ships next to the data extract but is not read.
fn log_metadata_presence(path: &Path) {
    debug!(
        path = %path.display(),
        present = path.exists(),
        "series metadata companion file"
    );
}
