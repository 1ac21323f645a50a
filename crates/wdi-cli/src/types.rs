use std::path::PathBuf;

use wdi_output::ColumnSummary;
use wdi_transform::PanelReport;

#[derive(Debug)]
pub struct BuildResult {
    pub input: PathBuf,
    pub output: PathBuf,
    /// (rows, columns) of the written panel.
    pub shape: (usize, usize),
    pub report: PanelReport,
    pub columns: Vec<ColumnSummary>,
}
