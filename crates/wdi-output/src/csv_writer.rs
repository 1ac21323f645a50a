//! Panel CSV persistence.

use std::path::Path;

use polars::prelude::{AnyValue, DataFrame};
use tracing::{debug, info};

use crate::error::{OutputError, Result};
use crate::format::any_to_field;

/// Renders a DataFrame as CSV bytes: header row, one line per row, no index column.
pub fn render_panel_csv(df: &DataFrame) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    let headers: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    writer.write_record(&headers)?;

    let columns = df.get_columns();
    let mut record = Vec::with_capacity(columns.len());
    for idx in 0..df.height() {
        record.clear();
        for column in columns {
            record.push(any_to_field(column.get(idx).unwrap_or(AnyValue::Null)));
        }
        writer.write_record(&record)?;
    }

    writer.into_inner().map_err(|e| OutputError::CsvEncode {
        message: e.to_string(),
    })
}

/// Writes the panel to `path`, replacing any existing file.
///
/// The whole file is rendered in memory first, so an encoding failure leaves
/// the destination untouched. Returns the number of data rows written.
pub fn write_panel_csv(df: &DataFrame, path: &Path) -> Result<usize> {
    let bytes = render_panel_csv(df)?;
    debug!(path = %path.display(), bytes = bytes.len(), "rendered panel csv");
    std::fs::write(path, &bytes).map_err(|e| OutputError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), rows = df.height(), "wrote panel");
    Ok(df.height())
}
