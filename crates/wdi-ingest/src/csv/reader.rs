//! WDI extract loading.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::table::WdiTable;

use super::header::{detect_year_columns, normalize_header, validate_required_columns};

/// Maps a filesystem error to the matching ingest error.
fn file_error(path: &Path, err: std::io::Error) -> IngestError {
    if err.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Reads a CSV file into a DataFrame with every column typed as string.
///
/// Year cells mix numbers with the `..` sentinel, so no type inference is
/// attempted here; coercion happens during value cleaning.
fn read_string_frame(path: &Path) -> Result<DataFrame> {
    let metadata = std::fs::metadata(path).map_err(|e| file_error(path, e))?;
    if metadata.len() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let renames: Vec<(String, String)> = df
        .get_column_names()
        .iter()
        .filter_map(|name| {
            let normalized = normalize_header(name.as_str());
            (normalized != name.as_str()).then(|| (name.to_string(), normalized))
        })
        .collect();
    for (old, new) in renames {
        debug!(from = %old, to = %new, "normalized header");
        df.rename(&old, new.into())?;
    }

    Ok(df)
}

/// Loads a WDI extract.
///
/// Fails if the file cannot be opened or parsed, if any identifier column is
/// missing, or if no year column can be found.
pub fn read_wdi_table(path: &Path) -> Result<WdiTable> {
    let data = read_string_frame(path)?;
    let headers: Vec<String> = data
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    validate_required_columns(&headers, path)?;
    let year_columns = detect_year_columns(&headers, path)?;

    if data.height() == 0 {
        warn!(path = %path.display(), "extract has a header but no data rows");
    }
    debug!(
        path = %path.display(),
        rows = data.height(),
        columns = data.width(),
        year_columns = year_columns.len(),
        "loaded extract"
    );

    Ok(WdiTable {
        path: path.to_path_buf(),
        data,
        year_columns,
    })
}
