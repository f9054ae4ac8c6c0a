//! CSV loading.

use std::path::Path;

use anyhow::{Context, Result};
use chartform_common::clean_column_names;
use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

/// Rows sampled for schema inference.
const INFER_SCHEMA_ROWS: usize = 100;

/// Read a CSV file with a header row into a DataFrame.
///
/// With `clean_columns`, column names are lowercased and spaces become
/// underscores before any chart column is looked up.
pub fn read_csv(path: &Path, clean_columns: bool) -> Result<DataFrame> {
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("Failed to create CSV reader: {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to read CSV: {}", path.display()))?;

    if clean_columns {
        clean_column_names(&mut df)
            .with_context(|| format!("Failed to clean column names: {}", path.display()))?;
    }

    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Loaded dataset"
    );
    Ok(df)
}
