//! CSV export of cleaned datasets.
//!
//! Writes the cleaned table to the configured output directory, creating it
//! if absent. The exported file carries every input column plus the
//! cleaning flag, one row per input row, in the original order.

use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;

/// Export a cleaned dataset to `<output_dir>/<file_name>`
pub fn export_cleaned(
    df: &mut DataFrame,
    output_dir: &Path,
    file_name: &str,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;

    let path = output_dir.join(file_name);
    let mut file = File::create(&path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;

    info!(
        "Cleaned data exported to: {} ({} rows)",
        path.display(),
        df.height()
    );

    Ok(path)
}
