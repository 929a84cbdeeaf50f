//! Dataset loading for solar measurement CSV files.
//!
//! Reads one CSV file per source into a polars DataFrame, attaches the
//! source's country label as a column, and concatenates sources into a
//! single table. A missing file is recoverable: multi-source loads log it
//! and continue with the remaining sources.

pub mod cache;

#[cfg(test)]
pub mod tests;

pub use cache::LoadCache;

use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::constants::{DEFAULT_INFER_SCHEMA_LENGTH, columns};
use crate::error::{Result, SolarError};
use crate::models::SourceSpec;

/// Outcome of loading a set of sources
#[derive(Debug)]
pub struct LoadOutcome {
    /// Concatenated table, `None` when every source was skipped
    pub data: Option<DataFrame>,
    /// Row count per successfully loaded source, in load order
    pub loaded: Vec<(String, usize)>,
    /// Sources skipped because the file was missing
    pub skipped: Vec<SourceSpec>,
}

impl LoadOutcome {
    pub fn total_rows(&self) -> usize {
        self.loaded.iter().map(|(_, rows)| rows).sum()
    }
}

/// Read a single CSV file into a DataFrame
///
/// UTF-8, comma-delimited, header row. No schema validation beyond what
/// downstream steps check themselves (column present or absent).
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(SolarError::source_not_found(path));
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(DEFAULT_INFER_SCHEMA_LENGTH))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    debug!(
        "Loaded {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );

    Ok(df)
}

/// Load one source through the cache and attach its country label
///
/// The country column is assigned here, once, and is never rewritten by
/// later stages.
pub fn load_source(spec: &SourceSpec, cache: &mut LoadCache) -> Result<DataFrame> {
    let df = cache.get_or_load(&spec.path)?;

    let df = df
        .lazy()
        .with_column(lit(spec.country.clone()).alias(columns::COUNTRY))
        .collect()?;

    info!(
        "Loaded source '{}' from {} ({} rows)",
        spec.country,
        spec.path.display(),
        df.height()
    );

    Ok(df)
}

/// Load all sources, skipping missing files, and concatenate the rest
///
/// Sources with differing column sets are united diagonally; columns absent
/// from a source are null-filled for its rows. Row order within each source
/// is preserved, and sources appear in the given order.
pub fn load_sources(specs: &[SourceSpec], cache: &mut LoadCache) -> Result<LoadOutcome> {
    let mut frames = Vec::new();
    let mut loaded = Vec::new();
    let mut skipped = Vec::new();

    for spec in specs {
        match load_source(spec, cache) {
            Ok(df) => {
                loaded.push((spec.country.clone(), df.height()));
                frames.push(df.lazy());
            }
            Err(SolarError::SourceNotFound { path }) => {
                warn!(
                    "Source file not found, skipping '{}': {}",
                    spec.country,
                    path.display()
                );
                skipped.push(spec.clone());
            }
            Err(e) => return Err(e),
        }
    }

    let data = match frames.len() {
        0 => None,
        1 => Some(frames.into_iter().next().expect("one frame").collect()?),
        _ => Some(concat_lf_diagonal(frames, UnionArgs::default())?.collect()?),
    };

    Ok(LoadOutcome {
        data,
        loaded,
        skipped,
    })
}

/// Discover CSV sources under a directory
///
/// Walks the directory for `*.csv` files, sorted by path for consistent
/// ordering, and derives each country label from the file stem.
pub fn discover_sources(input_dir: &Path) -> Result<Vec<SourceSpec>> {
    if !input_dir.is_dir() {
        return Err(SolarError::configuration(format!(
            "Input path is not a directory: {}",
            input_dir.display()
        )));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(input_dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("csv") {
            paths.push(path.to_path_buf());
        }
    }

    paths.sort();

    let sources: Vec<SourceSpec> = paths.into_iter().map(SourceSpec::from_path).collect();

    debug!(
        "Discovered {} CSV sources in {}",
        sources.len(),
        input_dir.display()
    );

    Ok(sources)
}
