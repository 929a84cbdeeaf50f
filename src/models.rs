//! Core data structures and types for solar data processing.
//!
//! Defines source specifications, cleaning reports, and run statistics
//! used throughout the library.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::country_from_stem;
use crate::error::SolarError;

/// One raw measurement source: a CSV file and the country label attached
/// to its rows at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub country: String,
    pub path: PathBuf,
}

impl SourceSpec {
    pub fn new(country: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            country: country.into(),
            path: path.into(),
        }
    }

    /// Build a source from a bare path, deriving the country label from
    /// the file stem.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let country = path
            .file_stem()
            .map(|stem| country_from_stem(&stem.to_string_lossy()))
            .unwrap_or_default();
        Self { country, path }
    }

    /// File stem of the source, used to name the exported cleaned file
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "source".to_string())
    }
}

impl FromStr for SourceSpec {
    type Err = SolarError;

    /// Parse a `Country=path` pair, e.g. `Benin=data/benin.csv`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((country, path)) if !country.trim().is_empty() && !path.trim().is_empty() => {
                Ok(Self::new(country.trim(), Path::new(path.trim())))
            }
            _ => Err(SolarError::configuration(format!(
                "Invalid source '{}'. Expected Country=path, e.g. Benin=data/benin.csv",
                s
            ))),
        }
    }
}

/// Outliers flagged in a single monitored column
#[derive(Debug, Clone, Serialize)]
pub struct ColumnOutliers {
    pub column: String,
    pub flagged: usize,
}

/// Result of imputing one column's missing values with its median
#[derive(Debug, Clone, Serialize)]
pub struct ImputedColumn {
    pub column: String,
    pub median: f64,
    pub filled: usize,
}

/// Per-run report produced by the cleaning pipeline
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleaningReport {
    /// Rows in the cleaned dataset
    pub rows: usize,
    /// Rows with the cleaning flag raised by at least one column
    pub flagged_rows: usize,
    /// Per-column outlier counts, in pass order
    pub outliers: Vec<ColumnOutliers>,
    /// Per-column imputation results
    pub imputations: Vec<ImputedColumn>,
}

impl CleaningReport {
    /// Total outlier flags raised across all columns
    ///
    /// Rows flagged by several columns count once per column here, unlike
    /// `flagged_rows` which counts distinct rows.
    pub fn total_outliers(&self) -> usize {
        self.outliers.iter().map(|o| o.flagged).sum()
    }

    /// Total missing values replaced across all imputed columns
    pub fn total_filled(&self) -> usize {
        self.imputations.iter().map(|i| i.filled).sum()
    }
}

/// Statistics for a whole `clean` run across sources
#[derive(Debug, Default)]
pub struct CleanRunStats {
    pub sources_processed: usize,
    pub sources_skipped: usize,
    pub total_rows: usize,
    pub total_flagged_rows: usize,
    pub exported: Vec<PathBuf>,
    pub processing_time_ms: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_spec_from_str() {
        let spec: SourceSpec = "Benin=data/benin.csv".parse().unwrap();
        assert_eq!(spec.country, "Benin");
        assert_eq!(spec.path, PathBuf::from("data/benin.csv"));

        let spec: SourceSpec = " Sierra Leone = data/sl.csv ".parse().unwrap();
        assert_eq!(spec.country, "Sierra Leone");
        assert_eq!(spec.path, PathBuf::from("data/sl.csv"));
    }

    #[test]
    fn test_source_spec_from_str_rejects_malformed() {
        assert!("no-separator".parse::<SourceSpec>().is_err());
        assert!("=data/benin.csv".parse::<SourceSpec>().is_err());
        assert!("Benin=".parse::<SourceSpec>().is_err());
    }

    #[test]
    fn test_source_spec_from_path() {
        let spec = SourceSpec::from_path("data/sierra_leone.csv");
        assert_eq!(spec.country, "Sierra Leone");
        assert_eq!(spec.stem(), "sierra_leone");
    }

    #[test]
    fn test_cleaning_report_totals() {
        let report = CleaningReport {
            rows: 100,
            flagged_rows: 5,
            outliers: vec![
                ColumnOutliers {
                    column: "GHI".to_string(),
                    flagged: 3,
                },
                ColumnOutliers {
                    column: "WS".to_string(),
                    flagged: 4,
                },
            ],
            imputations: vec![ImputedColumn {
                column: "GHI".to_string(),
                median: 2.0,
                filled: 7,
            }],
        };

        assert_eq!(report.total_outliers(), 7);
        assert_eq!(report.total_filled(), 7);
    }
}
