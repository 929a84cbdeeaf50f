//! Configuration for the cleaning pipeline.
//!
//! Provides the configuration structure consumed by the pipeline, with
//! defaults matching the measurement campaign's monitored columns and
//! a builder-style API for overrides.

use std::path::PathBuf;

use crate::constants::{
    DEFAULT_INFER_SCHEMA_LENGTH, DEFAULT_OUTPUT_DIR, IMPUTE_COLUMNS, OUTLIER_COLUMNS,
    ZSCORE_THRESHOLD,
};
use crate::error::{Result, SolarError};

/// Configuration for loading, cleaning, and exporting a dataset
#[derive(Debug, Clone)]
pub struct CleanerConfig {
    /// Columns checked for z-score outliers, in pass order
    pub outlier_columns: Vec<String>,

    /// Columns whose missing values are imputed with the column median
    pub impute_columns: Vec<String>,

    /// Absolute z-score above which a value flags its row
    pub zscore_threshold: f64,

    /// Directory for exported cleaned CSV files (created if absent)
    pub output_dir: PathBuf,

    /// Rows sampled for CSV schema inference
    pub infer_schema_length: usize,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            outlier_columns: OUTLIER_COLUMNS.iter().map(|s| s.to_string()).collect(),
            impute_columns: IMPUTE_COLUMNS.iter().map(|s| s.to_string()).collect(),
            zscore_threshold: ZSCORE_THRESHOLD,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            infer_schema_length: DEFAULT_INFER_SCHEMA_LENGTH,
        }
    }
}

impl CleanerConfig {
    /// Create configuration with a custom z-score threshold
    pub fn with_zscore_threshold(mut self, threshold: f64) -> Self {
        self.zscore_threshold = threshold;
        self
    }

    /// Create configuration with a custom output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Create configuration with custom outlier columns
    pub fn with_outlier_columns(mut self, columns: Vec<String>) -> Self {
        self.outlier_columns = columns;
        self
    }

    /// Create configuration with custom imputation columns
    pub fn with_impute_columns(mut self, columns: Vec<String>) -> Self {
        self.impute_columns = columns;
        self
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.zscore_threshold.is_finite() || self.zscore_threshold <= 0.0 {
            return Err(SolarError::configuration(format!(
                "Z-score threshold must be a positive number, got {}",
                self.zscore_threshold
            )));
        }

        if self.infer_schema_length == 0 {
            return Err(SolarError::configuration(
                "Schema inference length must be greater than 0",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CleanerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.zscore_threshold, 3.0);
        assert_eq!(config.outlier_columns.len(), 7);
        assert_eq!(config.impute_columns, vec!["GHI", "DNI", "DHI"]);
    }

    #[test]
    fn test_builder_overrides() {
        let config = CleanerConfig::default()
            .with_zscore_threshold(2.5)
            .with_output_dir("out/cleaned");

        assert_eq!(config.zscore_threshold, 2.5);
        assert_eq!(config.output_dir, PathBuf::from("out/cleaned"));
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        assert!(
            CleanerConfig::default()
                .with_zscore_threshold(0.0)
                .validate()
                .is_err()
        );
        assert!(
            CleanerConfig::default()
                .with_zscore_threshold(f64::NAN)
                .validate()
                .is_err()
        );
        assert!(
            CleanerConfig::default()
                .with_zscore_threshold(-1.0)
                .validate()
                .is_err()
        );
    }
}
