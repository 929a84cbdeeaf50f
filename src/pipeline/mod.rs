//! The cleaning pipeline: outlier flagging followed by median imputation.
//!
//! The pipeline takes ownership of the table and threads it stage to stage,
//! so there is exactly one owner of the data at any point and no aliased
//! mutation between stages. Flagging runs to completion over all configured
//! columns before imputation begins; medians are therefore computed on the
//! original values, outliers included.

pub mod impute;
pub mod outliers;

#[cfg(test)]
pub mod tests;

use polars::prelude::DataFrame;
use tracing::info;

use crate::config::CleanerConfig;
use crate::error::Result;
use crate::models::CleaningReport;

/// Cleaned table plus the report of what changed
#[derive(Debug)]
pub struct CleaningOutcome {
    pub data: DataFrame,
    pub report: CleaningReport,
}

/// Runs outlier flagging and median imputation over one dataset
#[derive(Debug, Clone)]
pub struct CleaningPipeline {
    config: CleanerConfig,
}

impl CleaningPipeline {
    pub fn new(config: CleanerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Run the full pipeline on a loaded dataset
    ///
    /// Stage order is fixed: flag first, impute second. The returned table
    /// retains every input column, gains the cleaning flag column, and has
    /// no missing values left in the imputed columns (unless a column was
    /// entirely null and had no median to substitute).
    pub fn run(&self, df: DataFrame) -> Result<CleaningOutcome> {
        let rows = df.height();

        let (df, outlier_reports) = outliers::flag_outliers(
            df,
            &self.config.outlier_columns,
            self.config.zscore_threshold,
        )?;

        let (df, imputation_reports) = impute::impute_medians(df, &self.config.impute_columns)?;

        let flagged_rows = outliers::flagged_row_count(&df)?;
        info!("Total rows flagged for cleaning: {}", flagged_rows);

        Ok(CleaningOutcome {
            data: df,
            report: CleaningReport {
                rows,
                flagged_rows,
                outliers: outlier_reports,
                imputations: imputation_reports,
            },
        })
    }
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::new(CleanerConfig::default())
    }
}
