//! Median imputation of missing values in the key irradiance columns.
//!
//! Each column's median is computed over its non-missing values on the
//! pre-imputation data, then substituted into every null. Column-local and
//! single-pass; running it a second time is a no-op.

use polars::prelude::*;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::ImputedColumn;

/// Impute missing values in every configured column present in the dataset
///
/// Columns absent from the dataset are silently skipped. A column that is
/// entirely null has no median and is left untouched.
pub fn impute_medians(
    df: DataFrame,
    impute_columns: &[String],
) -> Result<(DataFrame, Vec<ImputedColumn>)> {
    let mut df = df;
    let mut reports = Vec::new();

    for name in impute_columns {
        let Ok(column) = df.column(name) else {
            continue;
        };

        let missing = column.null_count();
        let Some(median) = column.as_materialized_series().median() else {
            warn!("Column {} is entirely null, imputation skipped", name);
            continue;
        };

        if missing > 0 {
            df = df
                .lazy()
                .with_column(
                    col(name.as_str())
                        .cast(DataType::Float64)
                        .fill_null(lit(median))
                        .alias(name.as_str()),
                )
                .collect()?;
        }

        info!(
            "Missing values in {} imputed with median: {} ({} filled)",
            name, median, missing
        );
        reports.push(ImputedColumn {
            column: name.clone(),
            median,
            filled: missing,
        });
    }

    Ok((df, reports))
}
