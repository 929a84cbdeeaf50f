//! Z-score outlier detection and row flagging.
//!
//! Each monitored column is scored against its own mean and population
//! standard deviation; rows whose absolute z-score exceeds the threshold
//! get the cleaning flag raised. Flags accumulate across columns with a
//! logical OR and are never reset by a later column's pass.

use polars::prelude::*;
use tracing::info;

use crate::constants::columns::CLEANING_FLAG;
use crate::error::Result;
use crate::models::ColumnOutliers;

/// Z-score of every value in a column against the column's own mean and
/// population standard deviation (ddof = 0).
///
/// Degenerate inputs fall out naturally: a zero-variance column divides
/// zero by zero into NaN, and an all-null column propagates null. Neither
/// compares greater than the threshold, so neither raises a flag.
fn zscore(name: &str) -> Expr {
    let values = col(name).cast(DataType::Float64);
    (values.clone() - values.clone().mean()) / values.std(0)
}

/// Boolean mask selecting rows whose |z| exceeds the threshold
fn outlier_mask(name: &str, threshold: f64) -> Expr {
    let z = zscore(name);
    z.clone().gt(lit(threshold)).or(z.lt(lit(-threshold)))
}

/// Flag outliers in every configured column present in the dataset
///
/// Adds the cleaning flag column initialized to 0, then runs one pass per
/// configured column in order. Columns absent from the dataset are silently
/// skipped. Returns the flagged table and per-column counts.
pub fn flag_outliers(
    df: DataFrame,
    outlier_columns: &[String],
    threshold: f64,
) -> Result<(DataFrame, Vec<ColumnOutliers>)> {
    let mut df = df
        .lazy()
        .with_column(lit(0i32).alias(CLEANING_FLAG))
        .collect()?;

    let mut reports = Vec::new();

    for name in outlier_columns {
        if df.column(name).is_err() {
            continue;
        }

        let mask = outlier_mask(name, threshold);

        // Count before flagging; nulls in the mask are ignored by the sum.
        let counted = df
            .clone()
            .lazy()
            .select([mask.clone().cast(DataType::Float64).sum().alias("flagged")])
            .collect()?;
        let flagged = counted
            .column("flagged")?
            .f64()?
            .get(0)
            .unwrap_or(0.0) as usize;

        // OR-accumulate: a raised flag survives every later column's pass.
        df = df
            .lazy()
            .with_column(
                when(mask)
                    .then(lit(1i32))
                    .otherwise(col(CLEANING_FLAG))
                    .alias(CLEANING_FLAG),
            )
            .collect()?;

        info!("Number of outliers in {}: {}", name, flagged);
        reports.push(ColumnOutliers {
            column: name.clone(),
            flagged,
        });
    }

    Ok((df, reports))
}

/// Count rows with the cleaning flag raised
pub fn flagged_row_count(df: &DataFrame) -> Result<usize> {
    let flags = df.column(CLEANING_FLAG)?.cast(&DataType::Int64)?;
    Ok(flags.i64()?.sum().unwrap_or(0) as usize)
}
