//! Pairwise-complete Pearson correlation over the irradiance columns.

use polars::prelude::*;
use serde::Serialize;

use crate::error::Result;

/// Symmetric correlation matrix over the columns present in the dataset
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// values[i][j] is the correlation of columns[i] with columns[j];
    /// `None` when fewer than two complete pairs exist or a column is
    /// constant over the complete pairs
    pub values: Vec<Vec<Option<f64>>>,
}

/// Pearson correlation over rows where both values are present and finite
fn pearson(xs: &Float64Chunked, ys: &Float64Chunked) -> Option<f64> {
    let mut n = 0usize;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    let mut sum_xy = 0.0;

    for i in 0..xs.len() {
        let (Some(x), Some(y)) = (xs.get(i), ys.get(i)) else {
            continue;
        };
        if !x.is_finite() || !y.is_finite() {
            continue;
        }

        n += 1;
        sum_x += x;
        sum_y += y;
        sum_xx += x * x;
        sum_yy += y * y;
        sum_xy += x * y;
    }

    if n < 2 {
        return None;
    }

    let n = n as f64;
    let mean_x = sum_x / n;
    let mean_y = sum_y / n;
    let cov = sum_xy / n - mean_x * mean_y;
    let var_x = sum_xx / n - mean_x * mean_x;
    let var_y = sum_yy / n - mean_y * mean_y;

    let denom = (var_x * var_y).sqrt();
    if denom <= 0.0 {
        return None;
    }

    Some(cov / denom)
}

/// Correlation matrix over the candidate columns present in the dataset
///
/// `None` when fewer than two candidates are present.
pub fn correlation_matrix(
    df: &DataFrame,
    candidates: &[&str],
) -> Result<Option<CorrelationMatrix>> {
    let present: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|name| df.column(name).is_ok())
        .collect();

    if present.len() < 2 {
        return Ok(None);
    }

    let mut series = Vec::with_capacity(present.len());
    for name in &present {
        series.push(df.column(name)?.cast(&DataType::Float64)?);
    }

    let mut values = Vec::with_capacity(present.len());
    for (i, left) in series.iter().enumerate() {
        let left = left.f64()?;
        let mut row = Vec::with_capacity(present.len());
        for (j, right) in series.iter().enumerate() {
            if i == j {
                row.push(Some(1.0));
            } else {
                row.push(pearson(left, right.f64()?));
            }
        }
        values.push(row);
    }

    Ok(Some(CorrelationMatrix {
        columns: present.iter().map(|s| s.to_string()).collect(),
        values,
    }))
}
