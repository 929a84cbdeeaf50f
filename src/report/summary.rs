//! Grouped descriptive statistics, missing-value reporting, and rankings.

use polars::prelude::*;
use serde::Serialize;

use crate::constants::{HIGH_NULL_THRESHOLD_PCT, columns};
use crate::error::Result;

/// Descriptive statistics for one metric within one country
#[derive(Debug, Clone, Serialize)]
pub struct MetricSummary {
    pub metric: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub std: Option<f64>,
}

/// Summary statistics for one country across the selected metrics
#[derive(Debug, Clone, Serialize)]
pub struct CountrySummary {
    pub country: String,
    pub metrics: Vec<MetricSummary>,
}

/// Null count and percentage for one column
#[derive(Debug, Clone, Serialize)]
pub struct ColumnNulls {
    pub column: String,
    pub nulls: usize,
    pub pct: f64,
}

/// Missing-value report across all columns
#[derive(Debug, Clone, Serialize)]
pub struct MissingReport {
    pub per_column: Vec<ColumnNulls>,
    /// Columns whose null percentage exceeds the reporting threshold
    pub high_null_columns: Vec<String>,
}

/// Mean GHI for one country, used for the cross-country ranking
#[derive(Debug, Clone, Serialize)]
pub struct CountryMean {
    pub country: String,
    pub rows: usize,
    pub mean_ghi: Option<f64>,
}

/// Mean module-sensor readings for one cleaning-flag group
#[derive(Debug, Clone, Serialize)]
pub struct CleaningImpact {
    pub flag: i64,
    pub rows: usize,
    pub mean_mod_a: Option<f64>,
    pub mean_mod_b: Option<f64>,
}

/// Distinct country labels present in the dataset, sorted
pub fn unique_countries(df: &DataFrame) -> Result<Vec<String>> {
    let unique = df.column(columns::COUNTRY)?.unique()?;
    let series = unique.as_materialized_series();

    let mut countries: Vec<String> = (0..series.len())
        .filter_map(|i| {
            let value = series.get(i).ok()?;
            if value.is_null() {
                None
            } else {
                Some(value.to_string().trim_matches('"').to_string())
            }
        })
        .collect();
    countries.sort();

    Ok(countries)
}

/// Rows belonging to one country
pub fn filter_country(df: &DataFrame, country: &str) -> Result<DataFrame> {
    let filtered = df
        .clone()
        .lazy()
        .filter(col(columns::COUNTRY).eq(lit(country.to_string())))
        .collect()?;
    Ok(filtered)
}

fn metric_stats(df: &DataFrame, metric: &str) -> Result<Option<MetricSummary>> {
    let Ok(column) = df.column(metric) else {
        return Ok(None);
    };

    let casted = column.cast(&DataType::Float64)?;
    let series = casted.as_materialized_series();
    let values = series.f64()?;

    Ok(Some(MetricSummary {
        metric: metric.to_string(),
        count: values.len() - values.null_count(),
        mean: values.mean(),
        median: series.median(),
        std: values.std(1),
    }))
}

/// Per-country summary statistics for the selected metrics
///
/// Metrics absent from the dataset are skipped. The standard deviation is
/// the sample statistic (ddof = 1), matching the aggregate tables the
/// analysts compare against.
pub fn country_summaries(df: &DataFrame, metrics: &[String]) -> Result<Vec<CountrySummary>> {
    let mut summaries = Vec::new();

    for country in unique_countries(df)? {
        let subset = filter_country(df, &country)?;

        let mut metric_summaries = Vec::new();
        for metric in metrics {
            if let Some(summary) = metric_stats(&subset, metric)? {
                metric_summaries.push(summary);
            }
        }

        summaries.push(CountrySummary {
            country,
            metrics: metric_summaries,
        });
    }

    Ok(summaries)
}

/// Null counts per column plus the list of high-null columns
pub fn missing_report(df: &DataFrame) -> MissingReport {
    let rows = df.height();

    let per_column: Vec<ColumnNulls> = df
        .get_columns()
        .iter()
        .map(|column| {
            let nulls = column.null_count();
            let pct = if rows == 0 {
                0.0
            } else {
                nulls as f64 / rows as f64 * 100.0
            };
            ColumnNulls {
                column: column.name().to_string(),
                nulls,
                pct,
            }
        })
        .collect();

    let high_null_columns = per_column
        .iter()
        .filter(|entry| entry.pct > HIGH_NULL_THRESHOLD_PCT)
        .map(|entry| entry.column.clone())
        .collect();

    MissingReport {
        per_column,
        high_null_columns,
    }
}

/// Mean GHI per country, highest first
pub fn ghi_ranking(df: &DataFrame) -> Result<Vec<CountryMean>> {
    if df.column(columns::GHI).is_err() {
        return Ok(Vec::new());
    }

    let mut ranking = Vec::new();
    for country in unique_countries(df)? {
        let subset = filter_country(df, &country)?;
        let casted = subset.column(columns::GHI)?.cast(&DataType::Float64)?;
        let values = casted.f64()?;

        ranking.push(CountryMean {
            country,
            rows: subset.height(),
            mean_ghi: values.mean(),
        });
    }

    // Countries with no GHI data at all sink to the bottom.
    ranking.sort_by(|a, b| {
        b.mean_ghi
            .unwrap_or(f64::NEG_INFINITY)
            .partial_cmp(&a.mean_ghi.unwrap_or(f64::NEG_INFINITY))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(ranking)
}

/// Mean ModA and ModB grouped by cleaning flag value
///
/// Contrasts rows the cleaning pass flagged against the rest. `None` when
/// the dataset lacks the flag or both module sensor columns.
pub fn cleaning_impact(df: &DataFrame) -> Result<Option<Vec<CleaningImpact>>> {
    if df.column(columns::CLEANING_FLAG).is_err()
        || df.column(columns::MOD_A).is_err()
        || df.column(columns::MOD_B).is_err()
    {
        return Ok(None);
    }

    let mut groups = Vec::new();
    for flag in [0i64, 1] {
        let subset = df
            .clone()
            .lazy()
            .filter(
                col(columns::CLEANING_FLAG)
                    .cast(DataType::Int64)
                    .eq(lit(flag)),
            )
            .collect()?;

        if subset.height() == 0 {
            continue;
        }

        let mod_a = subset.column(columns::MOD_A)?.cast(&DataType::Float64)?;
        let mod_b = subset.column(columns::MOD_B)?.cast(&DataType::Float64)?;

        groups.push(CleaningImpact {
            flag,
            rows: subset.height(),
            mean_mod_a: mod_a.f64()?.mean(),
            mean_mod_b: mod_b.f64()?.mean(),
        });
    }

    Ok(Some(groups))
}
