//! Monthly and hourly GHI profiles derived from the timestamp column.

use chrono::{Datelike, NaiveDateTime, Timelike};
use polars::prelude::*;
use serde::Serialize;
use tracing::warn;

use crate::constants::{TIMESTAMP_FORMAT, columns};
use crate::error::Result;

/// Mean GHI over one calendar period (month of year or hour of day)
#[derive(Debug, Clone, Serialize)]
pub struct PeriodMean {
    pub period: u32,
    pub rows: usize,
    pub mean_ghi: f64,
}

/// GHI aggregated by month of year and hour of day
#[derive(Debug, Clone, Serialize)]
pub struct TemporalProfile {
    pub monthly: Vec<PeriodMean>,
    pub hourly: Vec<PeriodMean>,
}

struct Accumulator {
    sum: f64,
    rows: usize,
}

fn collect_means(buckets: &[Accumulator], first_period: u32) -> Vec<PeriodMean> {
    buckets
        .iter()
        .enumerate()
        .filter(|(_, acc)| acc.rows > 0)
        .map(|(i, acc)| PeriodMean {
            period: first_period + i as u32,
            rows: acc.rows,
            mean_ghi: acc.sum / acc.rows as f64,
        })
        .collect()
}

/// Build the temporal GHI profile, or `None` when it does not apply
///
/// Skips silently when the timestamp or GHI column is absent. A malformed
/// timestamp is reported once and skips the whole profile for the run;
/// every other report section is unaffected. Rows with a null timestamp or
/// null GHI simply do not contribute.
pub fn temporal_profile(df: &DataFrame) -> Result<Option<TemporalProfile>> {
    let Ok(timestamp_column) = df.column(columns::TIMESTAMP) else {
        return Ok(None);
    };
    let Ok(ghi_column) = df.column(columns::GHI) else {
        return Ok(None);
    };

    let timestamps = timestamp_column.cast(&DataType::String)?;
    let timestamps = timestamps.str()?;
    let ghi = ghi_column.cast(&DataType::Float64)?;
    let ghi = ghi.f64()?;

    let mut monthly: Vec<Accumulator> = (0..12).map(|_| Accumulator { sum: 0.0, rows: 0 }).collect();
    let mut hourly: Vec<Accumulator> = (0..24).map(|_| Accumulator { sum: 0.0, rows: 0 }).collect();

    for i in 0..timestamps.len() {
        let Some(raw) = timestamps.get(i) else {
            continue;
        };

        let parsed = match NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(
                    "Malformed timestamp '{}' ({}), skipping temporal profile",
                    raw, e
                );
                return Ok(None);
            }
        };

        let Some(value) = ghi.get(i) else {
            continue;
        };

        let month_bucket = (parsed.month() - 1) as usize;
        monthly[month_bucket].sum += value;
        monthly[month_bucket].rows += 1;

        let hour_bucket = parsed.hour() as usize;
        hourly[hour_bucket].sum += value;
        hourly[hour_bucket].rows += 1;
    }

    Ok(Some(TemporalProfile {
        monthly: collect_means(&monthly, 1),
        hourly: collect_means(&hourly, 0),
    }))
}
