//! Wind direction distribution and histogram tables.

use polars::prelude::*;
use serde::Serialize;

use crate::constants::{COMPASS_SECTORS, columns};
use crate::error::Result;

/// Observation count for one compass sector
#[derive(Debug, Clone, Serialize)]
pub struct SectorCount {
    pub sector: String,
    pub count: usize,
}

/// Wind direction observations binned into 16 compass sectors
#[derive(Debug, Clone, Serialize)]
pub struct WindDistribution {
    pub sectors: Vec<SectorCount>,
}

/// One fixed-width histogram bin
#[derive(Debug, Clone, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Fixed-width histogram of one column's finite values
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub column: String,
    pub bins: Vec<HistogramBin>,
}

/// Compass sector index for a direction in degrees, 0 = N, clockwise
fn sector_index(degrees: f64) -> usize {
    let normalized = degrees.rem_euclid(360.0);
    let width = 360.0 / COMPASS_SECTORS.len() as f64;
    ((normalized / width).round() as usize) % COMPASS_SECTORS.len()
}

/// Bin wind direction into 16 compass sectors, or `None` when WD is absent
///
/// All 16 sectors appear in the output, zero counts included, so the table
/// shape is stable across datasets.
pub fn wind_distribution(df: &DataFrame) -> Result<Option<WindDistribution>> {
    let Ok(wd_column) = df.column(columns::WD) else {
        return Ok(None);
    };

    let casted = wd_column.cast(&DataType::Float64)?;
    let directions = casted.f64()?;

    let mut counts = vec![0usize; COMPASS_SECTORS.len()];
    for i in 0..directions.len() {
        let Some(degrees) = directions.get(i) else {
            continue;
        };
        if !degrees.is_finite() {
            continue;
        }
        counts[sector_index(degrees)] += 1;
    }

    let sectors = COMPASS_SECTORS
        .iter()
        .zip(counts)
        .map(|(sector, count)| SectorCount {
            sector: sector.to_string(),
            count,
        })
        .collect();

    Ok(Some(WindDistribution { sectors }))
}

/// Fixed-width histogram of one column, or `None` when the column is
/// absent or has no finite values
pub fn histogram(df: &DataFrame, column: &str, bins: usize) -> Result<Option<Histogram>> {
    let Ok(target) = df.column(column) else {
        return Ok(None);
    };

    let casted = target.cast(&DataType::Float64)?;
    let values = casted.f64()?;

    let finite: Vec<f64> = values
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .collect();

    if finite.is_empty() || bins == 0 {
        return Ok(None);
    }

    let min = finite.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = finite.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // A constant column collapses to a single bin holding every value.
    if min == max {
        return Ok(Some(Histogram {
            column: column.to_string(),
            bins: vec![HistogramBin {
                lower: min,
                upper: max,
                count: finite.len(),
            }],
        }));
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for value in &finite {
        let index = (((value - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count,
        })
        .collect();

    Ok(Some(Histogram {
        column: column.to_string(),
        bins,
    }))
}
