//! Report generation over cleaned datasets.
//!
//! One configurable entry point replaces the per-country analysis variants:
//! the caller picks an optional country subset, the metrics to summarise,
//! and whether the detailed sections (correlation, cleaning impact,
//! temporal profile, wind distribution, histograms) are included.

pub mod correlation;
pub mod summary;
pub mod temporal;
pub mod wind;

#[cfg(test)]
pub mod tests;

use polars::prelude::*;
use serde::Serialize;

use crate::constants::{CORRELATION_COLUMNS, HISTOGRAM_BINS, HISTOGRAM_COLUMNS, columns};
use crate::error::{Result, SolarError};

pub use correlation::CorrelationMatrix;
pub use summary::{CleaningImpact, CountryMean, CountrySummary, MissingReport};
pub use temporal::TemporalProfile;
pub use wind::{Histogram, WindDistribution};

/// What the report should cover
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Restrict to these country labels; `None` keeps every country
    pub countries: Option<Vec<String>>,
    /// Metrics summarised per country
    pub metrics: Vec<String>,
    /// Include the detailed analysis sections
    pub detailed: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            countries: None,
            metrics: crate::constants::IMPUTE_COLUMNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            detailed: false,
        }
    }
}

/// Every section of a generated report
#[derive(Debug, Serialize)]
pub struct ReportBundle {
    pub rows: usize,
    pub countries: Vec<String>,
    pub summaries: Vec<CountrySummary>,
    pub missing: MissingReport,
    pub ranking: Vec<CountryMean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<CorrelationMatrix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaning_impact: Option<Vec<CleaningImpact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporal: Option<TemporalProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind: Option<WindDistribution>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub histograms: Vec<Histogram>,
}

/// Keep only rows whose country label is in the selection
pub fn filter_countries(df: &DataFrame, selection: &[String]) -> Result<DataFrame> {
    if df.column(columns::COUNTRY).is_err() {
        return Err(SolarError::configuration(
            "Country filtering requested but the dataset has no Country column",
        ));
    }

    let Some(mask) = selection
        .iter()
        .map(|country| col(columns::COUNTRY).eq(lit(country.clone())))
        .reduce(|a, b| a.or(b))
    else {
        return Err(SolarError::configuration(
            "Country selection must name at least one country",
        ));
    };

    Ok(df.clone().lazy().filter(mask).collect()?)
}

/// Build every requested report section from a cleaned dataset
pub fn build_report(df: &DataFrame, options: &ReportOptions) -> Result<ReportBundle> {
    let df = match &options.countries {
        Some(selection) => filter_countries(df, selection)?,
        None => df.clone(),
    };

    let countries = summary::unique_countries(&df)?;
    let summaries = summary::country_summaries(&df, &options.metrics)?;
    let missing = summary::missing_report(&df);
    let ranking = summary::ghi_ranking(&df)?;

    let (correlation, cleaning_impact, temporal, wind, histograms) = if options.detailed {
        let mut histograms = Vec::new();
        for column in HISTOGRAM_COLUMNS {
            if let Some(histogram) = wind::histogram(&df, column, HISTOGRAM_BINS)? {
                histograms.push(histogram);
            }
        }

        (
            correlation::correlation_matrix(&df, CORRELATION_COLUMNS)?,
            summary::cleaning_impact(&df)?,
            temporal::temporal_profile(&df)?,
            wind::wind_distribution(&df)?,
            histograms,
        )
    } else {
        (None, None, None, None, Vec::new())
    };

    Ok(ReportBundle {
        rows: df.height(),
        countries,
        summaries,
        missing,
        ranking,
        correlation,
        cleaning_impact,
        temporal,
        wind,
        histograms,
    })
}
