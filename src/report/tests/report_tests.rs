//! Tests for report assembly and country filtering.

use super::cleaned_frame;
use crate::report::{ReportOptions, build_report, filter_countries};
use polars::df;

#[test]
fn test_default_report_has_core_sections_only() {
    let bundle = build_report(&cleaned_frame(), &ReportOptions::default()).unwrap();

    assert_eq!(bundle.rows, 4);
    assert_eq!(bundle.countries, vec!["Benin", "Togo"]);
    assert_eq!(bundle.summaries.len(), 2);
    assert_eq!(bundle.ranking.len(), 2);
    assert!(bundle.correlation.is_none());
    assert!(bundle.cleaning_impact.is_none());
    assert!(bundle.temporal.is_none());
    assert!(bundle.wind.is_none());
    assert!(bundle.histograms.is_empty());
}

#[test]
fn test_detailed_report_fills_every_section() {
    let options = ReportOptions {
        detailed: true,
        ..ReportOptions::default()
    };

    let bundle = build_report(&cleaned_frame(), &options).unwrap();

    assert!(bundle.correlation.is_some());
    assert!(bundle.cleaning_impact.is_some());
    assert!(bundle.temporal.is_some());
    assert!(bundle.wind.is_some());
    assert_eq!(bundle.histograms.len(), 2);
}

#[test]
fn test_country_filter_restricts_rows() {
    let options = ReportOptions {
        countries: Some(vec!["Benin".to_string()]),
        ..ReportOptions::default()
    };

    let bundle = build_report(&cleaned_frame(), &options).unwrap();

    assert_eq!(bundle.rows, 2);
    assert_eq!(bundle.countries, vec!["Benin"]);
    assert_eq!(bundle.ranking.len(), 1);
}

#[test]
fn test_unknown_country_filter_yields_empty_report() {
    let options = ReportOptions {
        countries: Some(vec!["Atlantis".to_string()]),
        ..ReportOptions::default()
    };

    let bundle = build_report(&cleaned_frame(), &options).unwrap();
    assert_eq!(bundle.rows, 0);
    assert!(bundle.countries.is_empty());
}

#[test]
fn test_filter_requires_country_column() {
    let frame = df!("GHI" => [1.0f64]).unwrap();
    assert!(filter_countries(&frame, &["Benin".to_string()]).is_err());
}

#[test]
fn test_bundle_serializes_to_json() {
    let options = ReportOptions {
        detailed: true,
        ..ReportOptions::default()
    };
    let bundle = build_report(&cleaned_frame(), &options).unwrap();

    let json = serde_json::to_string_pretty(&bundle).unwrap();
    assert!(json.contains("\"countries\""));
    assert!(json.contains("\"Benin\""));
    assert!(json.contains("\"correlation\""));
}
