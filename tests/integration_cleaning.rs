//! End-to-end integration tests: raw CSV files through cleaning, export,
//! and the cross-country report.

use polars::prelude::*;
use solar_processor::cli::args::{CleanArgs, OutputFormat, ReportArgs};
use solar_processor::cli::commands::{clean::run_clean, report::run_report};
use solar_processor::constants::{cleaned_filename, columns};
use solar_processor::export::export_cleaned;
use solar_processor::loader::{LoadCache, load_sources, read_csv};
use solar_processor::models::SourceSpec;
use solar_processor::pipeline::CleaningPipeline;
use solar_processor::report::summary::{ghi_ranking, unique_countries};
use std::path::Path;
use tempfile::TempDir;

/// Build a raw measurement CSV with optional GHI outlier and missing rows
fn raw_csv(rows: usize, outlier_row: Option<usize>, null_row: Option<usize>) -> String {
    let mut out = String::from("Timestamp,GHI,DNI,DHI,ModA,ModB,WS,WSgust,WD,RH,Tamb\n");

    for i in 0..rows {
        let ghi = if Some(i) == null_row {
            String::new()
        } else if Some(i) == outlier_row {
            "5000.0".to_string()
        } else {
            format!("{}.0", i + 1)
        };

        out.push_str(&format!(
            "2021-08-09 {:02}:00:00,{},{}.0,{}.0,{}.0,{}.0,{}.0,{}.0,{},{}.0,{}.0\n",
            i % 24,
            ghi,
            i + 2,
            i + 1,
            i + 3,
            i + 4,
            (i % 5) + 1,
            (i % 5) + 2,
            (i * 37) % 360,
            50 + (i % 30),
            20 + (i % 10),
        ));
    }

    out
}

fn write_raw_sources(dir: &Path) {
    std::fs::write(dir.join("benin.csv"), raw_csv(20, Some(10), Some(2))).unwrap();
    std::fs::write(dir.join("sierra_leone.csv"), raw_csv(15, None, Some(0))).unwrap();
    std::fs::write(dir.join("togo.csv"), raw_csv(18, Some(5), None)).unwrap();
}

#[test]
fn test_library_end_to_end() {
    let dir = TempDir::new().unwrap();
    let raw_dir = dir.path().join("raw");
    let clean_dir = dir.path().join("clean");
    std::fs::create_dir_all(&raw_dir).unwrap();
    write_raw_sources(&raw_dir);

    // Clean and export each source, as the clean command does.
    let pipeline = CleaningPipeline::default();
    for stem in ["benin", "sierra_leone", "togo"] {
        let df = read_csv(&raw_dir.join(format!("{stem}.csv"))).unwrap();
        let outcome = pipeline.run(df).unwrap();
        let mut cleaned = outcome.data;
        export_cleaned(&mut cleaned, &clean_dir, &cleaned_filename(stem)).unwrap();
    }

    // Load the cleaned files back with country labels, as the report does.
    let specs = vec![
        SourceSpec::new("Benin", clean_dir.join("benin_clean.csv")),
        SourceSpec::new("Sierra Leone", clean_dir.join("sierra_leone_clean.csv")),
        SourceSpec::new("Togo", clean_dir.join("togo_clean.csv")),
    ];
    let mut cache = LoadCache::new();
    let combined = load_sources(&specs, &mut cache).unwrap().data.unwrap();

    // Row count is the sum of the three inputs, in source order.
    assert_eq!(combined.height(), 53);

    // The country label takes exactly the three expected values.
    assert_eq!(
        unique_countries(&combined).unwrap(),
        vec!["Benin", "Sierra Leone", "Togo"]
    );

    // Grouping by country and averaging GHI yields one scalar per country.
    let ranking = ghi_ranking(&combined).unwrap();
    assert_eq!(ranking.len(), 3);
    for entry in &ranking {
        assert!(entry.mean_ghi.is_some());
    }

    // The imputed columns come back without missing values.
    for name in [columns::GHI, columns::DNI, columns::DHI] {
        assert_eq!(combined.column(name).unwrap().null_count(), 0);
    }

    // The cleaning flag survives the export round-trip: one outlier in
    // Benin, one in Togo, none in Sierra Leone.
    let flags = combined
        .column(columns::CLEANING_FLAG)
        .unwrap()
        .cast(&DataType::Int64)
        .unwrap();
    assert_eq!(flags.i64().unwrap().sum(), Some(2));
}

#[test]
fn test_cli_clean_then_report() {
    let dir = TempDir::new().unwrap();
    let raw_dir = dir.path().join("raw");
    let clean_dir = dir.path().join("clean");
    std::fs::create_dir_all(&raw_dir).unwrap();
    write_raw_sources(&raw_dir);

    let stats = run_clean(CleanArgs {
        input_dir: Some(raw_dir.clone()),
        sources: None,
        output_dir: Some(clean_dir.clone()),
        zscore_threshold: None,
        verbose: 0,
        quiet: true,
    })
    .unwrap();

    assert_eq!(stats.sources_processed, 3);
    assert_eq!(stats.sources_skipped, 0);
    assert_eq!(stats.total_rows, 53);
    assert_eq!(stats.total_flagged_rows, 2);
    for stem in ["benin", "sierra_leone", "togo"] {
        assert!(clean_dir.join(cleaned_filename(stem)).exists());
    }

    let report_path = dir.path().join("report.json");
    run_report(ReportArgs {
        input_dir: Some(clean_dir),
        sources: None,
        countries: None,
        metric: None,
        detailed: true,
        output_format: OutputFormat::Json,
        output_file: Some(report_path.clone()),
        verbose: 0,
        quiet: true,
    })
    .unwrap();

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(report_path).unwrap()).unwrap();

    assert_eq!(report["rows"], 53);
    let countries: Vec<&str> = report["countries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(countries, vec!["Benin", "Sierra Leone", "Togo"]);

    // Detailed sections made it into the JSON output.
    assert!(report["correlation"].is_object());
    assert!(report["temporal"].is_object());
    assert_eq!(report["ranking"].as_array().unwrap().len(), 3);
}

#[test]
fn test_cli_clean_skips_missing_explicit_source() {
    let dir = TempDir::new().unwrap();
    let raw_dir = dir.path().join("raw");
    let clean_dir = dir.path().join("clean");
    std::fs::create_dir_all(&raw_dir).unwrap();
    std::fs::write(raw_dir.join("benin.csv"), raw_csv(20, None, None)).unwrap();

    let stats = run_clean(CleanArgs {
        input_dir: None,
        sources: Some(
            format!(
                "Benin={},Togo={}",
                raw_dir.join("benin.csv").display(),
                raw_dir.join("togo.csv").display()
            )
            .parse()
            .unwrap(),
        ),
        output_dir: Some(clean_dir.clone()),
        zscore_threshold: None,
        verbose: 0,
        quiet: true,
    })
    .unwrap();

    assert_eq!(stats.sources_processed, 1);
    assert_eq!(stats.sources_skipped, 1);
    assert!(clean_dir.join("benin_clean.csv").exists());
    assert!(!clean_dir.join("togo_clean.csv").exists());
}
