//! Tests for report generation.

pub mod report_tests;

use polars::df;
use polars::prelude::*;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// A small cleaned two-country dataset exercising every report section
pub fn cleaned_frame() -> DataFrame {
    df!(
        "Timestamp" => [
            "2021-01-09 00:00:00",
            "2021-01-09 12:00:00",
            "2021-06-10 12:00:00",
            "2021-06-10 13:00:00",
        ],
        "GHI" => [1.0f64, 3.0, 5.0, 7.0],
        "DNI" => [2.0f64, 4.0, 6.0, 8.0],
        "DHI" => [0.1f64, 0.3, 0.5, 0.7],
        "ModA" => [1.0f64, 2.0, 3.0, 4.0],
        "ModB" => [2.0f64, 4.0, 6.0, 8.0],
        "WS" => [1.0f64, 2.0, 3.0, 4.0],
        "WD" => [0.0f64, 90.0, 180.0, 270.0],
        "Country" => ["Benin", "Benin", "Togo", "Togo"],
        "Cleaning Flag" => [0i32, 0, 1, 0],
    )
    .unwrap()
}
