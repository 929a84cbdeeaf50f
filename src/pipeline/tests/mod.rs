//! Tests for the cleaning pipeline stages.

pub mod impute_tests;

/// Twelve unremarkable readings and one wild one. With a single extreme
/// value among thirteen, its z-score lands near 3.4 against the population
/// standard deviation, comfortably past the 3.0 threshold.
pub fn baseline_with_outlier() -> Vec<f64> {
    let mut values: Vec<f64> = (1..=12).map(|v| v as f64).collect();
    values.push(1000.0);
    values
}
