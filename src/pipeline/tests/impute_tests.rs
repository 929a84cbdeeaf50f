//! Tests for median imputation.

use crate::pipeline::impute::impute_medians;
use polars::df;
use polars::prelude::*;

fn ghi_values(df: &DataFrame) -> Vec<Option<f64>> {
    let casted = df.column("GHI").unwrap().cast(&DataType::Float64).unwrap();
    casted.f64().unwrap().into_iter().collect()
}

#[test]
fn test_missing_value_gets_column_median() {
    let df = df!("GHI" => &[Some(1.0f64), Some(2.0), Some(3.0), None]).unwrap();

    let (df, reports) = impute_medians(df, &["GHI".to_string()]).unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].median, 2.0);
    assert_eq!(reports[0].filled, 1);

    assert_eq!(
        ghi_values(&df),
        vec![Some(1.0), Some(2.0), Some(3.0), Some(2.0)]
    );
    assert_eq!(df.column("GHI").unwrap().null_count(), 0);
}

#[test]
fn test_imputation_is_idempotent() {
    let df = df!("GHI" => &[Some(1.0f64), Some(2.0), Some(3.0), None]).unwrap();
    let columns = vec!["GHI".to_string()];

    let (once, _) = impute_medians(df, &columns).unwrap();
    let (twice, reports) = impute_medians(once.clone(), &columns).unwrap();

    assert_eq!(reports[0].filled, 0);
    assert_eq!(ghi_values(&once), ghi_values(&twice));
}

#[test]
fn test_median_includes_extreme_values() {
    // The median is computed over all non-missing values, outliers
    // included: [1, 2, 3, 1000] gives 2.5, not the 2.0 an outlier-excluding
    // pass would produce.
    let df = df!("GHI" => &[Some(1.0f64), Some(2.0), Some(3.0), Some(1000.0), None]).unwrap();

    let (df, reports) = impute_medians(df, &["GHI".to_string()]).unwrap();

    assert_eq!(reports[0].median, 2.5);
    assert_eq!(ghi_values(&df)[4], Some(2.5));
}

#[test]
fn test_absent_column_is_skipped() {
    let df = df!("Tamb" => [20.0f64, 21.0]).unwrap();

    let (df, reports) = impute_medians(df, &["GHI".to_string()]).unwrap();

    assert!(reports.is_empty());
    assert_eq!(df.height(), 2);
}

#[test]
fn test_all_null_column_is_left_untouched() {
    let df = df!("GHI" => &[None::<f64>, None, None]).unwrap();

    let (df, reports) = impute_medians(df, &["GHI".to_string()]).unwrap();

    assert!(reports.is_empty());
    assert_eq!(df.column("GHI").unwrap().null_count(), 3);
}

#[test]
fn test_multiple_columns_imputed_independently() {
    let df = df!(
        "GHI" => &[Some(1.0f64), Some(3.0), None],
        "DNI" => &[Some(10.0f64), None, Some(30.0)],
        "DHI" => &[Some(0.5f64), Some(0.7), Some(0.9)],
    )
    .unwrap();

    let columns: Vec<String> = ["GHI", "DNI", "DHI"].iter().map(|s| s.to_string()).collect();
    let (df, reports) = impute_medians(df, &columns).unwrap();

    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].median, 2.0);
    assert_eq!(reports[1].median, 20.0);
    assert_eq!(reports[2].filled, 0);

    for name in ["GHI", "DNI", "DHI"] {
        assert_eq!(df.column(name).unwrap().null_count(), 0);
    }
}
