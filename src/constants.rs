//! Application constants for the solar processor
//!
//! This module contains column names, cleaning thresholds, default values,
//! and report settings used throughout the solar processor application.

// =============================================================================
// Column Names
// =============================================================================

/// Standard column names in the solar measurement datasets
pub mod columns {
    // Temporal column
    pub const TIMESTAMP: &str = "Timestamp";

    // Solar irradiance metrics
    pub const GHI: &str = "GHI";
    pub const DNI: &str = "DNI";
    pub const DHI: &str = "DHI";

    // Module-specific irradiance sensors
    pub const MOD_A: &str = "ModA";
    pub const MOD_B: &str = "ModB";

    // Wind metrics
    pub const WS: &str = "WS";
    pub const WS_GUST: &str = "WSgust";
    pub const WD: &str = "WD";

    // Ambient conditions
    pub const RH: &str = "RH";
    pub const TAMB: &str = "Tamb";

    // Derived columns (not present in raw source files)
    pub const COUNTRY: &str = "Country";
    pub const CLEANING_FLAG: &str = "Cleaning Flag";
}

// =============================================================================
// Cleaning Configuration
// =============================================================================

/// Columns monitored for z-score outliers, in pass order
pub const OUTLIER_COLUMNS: &[&str] = &[
    columns::GHI,
    columns::DNI,
    columns::DHI,
    columns::MOD_A,
    columns::MOD_B,
    columns::WS,
    columns::WS_GUST,
];

/// Columns whose missing values are imputed with the column median
pub const IMPUTE_COLUMNS: &[&str] = &[columns::GHI, columns::DNI, columns::DHI];

/// Absolute z-score above which a value is considered an outlier
pub const ZSCORE_THRESHOLD: f64 = 3.0;

/// Suffix appended to the source file stem for exported cleaned files
pub const CLEAN_FILE_SUFFIX: &str = "_clean";

/// Default output directory for cleaned CSV exports
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Rows sampled for CSV schema inference
pub const DEFAULT_INFER_SCHEMA_LENGTH: usize = 1000;

// =============================================================================
// Report Configuration
// =============================================================================

/// Timestamp format used by the measurement loggers
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Null percentage above which a column is reported as high-null
pub const HIGH_NULL_THRESHOLD_PCT: f64 = 5.0;

/// Columns included in the correlation matrix, when present
pub const CORRELATION_COLUMNS: &[&str] = &[
    columns::GHI,
    columns::DNI,
    columns::DHI,
    columns::MOD_A,
    columns::MOD_B,
];

/// Compass sector labels for the wind direction distribution, clockwise from north
pub const COMPASS_SECTORS: &[&str] = &[
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Number of fixed-width bins in histogram tables
pub const HISTOGRAM_BINS: usize = 10;

/// Columns summarised with histogram tables in the detailed report
pub const HISTOGRAM_COLUMNS: &[&str] = &[columns::GHI, columns::WS];

// =============================================================================
// Helper Functions
// =============================================================================

/// Get the exported filename for a raw source file stem
pub fn cleaned_filename(stem: &str) -> String {
    format!("{}{}.csv", stem, CLEAN_FILE_SUFFIX)
}

/// Derive a country label from a source file stem
///
/// Used when sources are discovered from a directory rather than listed
/// explicitly. Separators become spaces and each word is title-cased, so
/// `sierra_leone_clean` becomes `Sierra Leone`.
pub fn country_from_stem(stem: &str) -> String {
    let stem = stem.strip_suffix(CLEAN_FILE_SUFFIX).unwrap_or(stem);

    stem.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
