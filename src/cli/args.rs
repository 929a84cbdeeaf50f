//! Command-line argument definitions for the solar processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API: the `clean` command for the raw-to-cleaned pipeline and the
//! `report` command for cross-country analysis of cleaned data.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::columns;
use crate::error::{Result, SolarError};
use crate::models::SourceSpec;

/// CLI arguments for the solar measurement processor
///
/// Cleans raw solar irradiance CSV exports (outlier flagging and median
/// imputation) and reports cross-country comparisons over cleaned data.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "solar-processor",
    version,
    about = "Clean and compare cross-country solar irradiance measurements",
    long_about = "Processes raw solar irradiance measurement exports: flags statistical \
                  outliers with a z-score threshold, imputes missing irradiance values \
                  with the column median, exports cleaned CSV files, and reports \
                  cross-country summary statistics, rankings, and distributions."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the solar processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Clean raw measurement CSV files and export them with a cleaning flag
    Clean(CleanArgs),
    /// Generate a cross-country comparison report from cleaned CSV files
    Report(ReportArgs),
}

/// Arguments for the clean command (main data processing)
#[derive(Debug, Clone, Parser)]
pub struct CleanArgs {
    /// Input directory containing raw measurement CSV files
    ///
    /// Every *.csv file underneath is treated as one source; the country
    /// label is derived from the file stem. Use --sources instead to name
    /// files and labels explicitly.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input directory containing raw measurement CSV files"
    )]
    pub input_dir: Option<PathBuf>,

    /// Explicit sources as a comma-separated list of Country=path pairs
    ///
    /// Example: --sources "Benin=data/benin.csv,Togo=data/togo.csv"
    #[arg(
        short = 's',
        long = "sources",
        value_name = "LIST",
        help = "Comma-separated Country=path pairs",
        conflicts_with = "input_dir"
    )]
    pub sources: Option<SourceList>,

    /// Output directory for cleaned CSV files
    ///
    /// Will be created if it doesn't exist. Each source exports as
    /// <stem>_clean.csv.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for cleaned CSV files"
    )]
    pub output_dir: Option<PathBuf>,

    /// Absolute z-score above which a value flags its row
    #[arg(
        long = "threshold",
        value_name = "SIGMA",
        help = "Z-score threshold for outlier flagging (default 3.0)"
    )]
    pub zscore_threshold: Option<f64>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the report command (cross-country comparison)
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Input directory containing cleaned measurement CSV files
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input directory containing cleaned measurement CSV files"
    )]
    pub input_dir: Option<PathBuf>,

    /// Explicit sources as a comma-separated list of Country=path pairs
    #[arg(
        short = 's',
        long = "sources",
        value_name = "LIST",
        help = "Comma-separated Country=path pairs",
        conflicts_with = "input_dir"
    )]
    pub sources: Option<SourceList>,

    /// Restrict the report to these countries (comma-separated)
    ///
    /// If not specified, every loaded country is included.
    #[arg(
        short = 'c',
        long = "countries",
        value_name = "LIST",
        help = "Comma-separated list of countries to include"
    )]
    pub countries: Option<CountryList>,

    /// Solar metric to summarise
    ///
    /// If not specified, GHI, DNI, and DHI are all summarised.
    #[arg(
        short = 'm',
        long = "metric",
        value_enum,
        help = "Solar metric to summarise"
    )]
    pub metric: Option<Metric>,

    /// Include detailed analysis sections
    ///
    /// Adds the correlation matrix, cleaning impact, temporal GHI profile,
    /// wind direction distribution, and histogram tables.
    #[arg(long = "detailed", help = "Include detailed analysis sections")]
    pub detailed: bool,

    /// Output format for the report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Output file for the report
    ///
    /// If not specified, outputs to stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the report"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for the report
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

/// Solar metrics available for the summary table
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Metric {
    /// Global horizontal irradiance
    Ghi,
    /// Direct normal irradiance
    Dni,
    /// Diffuse horizontal irradiance
    Dhi,
}

impl Metric {
    /// Dataset column name for this metric
    pub fn column_name(&self) -> &'static str {
        match self {
            Metric::Ghi => columns::GHI,
            Metric::Dni => columns::DNI,
            Metric::Dhi => columns::DHI,
        }
    }
}

/// Wrapper for parsing comma-separated Country=path source lists
#[derive(Debug, Clone)]
pub struct SourceList {
    pub sources: Vec<SourceSpec>,
}

impl FromStr for SourceList {
    type Err = SolarError;

    fn from_str(s: &str) -> Result<Self> {
        let sources: Vec<SourceSpec> = s
            .split(',')
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .map(SourceSpec::from_str)
            .collect::<Result<_>>()?;

        if sources.is_empty() {
            return Err(SolarError::configuration("Source list cannot be empty"));
        }

        Ok(SourceList { sources })
    }
}

/// Wrapper for parsing comma-separated country lists
#[derive(Debug, Clone)]
pub struct CountryList {
    pub countries: Vec<String>,
}

impl FromStr for CountryList {
    type Err = SolarError;

    fn from_str(s: &str) -> Result<Self> {
        let countries: Vec<String> = s
            .split(',')
            .map(|entry| entry.trim().to_string())
            .filter(|entry| !entry.is_empty())
            .collect();

        if countries.is_empty() {
            return Err(SolarError::configuration("Country list cannot be empty"));
        }

        Ok(CountryList { countries })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl CleanArgs {
    /// Validate the clean command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.input_dir.is_none() && self.sources.is_none() {
            return Err(SolarError::configuration(
                "Provide an input directory (--input) or an explicit source list (--sources)",
            ));
        }

        if let Some(input_dir) = &self.input_dir {
            if !input_dir.exists() {
                return Err(SolarError::configuration(format!(
                    "Input path does not exist: {}",
                    input_dir.display()
                )));
            }
            if !input_dir.is_dir() {
                return Err(SolarError::configuration(format!(
                    "Input path is not a directory: {}",
                    input_dir.display()
                )));
            }
        }

        if let Some(threshold) = self.zscore_threshold {
            if !threshold.is_finite() || threshold <= 0.0 {
                return Err(SolarError::configuration(format!(
                    "Z-score threshold must be a positive number, got {}",
                    threshold
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ReportArgs {
    /// Validate the report command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.input_dir.is_none() && self.sources.is_none() {
            return Err(SolarError::configuration(
                "Provide an input directory (--input) or an explicit source list (--sources)",
            ));
        }

        if let Some(input_dir) = &self.input_dir {
            if !input_dir.is_dir() {
                return Err(SolarError::configuration(format!(
                    "Input path is not a directory: {}",
                    input_dir.display()
                )));
            }
        }

        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(SolarError::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
