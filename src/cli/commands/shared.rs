//! Shared components for CLI commands
//!
//! Common helpers used across the command implementations: logging setup,
//! source resolution, progress bars, and report output.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::cli::args::SourceList;
use crate::error::{Result, SolarError};
use crate::loader;
use crate::models::SourceSpec;

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("solar_processor={}", log_level)));

    // try_init so repeated calls (tests, library embedding) keep the first
    // subscriber instead of panicking.
    let result = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if result.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }

    Ok(())
}

/// Resolve the sources a command should process
///
/// An explicit source list wins; otherwise *.csv files are discovered
/// under the input directory with country labels derived from file stems.
pub fn resolve_sources(
    input_dir: &Option<PathBuf>,
    sources: &Option<SourceList>,
) -> Result<Vec<SourceSpec>> {
    if let Some(list) = sources {
        return Ok(list.sources.clone());
    }

    let Some(input_dir) = input_dir else {
        return Err(SolarError::configuration(
            "Provide an input directory (--input) or an explicit source list (--sources)",
        ));
    };

    let discovered = loader::discover_sources(input_dir)?;
    if discovered.is_empty() {
        return Err(SolarError::configuration(format!(
            "No CSV sources found in input directory: {}",
            input_dir.display()
        )));
    }

    info!(
        "Discovered {} sources in {}",
        discovered.len(),
        input_dir.display()
    );

    Ok(discovered)
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Write report content to the output file, or stdout when none is given
pub fn write_output(content: &str, output_file: &Option<PathBuf>) -> Result<()> {
    match output_file {
        Some(path) => {
            std::fs::write(path, content)?;
            info!("Report written to: {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
