//! Clean command implementation for the solar processor CLI
//!
//! Runs the full cleaning workflow: resolve sources, load each raw CSV,
//! flag outliers and impute missing irradiance values, and export one
//! cleaned CSV per source. A missing source file is skipped with a
//! warning; the run continues with the remaining sources.

use colored::*;
use std::time::Instant;
use tracing::{info, warn};

use super::shared::{create_progress_bar, resolve_sources, setup_logging};
use crate::cli::args::CleanArgs;
use crate::config::CleanerConfig;
use crate::constants::cleaned_filename;
use crate::error::{Result, SolarError};
use crate::export::export_cleaned;
use crate::loader::read_csv;
use crate::models::CleanRunStats;
use crate::pipeline::CleaningPipeline;

/// Clean command runner
///
/// 1. Set up logging and validate arguments
/// 2. Resolve the source list
/// 3. Load, clean, and export each source
/// 4. Print the run summary
pub fn run_clean(args: CleanArgs) -> Result<CleanRunStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    let sources = resolve_sources(&args.input_dir, &args.sources)?;
    info!("Cleaning {} sources", sources.len());

    let mut config = CleanerConfig::default();
    if let Some(output_dir) = &args.output_dir {
        config = config.with_output_dir(output_dir);
    }
    if let Some(threshold) = args.zscore_threshold {
        config = config.with_zscore_threshold(threshold);
    }
    config.validate()?;

    let pipeline = CleaningPipeline::new(config.clone());
    let mut stats = CleanRunStats::default();

    let progress = args
        .show_progress()
        .then(|| create_progress_bar(sources.len() as u64, "Cleaning sources"));

    for spec in &sources {
        if let Some(pb) = &progress {
            pb.set_message(format!("Cleaning: {}", spec.country));
        }

        let df = match read_csv(&spec.path) {
            Ok(df) => df,
            Err(SolarError::SourceNotFound { path }) => {
                warn!(
                    "Source file not found, skipping '{}': {}",
                    spec.country,
                    path.display()
                );
                stats.sources_skipped += 1;
                if let Some(pb) = &progress {
                    pb.inc(1);
                }
                continue;
            }
            Err(e) => return Err(e),
        };

        let outcome = pipeline.run(df)?;
        let mut cleaned = outcome.data;
        let exported = export_cleaned(
            &mut cleaned,
            &config.output_dir,
            &cleaned_filename(&spec.stem()),
        )?;

        info!(
            "Cleaned '{}': {} rows, {} flagged, {} values imputed",
            spec.country,
            outcome.report.rows,
            outcome.report.flagged_rows,
            outcome.report.total_filled()
        );

        stats.sources_processed += 1;
        stats.total_rows += outcome.report.rows;
        stats.total_flagged_rows += outcome.report.flagged_rows;
        stats.exported.push(exported);

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress {
        pb.finish_with_message("All sources cleaned");
    }

    stats.processing_time_ms = start_time.elapsed().as_millis();

    if !args.quiet {
        print_summary(&stats);
    }

    Ok(stats)
}

/// Print the run summary to the terminal
fn print_summary(stats: &CleanRunStats) {
    println!("\n{}", "Cleaning Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Sources processed:".bright_cyan(),
        stats.sources_processed.to_string().bright_white()
    );
    if stats.sources_skipped > 0 {
        println!(
            "  {} {}",
            "Sources skipped:".bright_red(),
            stats.sources_skipped.to_string().bright_red().bold()
        );
    }
    println!(
        "  {} {}",
        "Total rows:".bright_cyan(),
        stats.total_rows.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Rows flagged:".bright_cyan(),
        stats.total_flagged_rows.to_string().bright_white()
    );
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );
    for path in &stats.exported {
        println!("  {} {}", "Exported:".bright_cyan(), path.display());
    }
}
