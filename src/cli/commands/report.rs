//! Report command implementation for the solar processor CLI
//!
//! Loads cleaned per-country CSV files through the load cache, applies the
//! optional country filter, and renders the cross-country comparison in
//! human, JSON, or CSV form.

use colored::*;
use std::fmt::Write as _;
use tracing::info;

use super::shared::{resolve_sources, setup_logging, write_output};
use crate::cli::args::{OutputFormat, ReportArgs};
use crate::error::{Result, SolarError};
use crate::loader::{LoadCache, load_sources};
use crate::report::{ReportBundle, ReportOptions, build_report};

/// Report command runner
///
/// 1. Set up logging and validate arguments
/// 2. Load cleaned sources (missing files are skipped)
/// 3. Build the report sections
/// 4. Render in the requested format to stdout or the output file
pub fn run_report(args: ReportArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    let sources = resolve_sources(&args.input_dir, &args.sources)?;

    let mut cache = LoadCache::new();
    let outcome = load_sources(&sources, &mut cache)?;

    let Some(ref df) = outcome.data else {
        return Err(SolarError::configuration(
            "None of the requested sources could be loaded",
        ));
    };

    info!(
        "Loaded {} rows from {} sources ({} skipped)",
        outcome.total_rows(),
        outcome.loaded.len(),
        outcome.skipped.len()
    );

    let options = ReportOptions {
        countries: args
            .countries
            .as_ref()
            .map(|list| list.countries.clone()),
        metrics: match args.metric {
            Some(metric) => vec![metric.column_name().to_string()],
            None => ReportOptions::default().metrics,
        },
        detailed: args.detailed,
    };

    let bundle = build_report(df, &options)?;

    // Keep ANSI escapes out of files.
    if args.output_file.is_some() {
        colored::control::set_override(false);
    }

    let content = match args.output_format {
        OutputFormat::Human => render_human(&bundle),
        OutputFormat::Json => serde_json::to_string_pretty(&bundle)?,
        OutputFormat::Csv => render_csv(&bundle),
    };

    write_output(&content, &args.output_file)
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

/// Render the report as human-readable text
fn render_human(bundle: &ReportBundle) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}",
        "Cross-Country Solar Potential Comparison".bright_green().bold()
    );
    let _ = writeln!(out, "========================================");
    let _ = writeln!(
        out,
        "{} {} rows across {} countries: {}",
        "Dataset:".bright_cyan(),
        bundle.rows,
        bundle.countries.len(),
        bundle.countries.join(", ")
    );

    let _ = writeln!(out, "\n{}", "Summary statistics".bright_yellow());
    let _ = writeln!(
        out,
        "  {:<14} {:<8} {:>8} {:>10} {:>10} {:>10}",
        "Country", "Metric", "Count", "Mean", "Median", "Std"
    );
    for summary in &bundle.summaries {
        for metric in &summary.metrics {
            let _ = writeln!(
                out,
                "  {:<14} {:<8} {:>8} {:>10} {:>10} {:>10}",
                summary.country,
                metric.metric,
                metric.count,
                fmt_opt(metric.mean),
                fmt_opt(metric.median),
                fmt_opt(metric.std)
            );
        }
    }

    let _ = writeln!(out, "\n{}", "Missing values".bright_yellow());
    for entry in &bundle.missing.per_column {
        if entry.nulls > 0 {
            let _ = writeln!(
                out,
                "  {:<14} {} ({:.1}%)",
                entry.column, entry.nulls, entry.pct
            );
        }
    }
    if bundle.missing.high_null_columns.is_empty() {
        let _ = writeln!(out, "  No columns above the 5% null threshold");
    } else {
        let _ = writeln!(
            out,
            "  Columns with >5% nulls: {}",
            bundle.missing.high_null_columns.join(", ")
        );
    }

    let _ = writeln!(out, "\n{}", "Average GHI ranking".bright_yellow());
    for (position, entry) in bundle.ranking.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {:<14} {} ({} rows)",
            position + 1,
            entry.country,
            fmt_opt(entry.mean_ghi),
            entry.rows
        );
    }

    if let Some(correlation) = &bundle.correlation {
        let _ = writeln!(out, "\n{}", "Correlation matrix".bright_yellow());
        let _ = write!(out, "  {:<8}", "");
        for name in &correlation.columns {
            let _ = write!(out, "{:>8}", name);
        }
        let _ = writeln!(out);
        for (i, name) in correlation.columns.iter().enumerate() {
            let _ = write!(out, "  {:<8}", name);
            for value in &correlation.values[i] {
                let _ = write!(out, "{:>8}", fmt_opt(*value));
            }
            let _ = writeln!(out);
        }
    }

    if let Some(impact) = &bundle.cleaning_impact {
        let _ = writeln!(out, "\n{}", "Average ModA & ModB by cleaning flag".bright_yellow());
        for group in impact {
            let label = if group.flag == 0 { "Original" } else { "Flagged" };
            let _ = writeln!(
                out,
                "  {:<10} ModA {} ModB {} ({} rows)",
                label,
                fmt_opt(group.mean_mod_a),
                fmt_opt(group.mean_mod_b),
                group.rows
            );
        }
    }

    if let Some(temporal) = &bundle.temporal {
        let _ = writeln!(out, "\n{}", "Mean GHI by month".bright_yellow());
        for period in &temporal.monthly {
            let _ = writeln!(
                out,
                "  month {:>2}: {:.2} ({} rows)",
                period.period, period.mean_ghi, period.rows
            );
        }
        let _ = writeln!(out, "\n{}", "Mean GHI by hour".bright_yellow());
        for period in &temporal.hourly {
            let _ = writeln!(
                out,
                "  hour {:>2}: {:.2} ({} rows)",
                period.period, period.mean_ghi, period.rows
            );
        }
    }

    if let Some(wind) = &bundle.wind {
        let _ = writeln!(out, "\n{}", "Wind direction distribution".bright_yellow());
        for sector in &wind.sectors {
            if sector.count > 0 {
                let _ = writeln!(out, "  {:<4} {}", sector.sector, sector.count);
            }
        }
    }

    for histogram in &bundle.histograms {
        let _ = writeln!(
            out,
            "\n{}",
            format!("Distribution of {}", histogram.column).bright_yellow()
        );
        for bin in &histogram.bins {
            let _ = writeln!(
                out,
                "  [{:>10.2}, {:>10.2}) {}",
                bin.lower, bin.upper, bin.count
            );
        }
    }

    out
}

/// Render the summary table as CSV
fn render_csv(bundle: &ReportBundle) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "country,metric,count,mean,median,std");

    for summary in &bundle.summaries {
        for metric in &summary.metrics {
            let _ = writeln!(
                out,
                "{},{},{},{},{},{}",
                summary.country,
                metric.metric,
                metric.count,
                fmt_opt(metric.mean),
                fmt_opt(metric.median),
                fmt_opt(metric.std)
            );
        }
    }

    out
}
