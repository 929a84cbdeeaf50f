//! Command implementations for the solar processor CLI
//!
//! This module contains the command execution logic, shared helpers, and
//! report rendering for the CLI interface. Each command is implemented in
//! its own module.

pub mod clean;
pub mod report;
pub mod shared;

use crate::cli::args::{Args, Commands};
use crate::error::Result;

/// Main command runner for the solar processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `clean`: raw CSV cleaning workflow with per-source exports
/// - `report`: cross-country comparison report over cleaned data
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Clean(clean_args) => clean::run_clean(clean_args).map(|_| ()),
        Commands::Report(report_args) => report::run_report(report_args),
    }
}
