use clap::Parser;
use solar_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Solar Processor - Cross-Country Irradiance Cleaning and Comparison");
    println!("==================================================================");
    println!();
    println!("Clean raw solar irradiance measurement CSV files and compare solar");
    println!("potential across countries from the cleaned data.");
    println!();
    println!("USAGE:");
    println!("    solar-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    clean       Flag outliers, impute missing values, export cleaned CSVs");
    println!("    report      Generate a cross-country comparison report");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Clean every CSV in a directory:");
    println!("    solar-processor clean --input data/raw --output data");
    println!();
    println!("    # Clean explicitly named sources:");
    println!("    solar-processor clean --sources \"Benin=data/benin.csv,Togo=data/togo.csv\"");
    println!();
    println!("    # Cross-country report over cleaned files:");
    println!("    solar-processor report --input data --detailed");
    println!();
    println!("    # Restrict to two countries and emit JSON:");
    println!("    solar-processor report --input data --countries Benin,Togo --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    solar-processor <COMMAND> --help");
}
