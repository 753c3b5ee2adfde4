use clap::Parser;
use gridstat::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
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
    println!("Gridstat - GB Electricity Generation Summarizer");
    println!("===============================================");
    println!();
    println!("Compute per-category descriptive statistics from half-hourly GB");
    println!("electricity generation data: output ranges, summed GWh and each");
    println!("category's share of total generation.");
    println!();
    println!("USAGE:");
    println!("    gridstat <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    summarize     Compute the category statistics summary from a CSV dataset");
    println!("    categories    List the reported categories and raw label renames");
    println!("    help          Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Summarize a generation dataset:");
    println!("    gridstat summarize --input generation.csv");
    println!();
    println!("    # Renewable categories only, with CSV export:");
    println!("    gridstat summarize --input generation.csv --renewable --output summary.csv");
    println!();
    println!("    # List the category set:");
    println!("    gridstat categories");
    println!();
    println!("For detailed help on any command, use:");
    println!("    gridstat <COMMAND> --help");
}
