//! Command implementations for the gridstat CLI
//!
//! Wires dataset loading, label normalization and summary assembly to the
//! command-line interface, and renders the resulting table to the terminal
//! or a CSV file.

use colored::*;
use tracing::{debug, info};

use crate::cli::args::{Args, CategoriesArgs, Commands, SummarizeArgs};
use crate::constants::{
    reporting_window_end, reporting_window_start, ALL_CATEGORIES, CATEGORY_LABEL_MAP,
    RENEWABLE_CATEGORIES,
};
use crate::error::Result;
use crate::insights::{build_summary, rename_table_categories};
use crate::models::SummaryTable;
use crate::{dataset, GridStatError};

/// Dispatch the parsed CLI arguments to the matching command
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Summarize(summarize_args)) => summarize(summarize_args).await,
        Some(Commands::Categories(categories_args)) => categories(categories_args),
        None => Err(GridStatError::configuration(
            "no command specified; run with --help for usage",
        )),
    }
}

/// Set up structured logging for the summarize command
fn setup_logging(args: &SummarizeArgs) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gridstat={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Compute and render the generation statistics summary
async fn summarize(args: SummarizeArgs) -> Result<()> {
    setup_logging(&args);

    info!(input = %args.input_path.display(), "Loading generation dataset");
    let df = dataset::load_csv(&args.input_path)?;

    // Harmonize raw BMRS labels so "Fossil Gas" rows land on the "Gas"
    // driver category before aggregation.
    let df = rename_table_categories(&df)?;

    let start_date = args.start_date.unwrap_or_else(reporting_window_start);
    let end_date = args.end_date.unwrap_or_else(reporting_window_end);
    let table = build_summary(&df, start_date, end_date, args.renewable_only)?;

    render_summary(&table, args.renewable_only);

    if let Some(output_path) = &args.output_path {
        let mut summary_df = table.to_dataframe()?;
        dataset::write_csv(&mut summary_df, output_path)?;
        println!(
            "\n{} {}",
            "Summary written to".bright_cyan(),
            output_path.display()
        );
    }

    Ok(())
}

/// Print the summary table to the terminal
fn render_summary(table: &SummaryTable, renewable_only: bool) {
    let title = if renewable_only {
        "Renewable Generation Summary"
    } else {
        "Generation Summary"
    };
    println!("\n{}", title.bright_green().bold());
    println!(
        "  {} {} to {} (exclusive)",
        "Window:".bright_cyan(),
        reporting_window_start(),
        reporting_window_end()
    );
    println!();
    println!(
        "{:<15} {:>10} {:>10} {:>10} {:>11} {:>9}",
        "Category".bold(),
        "Min".bold(),
        "Mean".bold(),
        "Max".bold(),
        "Sum (GWh)".bold(),
        "% Total".bold()
    );

    for row in table.rows() {
        println!(
            "{:<15} {:>10.1} {:>10.1} {:>10.1} {:>11.3} {:>9.1}",
            row.category,
            row.stats.minimum,
            row.stats.mean,
            row.stats.maximum,
            row.stats.sum_gwh,
            row.stats.percent_of_total
        );
    }
}

/// List the reported categories and the raw label renames
fn categories(args: CategoriesArgs) -> Result<()> {
    let (title, set): (&str, &[&str]) = if args.renewable_only {
        ("Renewable categories", RENEWABLE_CATEGORIES)
    } else {
        ("Reported categories", ALL_CATEGORIES)
    };

    println!("{}", title.bright_green().bold());
    for category in set {
        println!("  {}", category);
    }

    println!("\n{}", "Raw label renames".bright_green().bold());
    for (raw, display) in CATEGORY_LABEL_MAP {
        println!("  {:<35} -> {}", raw, display);
    }

    Ok(())
}
