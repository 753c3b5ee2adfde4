//! Command-line argument definitions for gridstat
//!
//! Defines the CLI interface using the clap derive API: a `summarize`
//! command that computes the generation statistics table from a CSV
//! snapshot, and a `categories` command that reports the known category
//! labels and renames.

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the generation statistics summarizer
///
/// Computes descriptive statistics (Min, Mean, Max, Sum, % Total) for
/// categories of electricity generation from a half-hourly time-series
/// dataset.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gridstat",
    version,
    about = "Summarize GB electricity generation time series by category",
    long_about = "Computes per-category descriptive statistics from half-hourly GB \
                  electricity generation data: minimum, mean and maximum output, summed \
                  energy in GWh, and each category's share of total generation over the \
                  reporting window."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Compute the category statistics summary from a CSV dataset
    Summarize(SummarizeArgs),
    /// List the reported categories and raw label renames
    Categories(CategoriesArgs),
}

/// Arguments for the summarize command
#[derive(Debug, Clone, Parser)]
pub struct SummarizeArgs {
    /// Input CSV file with timestamp, category and quantity columns
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input CSV file with half-hourly generation records"
    )]
    pub input_path: PathBuf,

    /// Earliest date for inclusion in the statistics
    ///
    /// Accepts YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS.
    #[arg(
        long = "start",
        value_name = "DATE",
        value_parser = parse_datetime_arg,
        help = "Earliest date for inclusion (YYYY-MM-DD)"
    )]
    pub start_date: Option<NaiveDateTime>,

    /// Latest date for inclusion in the statistics
    ///
    /// Accepts YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS.
    #[arg(
        long = "end",
        value_name = "DATE",
        value_parser = parse_datetime_arg,
        help = "Latest date for inclusion (YYYY-MM-DD)"
    )]
    pub end_date: Option<NaiveDateTime>,

    /// Restrict the summary to renewable generation categories
    #[arg(long = "renewable", help = "Summarize renewable categories only")]
    pub renewable_only: bool,

    /// Write the summary table to a CSV file as well as the terminal
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Optional CSV path for the summary table"
    )]
    pub output_path: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,

    /// Suppress all but warning and error logging
    #[arg(short = 'q', long = "quiet", help = "Suppress informational logging")]
    pub quiet: bool,
}

impl SummarizeArgs {
    /// Resolve the tracing level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Arguments for the categories command
#[derive(Debug, Clone, Parser)]
pub struct CategoriesArgs {
    /// Show only the renewable subset
    #[arg(long = "renewable", help = "List renewable categories only")]
    pub renewable_only: bool,
}

/// Parse a CLI date argument as a naive datetime
///
/// Bare dates are taken as midnight at the start of the day.
fn parse_datetime_arg(value: &str) -> Result<NaiveDateTime, String> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_hms_opt(0, 0, 0).unwrap())
        .map_err(|_| {
            format!(
                "invalid date '{}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS",
                value
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_date() {
        let parsed = parse_datetime_arg("2020-03-01").unwrap();
        assert_eq!(parsed.to_string(), "2020-03-01 00:00:00");
    }

    #[test]
    fn test_parse_full_datetime() {
        let parsed = parse_datetime_arg("2020-06-01T12:30:00").unwrap();
        assert_eq!(parsed.to_string(), "2020-06-01 12:30:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_datetime_arg("June 2020").is_err());
    }

    #[test]
    fn test_log_level_from_flags() {
        let base = SummarizeArgs {
            input_path: PathBuf::from("generation.csv"),
            start_date: None,
            end_date: None,
            renewable_only: false,
            output_path: None,
            verbose: false,
            quiet: false,
        };
        assert_eq!(base.get_log_level(), "info");

        let verbose = SummarizeArgs {
            verbose: true,
            ..base.clone()
        };
        assert_eq!(verbose.get_log_level(), "debug");

        let quiet = SummarizeArgs {
            quiet: true,
            ..base
        };
        assert_eq!(quiet.get_log_level(), "warn");
    }
}
