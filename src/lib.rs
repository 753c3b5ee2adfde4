//! Gridstat Library
//!
//! A Rust library for summarizing GB electricity generation time series.
//!
//! This library provides tools for:
//! - Filtering half-hourly generation datasets by category
//! - Computing per-category statistics: min, mean, max and summed GWh output
//! - Assembling an ordered summary table with percent-of-total shares
//! - Harmonizing raw BMRS category labels to display names
//! - A thin keyed record store and CSV dataset interchange

pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod insights;
pub mod models;
pub mod store;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::StoreConfig;
pub use error::{GridStatError, Result};
pub use models::{CategoryStats, GenerationRecord, SummaryTable};
