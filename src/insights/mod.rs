//! Statistical summarization engine for generation time series.
//!
//! The insights module is the analytical core of gridstat. It filters a
//! tabular generation dataset by category, computes descriptive statistics
//! over a reporting window, harmonizes category labels, and assembles the
//! final summary table.

pub mod aggregate;
pub mod rename;
pub mod summary;

#[cfg(test)]
mod tests;

pub use aggregate::{maximum, mean, minimum, sum_energy_gwh, total_energy_gwh};
pub use rename::{rename_mapping_keys, rename_table_categories};
pub use summary::build_summary;
