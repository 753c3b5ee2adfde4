//! Per-category statistic functions over a generation dataset.
//!
//! Each function filters the dataset to rows whose category column exactly
//! equals the requested label, then reduces the quantity column. Matching is
//! exact string equality - no fuzzy or case-insensitive handling. Callers'
//! frames are never mutated; every operation works on its own view of the
//! data.
//!
//! Empty-match semantics follow the statistical definitions: minimum, mean
//! and maximum over zero rows are undefined and surface as NaN, while a sum
//! over zero rows is 0.0.

use polars::prelude::*;

use crate::constants::{CATEGORY_COL, MWH_TO_GWH, QUANTITY_COL, SAMPLE_INTERVAL_HOURS};
use crate::error::Result;

/// Filter the dataset to rows matching one generation category
fn filter_category(category: &str, dataset: &DataFrame) -> Result<DataFrame> {
    let mask = dataset.column(CATEGORY_COL)?.str()?.equal(category);
    Ok(dataset.filter(&mask)?)
}

/// Minimum output recorded for a generation category
///
/// Returns NaN when no records match the category.
pub fn minimum(category: &str, dataset: &DataFrame) -> Result<f64> {
    let filtered = filter_category(category, dataset)?;
    let quantities = filtered.column(QUANTITY_COL)?.f64()?;
    Ok(quantities.min().unwrap_or(f64::NAN))
}

/// Arithmetic mean output for a generation category
///
/// Returns NaN when no records match the category.
pub fn mean(category: &str, dataset: &DataFrame) -> Result<f64> {
    let filtered = filter_category(category, dataset)?;
    let quantities = filtered.column(QUANTITY_COL)?.f64()?;
    Ok(quantities.mean().unwrap_or(f64::NAN))
}

/// Maximum output recorded for a generation category
///
/// Returns NaN when no records match the category.
pub fn maximum(category: &str, dataset: &DataFrame) -> Result<f64> {
    let filtered = filter_category(category, dataset)?;
    let quantities = filtered.column(QUANTITY_COL)?.f64()?;
    Ok(quantities.max().unwrap_or(f64::NAN))
}

/// Summed energy output for a generation category, in GWh
///
/// Each quantity is an average MW reading over one 30 minute settlement
/// period, so the energy sum is quantity x 0.5 hours, converted to GWh.
/// An empty match sums to 0.0.
pub fn sum_energy_gwh(category: &str, dataset: &DataFrame) -> Result<f64> {
    let filtered = filter_category(category, dataset)?;
    sum_quantity_gwh(&filtered)
}

/// Total energy output across every record in the dataset, in GWh
pub fn total_energy_gwh(dataset: &DataFrame) -> Result<f64> {
    sum_quantity_gwh(dataset)
}

fn sum_quantity_gwh(dataset: &DataFrame) -> Result<f64> {
    let quantities = dataset.column(QUANTITY_COL)?.f64()?;
    let sum_mwh = quantities.sum().unwrap_or(0.0) * SAMPLE_INTERVAL_HOURS;
    Ok(sum_mwh * MWH_TO_GWH)
}
