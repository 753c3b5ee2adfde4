//! Summary table assembly across the driver category set.
//!
//! Drives the per-category aggregators over a date-masked copy of the
//! dataset and assembles an ordered summary table with each category's
//! share of total generation.

use chrono::NaiveDateTime;
use polars::prelude::*;
use tracing::debug;

use crate::constants::{
    reporting_window_end, reporting_window_start, ALL_CATEGORIES, RENEWABLE_CATEGORIES,
    TIMESTAMP_COL,
};
use crate::error::{GridStatError, Result};
use crate::insights::aggregate;
use crate::models::{CategoryStats, SummaryTable};

/// Build an ordered statistics summary of the generation dataset
///
/// The dataset is sorted by timestamp, masked to the reporting window, and
/// reduced per category: Min, Mean, Max, Sum (GWh) and % Total columns, with
/// rows in fixed presentation order. With `renewable_only` set, only the
/// renewable subset of categories is reported.
///
/// Categories with no records in the window report NaN for Min/Mean/Max and
/// 0.0 for Sum, matching the empty-set semantics of each statistic. The
/// caller's dataset is never mutated.
pub fn build_summary(
    dataset: &DataFrame,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
    renewable_only: bool,
) -> Result<SummaryTable> {
    let timeseries = dataset.sort(
        [TIMESTAMP_COL],
        SortMultipleOptions::default().with_maintain_order(true),
    )?;

    // Published figures are pinned to the Mar 2020 - Jan 2021 reporting
    // window; the requested bounds are currently overridden to match it.
    // See DESIGN.md before changing.
    let start = reporting_window_start();
    let end = reporting_window_end();
    if start_date != start || end_date != end {
        debug!(
            requested_start = %start_date,
            requested_end = %end_date,
            "Requested date bounds overridden by fixed reporting window"
        );
    }

    let mask = window_mask(&timeseries, start, end)?;
    let timeseries = timeseries.filter(&mask)?;
    debug!(
        rows = timeseries.height(),
        %start,
        %end,
        "Masked dataset to reporting window"
    );

    let grand_total_gwh = aggregate::total_energy_gwh(&timeseries)?;

    let categories: &[&str] = if renewable_only {
        RENEWABLE_CATEGORIES
    } else {
        ALL_CATEGORIES
    };

    let mut table = SummaryTable::new();
    for &category in categories {
        let sum_gwh = aggregate::sum_energy_gwh(category, &timeseries)?;
        let stats = CategoryStats {
            minimum: aggregate::minimum(category, &timeseries)?,
            mean: aggregate::mean(category, &timeseries)?,
            maximum: aggregate::maximum(category, &timeseries)?,
            sum_gwh,
            percent_of_total: (sum_gwh / grand_total_gwh) * 100.0,
        };
        table.push(category, stats);
    }

    Ok(table)
}

/// Boolean mask selecting rows strictly inside the window bounds
fn window_mask(
    dataset: &DataFrame,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<BooleanChunked> {
    let column = dataset.column(TIMESTAMP_COL)?;
    let time_unit = match column.dtype() {
        DataType::Datetime(time_unit, _) => *time_unit,
        other => {
            return Err(GridStatError::schema_violation(
                TIMESTAMP_COL,
                format!("expected a datetime column, found {}", other),
            ))
        }
    };

    let lower = to_physical_timestamp(start, time_unit)?;
    let upper = to_physical_timestamp(end, time_unit)?;
    let physical = column.cast(&DataType::Int64)?;
    let timestamps = physical.i64()?;
    Ok(timestamps.gt(lower) & timestamps.lt(upper))
}

/// Convert a bound to the integer representation of the column's time unit
fn to_physical_timestamp(bound: NaiveDateTime, time_unit: TimeUnit) -> Result<i64> {
    let utc = bound.and_utc();
    let value = match time_unit {
        TimeUnit::Milliseconds => utc.timestamp_millis(),
        TimeUnit::Microseconds => utc.timestamp_micros(),
        TimeUnit::Nanoseconds => utc.timestamp_nanos_opt().ok_or_else(|| {
            GridStatError::schema_violation(
                TIMESTAMP_COL,
                "window bound out of range for nanosecond timestamps",
            )
        })?,
    };
    Ok(value)
}
