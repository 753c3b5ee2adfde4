//! Tests for the statistical summarization engine

mod aggregate_tests;

use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::DataFrame;

use crate::dataset::records_to_dataframe;
use crate::models::GenerationRecord;

/// A timestamp inside the fixed reporting window
pub fn in_window(month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Build a dataset from (timestamp, category, quantity) triples
pub fn dataset(rows: &[(NaiveDateTime, &str, f64)]) -> DataFrame {
    let records: Vec<GenerationRecord> = rows
        .iter()
        .enumerate()
        .map(|(i, (timestamp, category, quantity))| {
            GenerationRecord::new(format!("r{}", i), *timestamp, *category, *quantity)
        })
        .collect();
    records_to_dataframe(&records).unwrap()
}
