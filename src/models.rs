//! Core data structures for generation statistics.
//!
//! Defines the stored generation record, per-category statistics,
//! and the ordered summary table produced by the insights engine.

use chrono::NaiveDateTime;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::SUMMARY_COLUMNS;
use crate::error::Result;

/// A single half-hourly generation record, as held by the record store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Store document id
    pub id: String,
    /// Settlement timestamp the reading applies to
    pub timestamp: NaiveDateTime,
    /// Generation category (BMRS power type)
    pub category: String,
    /// Average output in MW over the 30 minute settlement period
    pub quantity: f64,
}

impl GenerationRecord {
    pub fn new(
        id: impl Into<String>,
        timestamp: NaiveDateTime,
        category: impl Into<String>,
        quantity: f64,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp,
            category: category.into(),
            quantity,
        }
    }
}

/// Descriptive statistics for one generation category
///
/// Minimum, mean and maximum are in the unit of the source quantity (MW);
/// they are NaN when the category matched no records. The energy sum is in
/// GWh and is 0.0 over an empty match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryStats {
    pub minimum: f64,
    pub mean: f64,
    pub maximum: f64,
    pub sum_gwh: f64,
    pub percent_of_total: f64,
}

/// One row of the summary table
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub category: String,
    pub stats: CategoryStats,
}

/// Ordered summary of generation statistics, keyed by display category
///
/// Row order is the presentation order the summary was built with.
/// Columns are always Min, Mean, Max, Sum, % Total.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SummaryTable {
    rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append a category row, preserving insertion order
    pub fn push(&mut self, category: impl Into<String>, stats: CategoryStats) {
        self.rows.push(SummaryRow {
            category: category.into(),
            stats,
        });
    }

    /// Look up a row's statistics by category name
    pub fn get(&self, category: &str) -> Option<&CategoryStats> {
        self.rows
            .iter()
            .find(|row| row.category == category)
            .map(|row| &row.stats)
    }

    /// Category names in presentation order
    pub fn categories(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.category.as_str()).collect()
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a DataFrame with fixed column order
    ///
    /// Suitable for CSV export or further processing by a presentation
    /// collaborator.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let categories: Vec<&str> = self.categories();
        let minimums: Vec<f64> = self.rows.iter().map(|r| r.stats.minimum).collect();
        let means: Vec<f64> = self.rows.iter().map(|r| r.stats.mean).collect();
        let maximums: Vec<f64> = self.rows.iter().map(|r| r.stats.maximum).collect();
        let sums: Vec<f64> = self.rows.iter().map(|r| r.stats.sum_gwh).collect();
        let percents: Vec<f64> = self.rows.iter().map(|r| r.stats.percent_of_total).collect();

        let df = df!(
            "Category" => categories,
            SUMMARY_COLUMNS[0] => minimums,
            SUMMARY_COLUMNS[1] => means,
            SUMMARY_COLUMNS[2] => maximums,
            SUMMARY_COLUMNS[3] => sums,
            SUMMARY_COLUMNS[4] => percents,
        )?;
        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(value: f64) -> CategoryStats {
        CategoryStats {
            minimum: value,
            mean: value,
            maximum: value,
            sum_gwh: value,
            percent_of_total: value,
        }
    }

    #[test]
    fn test_summary_table_preserves_insertion_order() {
        let mut table = SummaryTable::new();
        table.push("Solar", stats(1.0));
        table.push("Gas", stats(2.0));
        table.push("Coal", stats(3.0));

        assert_eq!(table.categories(), vec!["Solar", "Gas", "Coal"]);
        assert_eq!(table.get("Gas").unwrap().mean, 2.0);
        assert!(table.get("Nuclear").is_none());
    }

    #[test]
    fn test_summary_table_to_dataframe_column_order() {
        let mut table = SummaryTable::new();
        table.push("Solar", stats(1.0));

        let df = table.to_dataframe().unwrap();
        let names: Vec<&str> = df.get_column_names_str();
        assert_eq!(
            names,
            vec!["Category", "Min", "Mean", "Max", "Sum", "% Total"]
        );
        assert_eq!(df.height(), 1);
    }
}
