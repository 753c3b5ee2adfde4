//! Dataset materialization and CSV interchange.
//!
//! Bridges the record store and the insights engine: turns stored
//! generation records into the tabular dataset the statistics functions
//! operate on, and reads/writes CSV snapshots for offline analysis.

use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::constants::{CATEGORY_COL, QUANTITY_COL, TIMESTAMP_COL};
use crate::error::{GridStatError, Result};
use crate::models::GenerationRecord;

/// Materialize generation records into the tabular dataset shape
///
/// Timestamps are stored as millisecond-precision datetimes and quantities
/// as 64-bit floats, the shapes the aggregation functions expect.
pub fn records_to_dataframe(records: &[GenerationRecord]) -> Result<DataFrame> {
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    let timestamps: Vec<i64> = records
        .iter()
        .map(|r| r.timestamp.and_utc().timestamp_millis())
        .collect();
    let categories: Vec<&str> = records.iter().map(|r| r.category.as_str()).collect();
    let quantities: Vec<f64> = records.iter().map(|r| r.quantity).collect();

    let timestamps = Series::new(TIMESTAMP_COL.into(), timestamps)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;

    let df = DataFrame::new(vec![
        Column::new("id".into(), ids),
        timestamps.into_column(),
        Column::new(CATEGORY_COL.into(), categories),
        Column::new(QUANTITY_COL.into(), quantities),
    ])?;

    debug!(rows = df.height(), "Materialized records into dataset");
    Ok(df)
}

/// Load a generation dataset from a CSV snapshot
///
/// The file must carry at least the timestamp, category and quantity
/// columns. Timestamps are parsed from ISO-8601 text and normalized to
/// millisecond precision.
pub fn load_csv(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(GridStatError::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let parse_options = CsvParseOptions::default().with_try_parse_dates(true);
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| GridStatError::DatasetLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
        .finish()
        .map_err(|e| GridStatError::DatasetLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    debug!(rows = df.height(), path = %path.display(), "Loaded dataset from CSV");
    normalize_dataset(df)
}

/// Write a dataset or summary frame to CSV
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    debug!(rows = df.height(), path = %path.display(), "Wrote CSV");
    Ok(())
}

/// Normalize the dataset's column types for aggregation
///
/// Fails with a schema violation if a required column is absent or cannot
/// be represented in the expected type.
fn normalize_dataset(mut df: DataFrame) -> Result<DataFrame> {
    let timestamps = df
        .column(TIMESTAMP_COL)
        .map_err(|_| GridStatError::schema_violation(TIMESTAMP_COL, "column missing"))?
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
        .map_err(|e| GridStatError::schema_violation(TIMESTAMP_COL, e.to_string()))?;
    df.with_column(timestamps)?;

    let quantities = df
        .column(QUANTITY_COL)
        .map_err(|_| GridStatError::schema_violation(QUANTITY_COL, "column missing"))?
        .cast(&DataType::Float64)
        .map_err(|e| GridStatError::schema_violation(QUANTITY_COL, e.to_string()))?;
    df.with_column(quantities)?;

    df.column(CATEGORY_COL)
        .map_err(|_| GridStatError::schema_violation(CATEGORY_COL, "column missing"))?
        .str()
        .map_err(|e| GridStatError::schema_violation(CATEGORY_COL, e.to_string()))?;

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    fn record(id: &str, day: u32, category: &str, quantity: f64) -> GenerationRecord {
        let timestamp = NaiveDate::from_ymd_opt(2020, 6, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        GenerationRecord::new(id, timestamp, category, quantity)
    }

    #[test]
    fn test_records_to_dataframe_shape() {
        let records = vec![
            record("1", 1, "Solar", 100.0),
            record("2", 2, "Gas", 300.0),
        ];
        let df = records_to_dataframe(&records).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(
            df.get_column_names_str(),
            vec!["id", "timestamp", "category", "quantity"]
        );
        assert_eq!(
            df.column("timestamp").unwrap().dtype(),
            &DataType::Datetime(TimeUnit::Milliseconds, None)
        );
        assert_eq!(df.column("quantity").unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn test_records_to_dataframe_empty() {
        let df = records_to_dataframe(&[]).unwrap();
        assert_eq!(df.height(), 0);
    }

    #[test]
    fn test_load_csv_parses_timestamps_and_quantities() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timestamp,category,quantity").unwrap();
        writeln!(file, "2020-06-01T00:00:00,Solar,100").unwrap();
        writeln!(file, "2020-06-01T00:30:00,Gas,300").unwrap();
        file.flush().unwrap();

        let df = load_csv(file.path()).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(
            df.column("timestamp").unwrap().dtype(),
            &DataType::Datetime(TimeUnit::Milliseconds, None)
        );
        assert_eq!(df.column("quantity").unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn test_load_csv_missing_file() {
        let err = load_csv(Path::new("/nonexistent/generation.csv")).unwrap_err();
        assert!(matches!(err, GridStatError::DatasetNotFound { .. }));
    }

    #[test]
    fn test_load_csv_missing_column_is_schema_violation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timestamp,category").unwrap();
        writeln!(file, "2020-06-01T00:00:00,Solar").unwrap();
        file.flush().unwrap();

        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, GridStatError::SchemaViolation { .. }));
    }
}
