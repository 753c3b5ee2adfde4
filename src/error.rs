//! Error handling for generation statistics operations.
//!
//! Provides error types with context for dataset loading, schema
//! validation, and record store failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridStatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Date/time parsing error: {0}")]
    DateTimeParsing(#[from] chrono::ParseError),

    #[error("Dataset not found at path: {path}")]
    DatasetNotFound { path: PathBuf },

    #[error("Failed to load dataset from {path}: {reason}")]
    DatasetLoad { path: PathBuf, reason: String },

    #[error("Schema violation in column '{column}': {reason}")]
    SchemaViolation { column: String, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Record not found: id = {id}")]
    RecordNotFound { id: String },

    #[error("Record already exists: id = {id}")]
    DuplicateRecord { id: String },
}

impl GridStatError {
    /// Create a schema violation error for a dataset column
    pub fn schema_violation(column: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SchemaViolation {
            column: column.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GridStatError>;
