//! Error handling for the skyscraper insights pipeline.
//!
//! Provides typed errors for dataset loading, schema validation, and
//! configuration failures. Empty query results are never errors; they are
//! valid values reported to the caller.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset not found at path: {path}")]
    DataSourceNotFound { path: PathBuf },

    #[error("Missing required column '{column}' in dataset: {path}")]
    MissingColumn { column: String, path: PathBuf },

    #[error("Dataset has no header row: {path}")]
    EmptyDataset { path: PathBuf },

    #[error("Record validation error: {message}")]
    RecordValidation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl InsightsError {
    /// Create a record validation error
    pub fn record_validation(message: impl Into<String>) -> Self {
        Self::RecordValidation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InsightsError>;
