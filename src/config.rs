//! Configuration resolution for the insights CLI
//!
//! The dataset path is resolved in layers: explicit CLI flag, then the
//! `SKYSCRAPER_DATA` environment variable, then the default file name in the
//! working directory.

use crate::constants::{DATA_PATH_ENV_VAR, DEFAULT_DATA_FILE};
use crate::{InsightsError, Result};
use std::path::PathBuf;

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the skyscraper dataset CSV
    pub data_path: PathBuf,
}

impl Config {
    /// Resolve the configuration from an optional CLI override
    pub fn resolve(cli_data_path: Option<PathBuf>) -> Self {
        let data_path = cli_data_path
            .or_else(|| std::env::var_os(DATA_PATH_ENV_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        Self { data_path }
    }

    /// Validate that the configured dataset is a readable file
    pub fn validate(&self) -> Result<()> {
        if !self.data_path.exists() {
            return Err(InsightsError::DataSourceNotFound {
                path: self.data_path.clone(),
            });
        }

        if !self.data_path.is_file() {
            return Err(InsightsError::configuration(format!(
                "Dataset path is not a file: {}",
                self.data_path.display()
            )));
        }

        Ok(())
    }
}
