//! Load statistics and store metadata
//!
//! Types for reporting what the loader kept, what it dropped, and why.
//! Per-record exclusions are counted here rather than failing the whole load.

use std::path::PathBuf;
use std::time::Instant;

/// Statistics collected while loading the dataset
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Total number of data rows encountered (excluding the header)
    pub total_rows: usize,

    /// Number of records that passed validation and entered the store
    pub records_loaded: usize,

    /// Rows dropped for a non-positive or non-finite height
    pub skipped_invalid_height: usize,

    /// Rows dropped for a missing/blank city value
    pub skipped_missing_city: usize,

    /// Rows dropped because a field could not be parsed at all
    pub skipped_malformed: usize,

    /// Human-readable descriptions of the exclusions, for debugging
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of rows dropped during the load
    pub fn records_skipped(&self) -> usize {
        self.skipped_invalid_height + self.skipped_missing_city + self.skipped_malformed
    }

    /// Calculate the share of rows that entered the store, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.records_loaded as f64 / self.total_rows as f64) * 100.0
        }
    }
}

/// Metadata about a loaded store
#[derive(Debug, Clone)]
pub struct StoreMetadata {
    /// Path the dataset was loaded from
    pub source_path: PathBuf,

    /// Number of records in the store
    pub record_count: usize,

    /// Timestamp when the store was loaded
    pub load_time: Instant,
}
