//! Building store: the immutable, validated record collection
//!
//! This module loads the raw skyscraper dataset into a cleaned, typed store
//! and exposes the derived views and queries the presentation layer consumes.
//! The store is built once at startup and is read-only thereafter; every view
//! is a fresh vector of references, never an in-place mutation.

use crate::models::BuildingRecord;
use std::path::PathBuf;
use std::time::Instant;

pub mod loader;
pub mod metadata;
pub mod query;

#[cfg(test)]
mod tests;

// Re-export key types for convenience
pub use metadata::{LoadStats, StoreMetadata};
pub use query::{average_height_by_completion_year, TallestResult};

/// Immutable collection of validated skyscraper records
///
/// Every stored record satisfies the load invariants (`height > 0`, non-empty
/// city). Records keep their source-file order, which is the tie-break order
/// for the stable height sort.
#[derive(Debug, Clone)]
pub struct BuildingStore {
    /// Validated records in source-file order
    pub(crate) records: Vec<BuildingRecord>,

    /// Path the dataset was loaded from
    pub(crate) source_path: PathBuf,

    /// Timestamp when the store was loaded
    pub(crate) load_time: Instant,
}

impl BuildingStore {
    /// Create a new empty store
    pub(crate) fn new(source_path: PathBuf) -> Self {
        Self {
            records: Vec::new(),
            source_path,
            load_time: Instant::now(),
        }
    }

    /// All records in source-file order
    pub fn records(&self) -> &[BuildingRecord] {
        &self.records
    }

    /// Get a record by its load-order index
    pub fn get(&self, index: usize) -> Option<&BuildingRecord> {
        self.records.get(index)
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get store metadata
    pub fn metadata(&self) -> StoreMetadata {
        StoreMetadata {
            source_path: self.source_path.clone(),
            record_count: self.records.len(),
            load_time: self.load_time,
        }
    }
}
