//! Tests for the building store: loading, validation, and queries


use crate::models::BuildingRecord;
use crate::store::BuildingStore;
use std::path::PathBuf;
use std::time::Instant;

/// Build a record directly, bypassing the loader
pub(crate) fn building(
    name: &str,
    city: &str,
    height: f64,
    is_completed: bool,
    completion_year: i32,
) -> BuildingRecord {
    BuildingRecord::new(
        name.to_string(),
        city.to_string(),
        height,
        Some(40.0),
        Some(-80.0),
        is_completed,
        completion_year,
    )
    .unwrap()
}

/// Build a store from in-memory records, preserving their order
pub(crate) fn store_from(records: Vec<BuildingRecord>) -> BuildingStore {
    BuildingStore {
        records,
        source_path: PathBuf::from("/test/skyscrapers.csv"),
        load_time: Instant::now(),
    }
}
