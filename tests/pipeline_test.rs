//! End-to-end tests for the load → derive → query pipeline
//!
//! These tests drive the public API the way the CLI does: write a realistic
//! dataset to disk, load it into a store, and check the documented query
//! contracts against it.

use skyscraper_insights::constants::ALL_CITIES;
use skyscraper_insights::display::format_height;
use skyscraper_insights::{average_height_by_completion_year, BuildingStore, InsightsError};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

const HEADER: &str = "name,location.city,location.latitude,location.longitude,\
statistics.height,status.completed.is_completed,status.completed.year";

/// A realistic slice of the skyscraper dataset, including rows the loader
/// must drop: a zero height, a missing city, and an unparseable height.
const ROWS: &[&str] = &[
    "Burj Khalifa,Dubai,25.1972,55.2744,828.0,True,2010",
    "Willis Tower,Chicago,41.8789,-87.6359,442.1,True,1974",
    "Trump International Hotel & Tower,Chicago,41.8892,-87.6266,423.2,True,2009",
    "Chicago Spire,Chicago,41.8871,-87.6130,609.6,False,0",
    "Princess Tower,Dubai,25.0886,55.1467,413.4,True,2012",
    "Marina City,Chicago,41.8885,-87.6287,179.2,True,1964",
    "Ghost Tower,Chicago,41.0,-87.0,0,False,0",
    "Orphan Tower,,40.0,-80.0,350.0,True,2005",
    "Glitch Tower,Chicago,41.0,-87.0,tall,True,2001",
];

fn write_fixture() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("skyscrapers.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for row in ROWS {
        writeln!(file, "{}", row).unwrap();
    }
    (dir, path)
}

#[test]
fn load_enforces_store_invariants() {
    let (_dir, path) = write_fixture();
    let (store, stats) = BuildingStore::load(&path).unwrap();

    assert_eq!(store.len(), 6);
    assert_eq!(stats.total_rows, 9);
    assert_eq!(stats.records_skipped(), 3);

    for record in store.records() {
        assert!(record.height > 0.0);
        assert!(!record.city.trim().is_empty());
    }
}

#[test]
fn missing_dataset_is_a_hard_error() {
    let result = BuildingStore::load(std::path::Path::new("/no/such/skyscrapers.csv"));
    assert!(matches!(
        result,
        Err(InsightsError::DataSourceNotFound { .. })
    ));
}

#[test]
fn global_top_five_is_the_five_tallest() {
    let (_dir, path) = write_fixture();
    let (store, _) = BuildingStore::load(&path).unwrap();

    let result = store.top_n_tallest(ALL_CITIES, 5);
    assert_eq!(result.count, 5);

    let names: Vec<&str> = result.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Burj Khalifa",
            "Chicago Spire",
            "Willis Tower",
            "Trump International Hotel & Tower",
            "Princess Tower",
        ]
    );
}

#[test]
fn city_leaderboard_is_filtered_and_ordered() {
    let (_dir, path) = write_fixture();
    let (store, _) = BuildingStore::load(&path).unwrap();

    let result = store.top_n_tallest("Chicago", 20);
    assert_eq!(result.count, 4);
    assert!(result.records.iter().all(|r| r.city == "Chicago"));
    for pair in result.records.windows(2) {
        assert!(pair[0].height >= pair[1].height);
    }
}

#[test]
fn completed_listing_excludes_unfinished_buildings() {
    let (_dir, path) = write_fixture();
    let (store, _) = BuildingStore::load(&path).unwrap();

    let completed = store.completed_in_city("Chicago");
    assert_eq!(completed.len(), 3);
    assert!(completed.iter().all(|r| r.is_completed));

    let averages = average_height_by_completion_year(&completed);
    assert!((averages[&1974] - 442.1).abs() < 1e-9);
    assert!((averages[&2009] - 423.2).abs() < 1e-9);
    assert!(!averages.contains_key(&0));
}

#[test]
fn height_range_is_inclusive_and_city_aware() {
    let (_dir, path) = write_fixture();
    let (store, _) = BuildingStore::load(&path).unwrap();

    let in_range = store.by_height_range_and_city(ALL_CITIES, 300.0, 600.0);
    assert!(in_range
        .iter()
        .all(|r| r.height >= 300.0 && r.height <= 600.0));
    assert_eq!(in_range.len(), 3);

    // Exact boundary values are included
    let boundary = store.by_height_range_and_city(ALL_CITIES, 828.0, 828.0);
    assert_eq!(boundary.len(), 1);
    assert_eq!(boundary[0].name, "Burj Khalifa");
}

#[test]
fn name_lookup_is_trimmed_and_case_insensitive() {
    let (_dir, path) = write_fixture();
    let (store, _) = BuildingStore::load(&path).unwrap();

    assert_eq!(
        store.find_city_of_skyscraper(" willis tower "),
        Some("Chicago")
    );
    assert_eq!(store.find_city_of_skyscraper("Nonexistent Tower"), None);
}

#[test]
fn city_list_is_sorted_with_sentinel_first() {
    let (_dir, path) = write_fixture();
    let (store, _) = BuildingStore::load(&path).unwrap();

    assert_eq!(store.unique_city_list(), vec!["ALL CITIES", "Chicago", "Dubai"]);
}

#[test]
fn height_formatting_contract() {
    assert_eq!(format_height(300.0), "300");
    assert_eq!(format_height(300.50), "300.5");
    assert_eq!(format_height(300.25), "300.25");
}
