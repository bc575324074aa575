//! Dataset loading and per-record validation
//!
//! Loads the raw skyscraper CSV into a [`BuildingStore`], applying the load
//! invariants: rows with a non-positive height or a missing city are dropped
//! and counted, never a crash. A missing or unreadable source file is a hard
//! error; the pipeline refuses to serve queries from an unloaded store.

use super::metadata::LoadStats;
use super::BuildingStore;
use crate::constants::{columns, REQUIRED_COLUMNS};
use crate::models::BuildingRecord;
use crate::{InsightsError, Result};
use csv::StringRecord;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Why a row was excluded from the store
enum SkipReason {
    InvalidHeight(String),
    MissingCity,
    Malformed(String),
}

/// Header-name to column-index mapping for the dataset
///
/// Columns are located by name so the loader tolerates reordered or extra
/// columns, as long as the required ones are present.
struct ColumnMapping {
    name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    fn from_headers(headers: &StringRecord, path: &Path) -> Result<Self> {
        let name_to_index: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.trim().to_string(), index))
            .collect();

        for column in REQUIRED_COLUMNS {
            if !name_to_index.contains_key(*column) {
                return Err(InsightsError::MissingColumn {
                    column: column.to_string(),
                    path: path.to_path_buf(),
                });
            }
        }

        Ok(Self { name_to_index })
    }

    /// Get a field value by column name, trimmed; empty values become `None`
    fn field<'a>(&self, record: &'a StringRecord, column: &str) -> Option<&'a str> {
        self.name_to_index
            .get(column)
            .and_then(|&index| record.get(index))
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}

impl BuildingStore {
    /// Load and validate the skyscraper dataset from a CSV file
    ///
    /// Applies the load filtering policy: rows with `height <= 0` or a
    /// missing city are dropped and counted in [`LoadStats`]; the city value
    /// is kept as a string unconditionally, even when it looks numeric.
    ///
    /// # Errors
    /// * [`InsightsError::DataSourceNotFound`] if the file does not exist
    /// * [`InsightsError::MissingColumn`] if a required column is absent
    /// * [`InsightsError::Csv`] / [`InsightsError::Io`] for unreadable input
    pub fn load(path: &Path) -> Result<(Self, LoadStats)> {
        info!("Loading skyscraper dataset from {}", path.display());

        if !path.exists() {
            return Err(InsightsError::DataSourceNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)?;

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(InsightsError::EmptyDataset {
                path: path.to_path_buf(),
            });
        }
        let mapping = ColumnMapping::from_headers(&headers, path)?;

        let mut store = Self::new(path.to_path_buf());
        let mut stats = LoadStats::new();

        for (row_index, result) in reader.records().enumerate() {
            stats.total_rows += 1;

            let record = match result {
                Ok(record) => record,
                Err(error) => {
                    stats.skipped_malformed += 1;
                    stats
                        .errors
                        .push(format!("row {}: unreadable record: {}", row_index + 1, error));
                    warn!("Skipping unreadable row {}: {}", row_index + 1, error);
                    continue;
                }
            };

            match parse_building_row(&record, &mapping) {
                Ok(building) => {
                    store.records.push(building);
                    stats.records_loaded += 1;
                }
                Err(SkipReason::InvalidHeight(value)) => {
                    stats.skipped_invalid_height += 1;
                    stats
                        .errors
                        .push(format!("row {}: invalid height '{}'", row_index + 1, value));
                    debug!("Skipping row {}: invalid height '{}'", row_index + 1, value);
                }
                Err(SkipReason::MissingCity) => {
                    stats.skipped_missing_city += 1;
                    stats
                        .errors
                        .push(format!("row {}: missing city", row_index + 1));
                    debug!("Skipping row {}: missing city", row_index + 1);
                }
                Err(SkipReason::Malformed(message)) => {
                    stats.skipped_malformed += 1;
                    stats
                        .errors
                        .push(format!("row {}: {}", row_index + 1, message));
                    warn!("Skipping row {}: {}", row_index + 1, message);
                }
            }
        }

        info!(
            "Loaded {} of {} records ({:.1}% usable), skipped {}",
            stats.records_loaded,
            stats.total_rows,
            stats.success_rate(),
            stats.records_skipped()
        );

        Ok((store, stats))
    }
}

/// Parse one CSV row into a validated record, or a reason to skip it
fn parse_building_row(
    record: &StringRecord,
    mapping: &ColumnMapping,
) -> std::result::Result<BuildingRecord, SkipReason> {
    // City first: a row with no city is dropped regardless of the rest.
    // The value is kept verbatim as a string even when it looks numeric.
    let city = match mapping.field(record, columns::CITY) {
        Some(city) => city.to_string(),
        None => return Err(SkipReason::MissingCity),
    };

    let height_raw = mapping
        .field(record, columns::HEIGHT)
        .ok_or_else(|| SkipReason::InvalidHeight(String::new()))?;
    let height: f64 = height_raw
        .parse()
        .map_err(|_| SkipReason::Malformed(format!("unparseable height '{}'", height_raw)))?;
    if !height.is_finite() || height <= 0.0 {
        return Err(SkipReason::InvalidHeight(height_raw.to_string()));
    }

    // A building without a name is still a building; keep it with an empty
    // name rather than dropping the row.
    let name = mapping
        .field(record, columns::NAME)
        .unwrap_or_default()
        .to_string();

    let latitude = parse_optional_coordinate(mapping.field(record, columns::LATITUDE));
    let longitude = parse_optional_coordinate(mapping.field(record, columns::LONGITUDE));

    let is_completed = mapping
        .field(record, columns::IS_COMPLETED)
        .map(parse_bool)
        .unwrap_or(false);

    // Missing or unparseable years collapse to the raw `0` sentinel; the
    // "Unknown" substitution happens only at display time.
    let completion_year = mapping
        .field(record, columns::YEAR)
        .and_then(parse_year)
        .unwrap_or(crate::constants::YEAR_UNKNOWN);

    BuildingRecord::new(
        name,
        city,
        height,
        latitude,
        longitude,
        is_completed,
        completion_year,
    )
    .map_err(|error| SkipReason::Malformed(error.to_string()))
}

/// Parse an optional coordinate; absent or unusable values become `None`
fn parse_optional_coordinate(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Parse a completion boolean
///
/// Pandas-exported CSVs write `True`/`False`; plain exports write
/// `true`/`false` or `1`/`0`. Anything else is treated as not completed.
fn parse_bool(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "1")
}

/// Parse a completion year that may be serialized as an integer or a float
///
/// Datasets that passed through pandas carry years like `1974.0` because a
/// column with missing values is promoted to floating point.
fn parse_year(value: &str) -> Option<i32> {
    if let Ok(year) = value.parse::<i32>() {
        return Some(year);
    }
    value.parse::<f64>().ok().map(|year| year as i32)
}
