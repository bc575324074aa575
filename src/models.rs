//! Data models for the skyscraper insights pipeline
//!
//! This module contains the core record structure representing a single
//! skyscraper, with the validation rules enforced at load time.

use crate::constants::{UNKNOWN_YEAR_LABEL, YEAR_UNKNOWN};
use crate::{InsightsError, Result};
use serde::{Deserialize, Serialize};

/// A single skyscraper record
///
/// One entity per building, cleaned and typed at load time. Coordinates are
/// carried under canonical `latitude`/`longitude` names regardless of their
/// source column names because downstream map consumers depend on that
/// contract. Names are not guaranteed unique across the dataset.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BuildingRecord {
    /// Building name (e.g., "Willis Tower")
    pub name: String,

    /// City the building is located in; never empty in a stored record
    pub city: String,

    /// Height above ground in meters; always positive in a stored record
    pub height: f64,

    /// Latitude in decimal degrees, when the source provides a usable value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Longitude in decimal degrees, when the source provides a usable value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Whether construction has completed
    pub is_completed: bool,

    /// Raw completion year; `0` means unknown and is substituted with
    /// "Unknown" only in display views, never in the stored record
    pub completion_year: i32,
}

impl BuildingRecord {
    /// Create a new record with validation
    pub fn new(
        name: String,
        city: String,
        height: f64,
        latitude: Option<f64>,
        longitude: Option<f64>,
        is_completed: bool,
        completion_year: i32,
    ) -> Result<Self> {
        let record = Self {
            name,
            city,
            height,
            latitude,
            longitude,
            is_completed,
            completion_year,
        };

        record.validate()?;
        Ok(record)
    }

    /// Validate the load invariants: positive finite height, non-empty city
    pub fn validate(&self) -> Result<()> {
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(InsightsError::record_validation(format!(
                "Invalid height {} for '{}': must be a positive number of meters",
                self.height, self.name
            )));
        }

        if self.city.trim().is_empty() {
            return Err(InsightsError::record_validation(format!(
                "Record '{}' has no city value",
                self.name
            )));
        }

        Ok(())
    }

    /// Check whether the record carries a complete coordinate pair
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// Get the location as a (latitude, longitude) pair if both are present
    pub fn location(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Completion year for display: "Unknown" for the `0` sentinel
    ///
    /// Applied only at presentation time; the stored raw year is untouched.
    pub fn display_year(&self) -> String {
        if self.completion_year == YEAR_UNKNOWN {
            UNKNOWN_YEAR_LABEL.to_string()
        } else {
            self.completion_year.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(height: f64, city: &str) -> Result<BuildingRecord> {
        BuildingRecord::new(
            "Test Tower".to_string(),
            city.to_string(),
            height,
            Some(41.8789),
            Some(-87.6359),
            true,
            1974,
        )
    }

    #[test]
    fn test_valid_record() {
        let record = record(442.1, "Chicago").unwrap();
        assert_eq!(record.city, "Chicago");
        assert!(record.has_coordinates());
        assert_eq!(record.location(), Some((41.8789, -87.6359)));
    }

    #[test]
    fn test_rejects_non_positive_height() {
        assert!(record(0.0, "Chicago").is_err());
        assert!(record(-10.0, "Chicago").is_err());
        assert!(record(f64::NAN, "Chicago").is_err());
    }

    #[test]
    fn test_rejects_missing_city() {
        assert!(record(442.1, "").is_err());
        assert!(record(442.1, "   ").is_err());
    }

    #[test]
    fn test_display_year_substitutes_unknown() {
        let mut r = record(442.1, "Chicago").unwrap();
        assert_eq!(r.display_year(), "1974");

        r.completion_year = 0;
        assert_eq!(r.display_year(), "Unknown");
        // Raw value stays untouched in the record itself
        assert_eq!(r.completion_year, 0);
    }

    #[test]
    fn test_location_requires_both_coordinates() {
        let mut r = record(442.1, "Chicago").unwrap();
        r.longitude = None;
        assert!(!r.has_coordinates());
        assert_eq!(r.location(), None);
    }
}
