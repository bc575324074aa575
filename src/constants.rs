//! Shared constants for the skyscraper insights pipeline.

/// Sentinel city value selecting every city in the store.
///
/// Prepended to the unique city list and accepted by every city-parameterized
/// query. The exact spelling is a user-visible contract.
pub const ALL_CITIES: &str = "ALL CITIES";

/// Raw completion-year value meaning "year unknown".
///
/// The raw `0` is preserved in stored records; the substitution to
/// [`UNKNOWN_YEAR_LABEL`] happens only in display views.
pub const YEAR_UNKNOWN: i32 = 0;

/// Display label substituted for [`YEAR_UNKNOWN`] at presentation time.
pub const UNKNOWN_YEAR_LABEL: &str = "Unknown";

/// Default number of buildings returned by the tallest-buildings query.
pub const DEFAULT_TOP_N: usize = 5;

/// Default lower bound (meters) for the map height-range filter.
pub const DEFAULT_MIN_HEIGHT: f64 = 300.0;

/// Default upper bound (meters) for the map height-range filter.
pub const DEFAULT_MAX_HEIGHT: f64 = 600.0;

/// Default dataset file name, resolved relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "skyscrapers.csv";

/// Environment variable overriding the default dataset path.
pub const DATA_PATH_ENV_VAR: &str = "SKYSCRAPER_DATA";

/// Source column names. The field-naming scheme is a contract with the data
/// source, not negotiable internally; coordinates are re-exposed downstream
/// under the canonical names `latitude`/`longitude`.
pub mod columns {
    pub const NAME: &str = "name";
    pub const CITY: &str = "location.city";
    pub const LATITUDE: &str = "location.latitude";
    pub const LONGITUDE: &str = "location.longitude";
    pub const HEIGHT: &str = "statistics.height";
    pub const IS_COMPLETED: &str = "status.completed.is_completed";
    pub const YEAR: &str = "status.completed.year";
}

/// Columns that must be present in the dataset header.
///
/// Coordinates are deliberately absent: records without a usable position are
/// still valid, they are just not mappable.
pub const REQUIRED_COLUMNS: &[&str] = &[
    columns::NAME,
    columns::CITY,
    columns::HEIGHT,
    columns::IS_COMPLETED,
    columns::YEAR,
];
