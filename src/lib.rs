//! Skyscraper Insights Library
//!
//! A Rust library for exploring a static skyscraper dataset through a
//! cleaned, immutable in-memory store and pure query functions.
//!
//! This library provides tools for:
//! - Loading and validating the raw skyscraper CSV (non-positive heights and
//!   missing cities are dropped and counted, not crashed on)
//! - Derived views: stable height-descending sort, completed-only subset,
//!   unique city list with an "ALL CITIES" sentinel
//! - Queries: tallest-building leaderboards, completed buildings per city,
//!   height-range map filtering, average height by completion year, and
//!   name-to-city lookup
//! - Display formatting with exact user-visible contracts
//!
//! The store is built once at startup and never mutated; every view and query
//! result is a fresh vector of references into it.

pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod models;
pub mod store;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::Config;
pub use error::{InsightsError, Result};
pub use models::BuildingRecord;
pub use store::{average_height_by_completion_year, BuildingStore, LoadStats, TallestResult};
