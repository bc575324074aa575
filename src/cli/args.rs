//! Command-line argument definitions for the skyscraper insights CLI
//!
//! Defines the CLI interface with clap's derive API. Each subcommand maps to
//! one query surface of the pipeline; shared flags (dataset path, output
//! format, verbosity) are global.

use crate::constants::{ALL_CITIES, DEFAULT_MAX_HEIGHT, DEFAULT_MIN_HEIGHT, DEFAULT_TOP_N};
use crate::{InsightsError, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the skyscraper insights tool
///
/// Explores a static skyscraper dataset by city, height rank, and location.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "skyscraper-insights",
    version,
    about = "Explore a skyscraper dataset by city, height rank, and location",
    long_about = "Loads a skyscraper CSV dataset into an immutable, validated in-memory store \
                  and answers queries against it: tallest-building leaderboards, completed \
                  buildings with average height by completion year, height-range map listings, \
                  and name-to-city lookups."
)]
pub struct Args {
    /// Path to the skyscraper dataset CSV
    ///
    /// If not specified, the SKYSCRAPER_DATA environment variable is
    /// consulted, then ./skyscrapers.csv
    #[arg(
        short = 'd',
        long = "data",
        value_name = "PATH",
        global = true,
        help = "Path to the skyscraper dataset CSV"
    )]
    pub data_path: Option<PathBuf>,

    /// Output format for query results
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        global = true,
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress logging except errors"
    )]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List the cities available in the dataset
    Cities,
    /// Show the tallest skyscrapers, optionally restricted to a city
    Tallest(TallestArgs),
    /// Show completed skyscrapers with average height by completion year
    Completed(CompletedArgs),
    /// List mappable skyscrapers within a height range
    Map(MapArgs),
    /// Find which city a skyscraper is located in
    Locate(LocateArgs),
}

/// Arguments for the tallest command
#[derive(Debug, Clone, Parser)]
pub struct TallestArgs {
    /// City to restrict the leaderboard to
    #[arg(
        short = 'c',
        long = "city",
        value_name = "CITY",
        default_value = ALL_CITIES,
        help = "City to restrict the leaderboard to"
    )]
    pub city: String,

    /// Number of buildings to show
    #[arg(
        short = 'n',
        long = "top",
        value_name = "COUNT",
        default_value_t = DEFAULT_TOP_N,
        help = "Number of buildings to show"
    )]
    pub top: usize,
}

/// Arguments for the completed command
#[derive(Debug, Clone, Parser)]
pub struct CompletedArgs {
    /// City to restrict the listing to
    #[arg(
        short = 'c',
        long = "city",
        value_name = "CITY",
        default_value = ALL_CITIES,
        help = "City to restrict the listing to"
    )]
    pub city: String,
}

/// Arguments for the map command
#[derive(Debug, Clone, Parser)]
pub struct MapArgs {
    /// City to restrict the listing to
    #[arg(
        short = 'c',
        long = "city",
        value_name = "CITY",
        default_value = ALL_CITIES,
        help = "City to restrict the listing to"
    )]
    pub city: String,

    /// Minimum height in meters (inclusive)
    #[arg(
        long = "min",
        value_name = "METERS",
        default_value_t = DEFAULT_MIN_HEIGHT,
        help = "Minimum height in meters (inclusive)"
    )]
    pub min_height: f64,

    /// Maximum height in meters (inclusive)
    #[arg(
        long = "max",
        value_name = "METERS",
        default_value_t = DEFAULT_MAX_HEIGHT,
        help = "Maximum height in meters (inclusive)"
    )]
    pub max_height: f64,
}

/// Arguments for the locate command
#[derive(Debug, Clone, Parser)]
pub struct LocateArgs {
    /// Skyscraper name to look up (case-insensitive, whitespace-trimmed)
    #[arg(value_name = "NAME", help = "Skyscraper name to look up")]
    pub name: String,
}

/// Output format options for query results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Human,
    /// JSON for scripting
    Json,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl MapArgs {
    /// Validate the height range for consistency
    pub fn validate(&self) -> Result<()> {
        if self.min_height < 0.0 {
            return Err(InsightsError::configuration(
                "Minimum height must be non-negative".to_string(),
            ));
        }

        if self.min_height > self.max_height {
            return Err(InsightsError::configuration(format!(
                "Minimum height {} exceeds maximum height {}",
                self.min_height, self.max_height
            )));
        }

        Ok(())
    }
}

impl LocateArgs {
    /// Validate that a non-blank name was given
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(InsightsError::configuration(
                "Skyscraper name cannot be blank".to_string(),
            ));
        }
        Ok(())
    }
}
