//! Command implementations for the skyscraper insights CLI
//!
//! The CLI stands in for the dashboard's presentation layer: each subcommand
//! resolves configuration, loads the store once, runs the matching query, and
//! renders the result as a human table or JSON. Empty results are reported as
//! "no match" text, never as errors.

use crate::cli::args::{
    Args, Commands, CompletedArgs, LocateArgs, MapArgs, OutputFormat, TallestArgs,
};
use crate::config::Config;
use crate::constants::{UNKNOWN_YEAR_LABEL, YEAR_UNKNOWN};
use crate::display::{building_table, format_height};
use crate::models::BuildingRecord;
use crate::store::{average_height_by_completion_year, BuildingStore};
use crate::{InsightsError, Result};
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Main command runner
///
/// Sets up logging, loads the store once, and dispatches to the subcommand.
/// The store is immutable after this point; every query is a pure function of
/// its contents.
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);

    let command = args
        .command
        .clone()
        .ok_or_else(|| InsightsError::configuration("No command specified".to_string()))?;

    let config = Config::resolve(args.data_path.clone());
    config.validate()?;
    debug!("Resolved configuration: {:?}", config);

    let (store, stats) = BuildingStore::load(&config.data_path)?;
    info!(
        "Store ready: {} records from {}",
        store.len(),
        config.data_path.display()
    );
    if stats.records_skipped() > 0 {
        warn!(
            "Excluded {} of {} rows during load ({} invalid height, {} missing city, {} malformed)",
            stats.records_skipped(),
            stats.total_rows,
            stats.skipped_invalid_height,
            stats.skipped_missing_city,
            stats.skipped_malformed
        );
    }

    match command {
        Commands::Cities => run_cities(&store, &args.output_format),
        Commands::Tallest(tallest_args) => run_tallest(&store, &tallest_args, &args.output_format),
        Commands::Completed(completed_args) => {
            run_completed(&store, &completed_args, &args.output_format)
        }
        Commands::Map(map_args) => run_map(&store, &map_args, &args.output_format),
        Commands::Locate(locate_args) => run_locate(&store, &locate_args, &args.output_format),
    }
}

/// Set up tracing with a verbosity-derived filter, stderr only
fn setup_logging(args: &Args) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.get_log_level()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, Serialize)]
struct CitiesReport {
    count: usize,
    cities: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TallestReport<'a> {
    city: &'a str,
    requested: usize,
    count: usize,
    buildings: Vec<&'a BuildingRecord>,
}

#[derive(Debug, Serialize)]
struct CompletedReport<'a> {
    city: &'a str,
    count: usize,
    buildings: Vec<&'a BuildingRecord>,
    average_height_by_year: BTreeMap<i32, f64>,
}

#[derive(Debug, Serialize)]
struct MapPoint<'a> {
    name: &'a str,
    city: &'a str,
    height: f64,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Serialize)]
struct MapReport<'a> {
    city: &'a str,
    min_height: f64,
    max_height: f64,
    count: usize,
    buildings: Vec<MapPoint<'a>>,
}

#[derive(Debug, Serialize)]
struct LocateReport<'a> {
    name: &'a str,
    city: Option<&'a str>,
}

fn run_cities(store: &BuildingStore, format: &OutputFormat) -> Result<()> {
    let cities = store.unique_city_list();
    let report = CitiesReport {
        count: cities.len(),
        cities,
    };

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Human => {
            println!("{}", format!("Cities ({})", report.count).bold());
            for city in &report.cities {
                println!("  {}", city);
            }
            Ok(())
        }
    }
}

fn run_tallest(store: &BuildingStore, args: &TallestArgs, format: &OutputFormat) -> Result<()> {
    let result = store.top_n_tallest(&args.city, args.top);
    let report = TallestReport {
        city: &args.city,
        requested: args.top,
        count: result.count,
        buildings: result.records,
    };

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Human => {
            println!(
                "{}",
                format!("Top {} skyscrapers in {}", report.count, report.city).bold()
            );
            if report.count < report.requested {
                println!(
                    "(only {} of the requested {} match)",
                    report.count, report.requested
                );
            }
            if report.buildings.is_empty() {
                println!("No skyscrapers found for {}.", report.city);
            } else {
                print!("{}", building_table(&report.buildings));
            }
            Ok(())
        }
    }
}

fn run_completed(store: &BuildingStore, args: &CompletedArgs, format: &OutputFormat) -> Result<()> {
    let buildings = store.completed_in_city(&args.city);
    let average_height_by_year = average_height_by_completion_year(&buildings);
    let report = CompletedReport {
        city: &args.city,
        count: buildings.len(),
        buildings,
        average_height_by_year,
    };

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Human => {
            println!(
                "{}",
                format!("Completed skyscrapers in {}", report.city).bold()
            );
            if report.buildings.is_empty() {
                println!("No completed skyscrapers found for {}.", report.city);
                return Ok(());
            }
            print!("{}", building_table(&report.buildings));

            println!();
            println!("{}", "Average height by completion year".bold());
            for (year, average) in &report.average_height_by_year {
                let label = if *year == YEAR_UNKNOWN {
                    UNKNOWN_YEAR_LABEL.to_string()
                } else {
                    year.to_string()
                };
                println!("  {:>7}  {} m", label, format_height(*average));
            }
            Ok(())
        }
    }
}

fn run_map(store: &BuildingStore, args: &MapArgs, format: &OutputFormat) -> Result<()> {
    args.validate()?;

    let in_range = store.by_height_range_and_city(&args.city, args.min_height, args.max_height);

    // The map can only place buildings that carry a coordinate pair
    let buildings: Vec<MapPoint<'_>> = in_range
        .iter()
        .filter_map(|record| {
            record.location().map(|(latitude, longitude)| MapPoint {
                name: &record.name,
                city: &record.city,
                height: record.height,
                latitude,
                longitude,
            })
        })
        .collect();
    let unmapped = in_range.len() - buildings.len();

    let report = MapReport {
        city: &args.city,
        min_height: args.min_height,
        max_height: args.max_height,
        count: buildings.len(),
        buildings,
    };

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Human => {
            println!(
                "{}",
                format!(
                    "Skyscrapers in {} between {} and {} meters",
                    report.city,
                    format_height(report.min_height),
                    format_height(report.max_height)
                )
                .bold()
            );
            if report.buildings.is_empty() {
                println!("No skyscrapers in the selected height range.");
            }
            for point in &report.buildings {
                println!(
                    "  {}  {} m  ({:.4}, {:.4})",
                    point.name,
                    format_height(point.height),
                    point.latitude,
                    point.longitude
                );
            }
            if unmapped > 0 {
                println!("({} matching buildings have no usable coordinates)", unmapped);
            }
            Ok(())
        }
    }
}

fn run_locate(store: &BuildingStore, args: &LocateArgs, format: &OutputFormat) -> Result<()> {
    args.validate()?;

    let city = store.find_city_of_skyscraper(&args.name);
    let report = LocateReport {
        name: &args.name,
        city,
    };

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Human => {
            match report.city {
                Some(city) => {
                    println!("The skyscraper '{}' is located in {}.", report.name.trim(), city)
                }
                None => println!("Sorry, no skyscraper named '{}' found.", report.name.trim()),
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(report: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|error| InsightsError::configuration(format!("JSON encoding failed: {}", error)))?;
    println!("{}", json);
    Ok(())
}
