use clap::Parser;
use skyscraper_insights::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Skyscraper Insights - Skyscraper Dataset Explorer");
    println!("=================================================");
    println!();
    println!("Explore a skyscraper dataset by city, height rank, and location.");
    println!();
    println!("USAGE:");
    println!("    skyscraper-insights <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    cities      List the cities available in the dataset");
    println!("    tallest     Show the tallest skyscrapers, optionally per city");
    println!("    completed   Show completed skyscrapers with yearly height averages");
    println!("    map         List mappable skyscrapers within a height range");
    println!("    locate      Find which city a skyscraper is located in");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Top 5 tallest skyscrapers across all cities:");
    println!("    skyscraper-insights tallest");
    println!();
    println!("    # Top 20 tallest in Chicago from a custom dataset:");
    println!("    skyscraper-insights tallest --city Chicago --top 20 --data /data/skyscrapers.csv");
    println!();
    println!("    # Completed skyscrapers in Dubai as JSON:");
    println!("    skyscraper-insights completed --city Dubai --format json");
    println!();
    println!("    # Buildings between 300 and 600 meters with coordinates:");
    println!("    skyscraper-insights map --min 300 --max 600");
    println!();
    println!("    # Which city is the Willis Tower in?");
    println!("    skyscraper-insights locate \"Willis Tower\"");
    println!();
    println!("For detailed help on any command, use:");
    println!("    skyscraper-insights <COMMAND> --help");
}
