//! CitySift CLI
//!
//! Command-line interface for the city search screen. Provides the
//! interactive TUI plus one-shot filter commands for scripted use.

use citysift::{logging, prefix_match_indices, CitySiftError, Dataset};
use clap::{Parser, Subcommand};
use console::style;
use serde::Serialize;
use std::path::PathBuf;

/// CitySift - interactive city search
///
/// A search bar over a fixed city list: typing filters the table
/// after a short settle window, Enter searches immediately.
#[derive(Parser)]
#[command(name = "citysift")]
#[command(author = "CitySift Contributors")]
#[command(version)]
#[command(about = "Interactive city search", long_about = None)]
struct Cli {
    /// JSON file with the city list (array of strings); built-in list
    /// when omitted
    #[arg(short, long, global = true)]
    cities: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive search screen (default)
    Tui,

    /// Filter the city list once and print the matches
    Filter {
        /// Prefix to match (case-sensitive; empty matches everything)
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// Print the full city list
    List,
}

fn main() {
    logging::init();
    logging::info("MAIN", "CitySift starting up");

    let cli = Cli::parse();

    let result = load_dataset(cli.cities.as_deref()).and_then(|cities| match cli.command {
        None | Some(Commands::Tui) => citysift::tui::run(cities),
        Some(Commands::Filter { query, output }) => cmd_filter(&cities, &query, &output),
        Some(Commands::List) => cmd_list(&cities),
    });

    logging::flush();

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn load_dataset(path: Option<&std::path::Path>) -> citysift::Result<Dataset> {
    match path {
        Some(path) => Dataset::from_json_file(path),
        None => Ok(Dataset::builtin()),
    }
}

/// One row set of filter results plus the query that produced it.
#[derive(Serialize)]
struct FilterReport<'a> {
    query: &'a str,
    shown: usize,
    total: usize,
    cities: Vec<&'a str>,
}

/// Filter command implementation
fn cmd_filter(cities: &Dataset, query: &str, output_format: &str) -> citysift::Result<()> {
    let hits = prefix_match_indices(cities, query);
    let shown: Vec<&str> = hits.iter().filter_map(|&idx| cities.get(idx)).collect();
    logging::log_filter_result(query, shown.len(), cities.len());

    match output_format {
        "json" => {
            let report = FilterReport {
                query,
                shown: shown.len(),
                total: cities.len(),
                cities: shown,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "text" => {
            println!(
                "{} {} of {} cities match '{}'",
                style("→").cyan().bold(),
                style(shown.len()).green(),
                cities.len(),
                style(query).yellow()
            );
            for name in shown {
                println!("  {}", name);
            }
        }
        other => {
            return Err(CitySiftError::UnknownOutputFormat(other.to_string()));
        }
    }

    Ok(())
}

/// List command implementation
fn cmd_list(cities: &Dataset) -> citysift::Result<()> {
    println!(
        "{} {} cities",
        style("→").cyan().bold(),
        style(cities.len()).green()
    );
    for name in cities.iter() {
        println!("  {}", name);
    }
    Ok(())
}
