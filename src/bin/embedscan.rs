//! Command-line interface for embedscan
//! This binary inspects raw embeddings API responses saved to disk.
//!
//! Usage:
//!   embedscan groups `<path>`     - Print coordinate tokens grouped by mantissa length
//!   embedscan histogram `<path>`  - Print the count of coordinates per mantissa length

use clap::{Arg, Command};
use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::process;

use embedscan::parsing;

fn main() {
    let matches = Command::new("embedscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspects the textual encoding of embedding coordinates in raw API responses")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("groups")
                .about("Print coordinate tokens grouped by mantissa length")
                .arg(
                    Arg::new("path")
                        .help("Path to a raw response file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("histogram")
                .about("Print the count of coordinates per mantissa length")
                .arg(
                    Arg::new("path")
                        .help("Path to a raw response file")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("groups", groups_matches)) => {
            let path = groups_matches.get_one::<String>("path").unwrap();
            handle_groups_command(path);
        }
        Some(("histogram", histogram_matches)) => {
            let path = histogram_matches.get_one::<String>("path").unwrap();
            handle_histogram_command(path);
        }
        _ => unreachable!(),
    }
}

/// Handle the groups command
fn handle_groups_command(path: &str) {
    let groups = match load_groups(path) {
        Ok(groups) => groups,
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&groups) {
        Ok(json) => println!("{}", json),
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Handle the histogram command
fn handle_histogram_command(path: &str) {
    let counts = match load_groups(path) {
        Ok(groups) => groups
            .into_iter()
            .map(|(length, decimals)| (length, decimals.len()))
            .collect::<BTreeMap<usize, usize>>(),
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&counts) {
        Ok(json) => println!("{}", json),
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Read a raw response file and group its coordinates by mantissa length
fn load_groups(path: &str) -> Result<BTreeMap<usize, Vec<String>>, Box<dyn Error>> {
    let response_text = fs::read_to_string(path)?;
    Ok(parsing::parse_response(&response_text)?)
}
