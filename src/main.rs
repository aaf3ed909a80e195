//! VIN Fleet - fleet VIN decoding and oil service reports
//!
//! A CLI tool that decodes VINs against the NHTSA vPIC API and assembles
//! per-fleet service reports.

use clap::Parser;
use vin_fleet::cli::Cli;
use vin_fleet::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
