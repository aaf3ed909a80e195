//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "vin-fleet")]
#[command(version)]
#[command(about = "Decode VINs via the NHTSA vPIC API and build fleet service reports")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a single VIN (full 17 characters, or the last 8 for year-only)
    Decode {
        /// Full or partial VIN
        vin: String,
    },

    /// Build a fleet report from full VINs
    Report {
        /// Full 17-character VINs, one per vehicle
        #[arg(required = true)]
        vins: Vec<String>,

        /// Current mileage per vehicle, comma separated, aligned with the VINs
        #[arg(long, short = 'm', value_delimiter = ',')]
        mileage: Vec<u32>,

        /// Add oil capacity and filter columns from the local spec tables
        #[arg(long)]
        specs: bool,

        /// Write the report to an .xlsx file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Reference data directory override
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the vPIC API base URL
        #[arg(long)]
        set_api_base: Option<String>,

        /// Set the reference data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
