//! Command handlers

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::domain::model::{Fleet, Vehicle};
use crate::error::Result;
use crate::export::export_report;
use crate::infrastructure::load_model_year_table;
use crate::output::{print_report, print_vehicle_decode};
use crate::reference::{ReferenceData, MODEL_YEAR_FILE};
use crate::vpic::VpicClient;
use std::path::{Path, PathBuf};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Decode { vin } => cmd_decode(&config, vin, output_format),

        Commands::Report {
            vins,
            mileage,
            specs,
            output,
            data_dir,
        } => cmd_report(
            &cli,
            &config,
            vins.clone(),
            mileage.clone(),
            *specs,
            output.clone(),
            data_dir.clone(),
            output_format,
        ),

        Commands::Config {
            show,
            set_api_base,
            set_data_dir,
            set_output,
            reset,
        } => cmd_config(
            *show,
            set_api_base.clone(),
            set_data_dir.clone(),
            *set_output,
            *reset,
        ),
    }
}

fn cmd_decode(config: &Config, vin: &str, output_format: OutputFormat) -> Result<()> {
    let vehicle = Vehicle::new(vin)?;

    let years = load_model_year_table(&config.data_dir()?.join(MODEL_YEAR_FILE))?;
    let client = VpicClient::new(&config.api_base_url);

    let decode = vehicle.decode(&client, &years)?;
    print_vehicle_decode(output_format, &decode)
}

#[allow(clippy::too_many_arguments)]
fn cmd_report(
    cli: &Cli,
    config: &Config,
    vins: Vec<String>,
    mileage: Vec<u32>,
    specs: bool,
    output: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let reference = if specs {
        let dir = match data_dir {
            Some(dir) => dir,
            None => config.data_dir()?,
        };
        if cli.verbose {
            eprintln!("Loading reference tables from {}", dir.display());
        }
        Some(ReferenceData::load(&dir)?)
    } else {
        None
    };

    let fleet = Fleet::new(vins);
    if cli.verbose {
        eprintln!("Decoding {} VINs", fleet.len());
    }

    let client = VpicClient::new(&config.api_base_url);
    let mileage = if mileage.is_empty() {
        None
    } else {
        Some(mileage.as_slice())
    };

    let report = fleet.build_report(&client, mileage, reference.as_ref())?;
    print_report(output_format, &report)?;

    if let Some(path) = output {
        let path = ensure_xlsx_extension(&path);
        export_report(&report, &path)?;
        println!("\nReport saved to {}", path.display());
    }

    Ok(())
}

fn ensure_xlsx_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension("xlsx")
    }
}

fn cmd_config(
    show: bool,
    set_api_base: Option<String>,
    set_data_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(api_base) = set_api_base {
        config.api_base_url = api_base;
        changed = true;
    }
    if let Some(data_dir) = set_data_dir {
        config.data_dir = Some(data_dir);
        changed = true;
    }
    if let Some(output) = set_output {
        config.output_format = output;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_xlsx_extension() {
        assert_eq!(
            ensure_xlsx_extension(Path::new("fleet_report")),
            PathBuf::from("fleet_report.xlsx")
        );
        assert_eq!(
            ensure_xlsx_extension(Path::new("fleet_report.xlsx")),
            PathBuf::from("fleet_report.xlsx")
        );
    }
}
