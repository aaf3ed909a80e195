//! Output formatting module

use crate::cli::OutputFormat;
use crate::domain::model::VehicleDecode;
use crate::error::Result;
use crate::types::FleetReport;

/// Print a single-vehicle decode to the console
pub fn print_vehicle_decode(output_format: OutputFormat, decode: &VehicleDecode) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(decode)?;
        println!("{}", content);
        return Ok(());
    }

    match decode {
        VehicleDecode::Full(decoded) => {
            println!();
            println!("VIN Input: {}", decoded.vin);
            println!("VIN Check: {}", decoded.vin_check);
            println!("Make: {}", decoded.make);
            println!("Model: {}", decoded.model);
            println!("Year: {}", decoded.model_year);
            println!("Displacement (CC): {}", decoded.displacement_cc);
            println!("Displacement (CI): {}", decoded.displacement_ci);
        }
        VehicleDecode::Partial { vin, model_year } => {
            println!();
            println!("VIN Input: {}", vin);
            println!("Model Year: {}", model_year);
        }
    }

    Ok(())
}

/// Print a fleet report to the console
pub fn print_report(output_format: OutputFormat, report: &FleetReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&report.rows)?;
        println!("{}", content);
        return Ok(());
    }

    let headers = report.headers();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();

    let rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| report.row_cells(row))
        .collect();
    for cells in &rows {
        for (i, cell) in cells.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    println!();
    print_row(&headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(), &widths);
    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    println!("{}", "-".repeat(total));
    for cells in &rows {
        print_row(cells, &widths);
    }

    Ok(())
}

fn print_row(cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", line.trim_end());
}
