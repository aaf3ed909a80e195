//! Excel export functionality

use crate::error::{Error, Result};
use crate::types::FleetReport;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Export a fleet report to an Excel file
pub fn export_report(report: &FleetReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    write_fleet_sheet(sheet, report)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_fleet_sheet(sheet: &mut Worksheet, report: &FleetReport) -> Result<()> {
    sheet
        .set_name("Fleet")
        .map_err(|e| Error::Excel(e.to_string()))?;

    // Header format
    let header_format = Format::new().set_bold();

    for (col, header) in report.headers().iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, row) in report.rows.iter().enumerate() {
        let r = (row_idx + 1) as u32;
        let mut col: u16 = 0;

        sheet
            .write_string(r, col, &row.vehicle)
            .map_err(|e| Error::Excel(e.to_string()))?;
        col += 1;

        sheet
            .write_string(r, col, &row.fuel_type)
            .map_err(|e| Error::Excel(e.to_string()))?;
        col += 1;

        if report.has_mileage {
            if let Some(miles) = row.miles {
                sheet
                    .write_number(r, col, miles as f64)
                    .map_err(|e| Error::Excel(e.to_string()))?;
            }
            col += 1;

            if let Some(sticker) = row.sticker_miles {
                sheet
                    .write_number(r, col, sticker as f64)
                    .map_err(|e| Error::Excel(e.to_string()))?;
            }
            col += 1;
        }

        if report.has_specs {
            if let Some(ref capacity) = row.oil_capacity {
                sheet
                    .write_string(r, col, capacity)
                    .map_err(|e| Error::Excel(e.to_string()))?;
            }
            col += 1;

            if let Some(ref filter) = row.oil_filter {
                sheet
                    .write_string(r, col, filter)
                    .map_err(|e| Error::Excel(e.to_string()))?;
            }
        }
    }

    // Vehicle descriptions are the widest cells
    sheet
        .set_column_width(0, 35)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 14)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}
