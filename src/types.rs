//! Core types for VIN decoding and fleet reporting

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Manufacturers with a local oil spec table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Make {
    Chevrolet,
    Ford,
    Gm,
    Nissan,
}

impl Make {
    pub const ALL: [Make; 4] = [Make::Chevrolet, Make::Ford, Make::Gm, Make::Nissan];

    /// Resolve a decoded make string to a supported manufacturer
    pub fn from_decoded(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "CHEVROLET" => Ok(Make::Chevrolet),
            "FORD" => Ok(Make::Ford),
            "GM" => Ok(Make::Gm),
            "NISSAN" => Ok(Make::Nissan),
            other => Err(Error::UnsupportedMake(other.to_string())),
        }
    }

    /// Display label matching the vPIC make spelling
    pub fn label(&self) -> &'static str {
        match self {
            Make::Chevrolet => "CHEVROLET",
            Make::Ford => "FORD",
            Make::Gm => "GM",
            Make::Nissan => "NISSAN",
        }
    }

    /// File name of this make's spec table inside the data directory
    pub fn spec_file_name(&self) -> &'static str {
        match self {
            Make::Chevrolet => "chevrolet_specs.csv",
            Make::Ford => "ford_specs.csv",
            Make::Gm => "gm_specs.csv",
            Make::Nissan => "nissan_specs.csv",
        }
    }
}

impl std::fmt::Display for Make {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Single-VIN decode result from the DecodeVin endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedVin {
    /// The VIN that was decoded
    pub vin: String,
    /// VIN check text reported by the service (empty when the VIN is clean)
    pub vin_check: String,
    pub make: String,
    pub model: String,
    pub model_year: String,
    /// Engine displacement in cubic centimeters
    pub displacement_cc: String,
    /// Engine displacement in cubic inches
    pub displacement_ci: String,
}

/// Per-vehicle result from the batch DecodeVinValuesBatch endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchDecodedVehicle {
    pub vin: String,
    pub model_year: String,
    pub make: String,
    pub model: String,
    /// Engine displacement in liters, without unit suffix (e.g. "5.3")
    pub displacement_l: String,
    pub fuel_type: String,
}

impl BatchDecodedVehicle {
    /// Displacement with the canonical unit suffix, e.g. "5.3L"
    pub fn displacement(&self) -> String {
        format!("{}L", self.displacement_l)
    }

    /// Free-text vehicle description, e.g. "2021 NISSAN Frontier 3.8L"
    pub fn description(&self) -> String {
        format!(
            "{} {} {} {}",
            self.model_year,
            self.make,
            self.model,
            self.displacement()
        )
    }
}

/// Oil capacity and filter part for one engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OilSpec {
    pub capacity: String,
    pub filter: String,
}

/// One row of a fleet report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    pub vehicle: String,
    pub fuel_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miles: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticker_miles: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oil_capacity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oil_filter: Option<String>,
}

/// Fleet report, one row per input VIN in input order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetReport {
    pub rows: Vec<ReportRow>,
    pub has_mileage: bool,
    pub has_specs: bool,
}

impl FleetReport {
    /// Column headers matching the report shape
    pub fn headers(&self) -> Vec<&'static str> {
        let mut headers = vec!["Vehicle", "Fuel Type"];
        if self.has_mileage {
            headers.extend(["Miles", "Sticker Miles"]);
        }
        if self.has_specs {
            headers.extend(["Oil Capacity", "Oil Filter"]);
        }
        headers
    }

    /// Cells of one row, in header order
    pub fn row_cells(&self, row: &ReportRow) -> Vec<String> {
        let mut cells = vec![row.vehicle.clone(), row.fuel_type.clone()];
        if self.has_mileage {
            cells.push(row.miles.map(|m| m.to_string()).unwrap_or_default());
            cells.push(row.sticker_miles.map(|m| m.to_string()).unwrap_or_default());
        }
        if self.has_specs {
            cells.push(row.oil_capacity.clone().unwrap_or_default());
            cells.push(row.oil_filter.clone().unwrap_or_default());
        }
        cells
    }
}
