//! Single vehicle identified by a full or partial VIN

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::reference::ModelYearTable;
use crate::types::DecodedVin;
use crate::vpic::SingleVinDecoder;

/// One vehicle, identified by a 17-character VIN or its last 8 characters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    vin: String,
    full_vin: bool,
}

/// Structured decode result, rendered separately by the output layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VehicleDecode {
    /// Remote decode of a full VIN
    Full(DecodedVin),
    /// Year-only local lookup for a partial VIN
    Partial { vin: String, model_year: String },
}

impl Vehicle {
    /// Construct from a full (17) or partial (8) VIN; other lengths fail
    pub fn new(vin: &str) -> Result<Self> {
        match vin.chars().count() {
            17 => Ok(Self {
                vin: vin.to_string(),
                full_vin: true,
            }),
            8 => Ok(Self {
                vin: vin.to_string(),
                full_vin: false,
            }),
            n => Err(Error::InvalidInput(format!(
                "enter a partial (last 8 characters) or full (17 characters) VIN, got {} characters",
                n
            ))),
        }
    }

    pub fn vin(&self) -> &str {
        &self.vin
    }

    pub fn is_full(&self) -> bool {
        self.full_vin
    }

    /// Decode this vehicle: remote decode for a full VIN, year-code lookup
    /// for a partial one
    pub fn decode(
        &self,
        decoder: &impl SingleVinDecoder,
        years: &ModelYearTable,
    ) -> Result<VehicleDecode> {
        if self.full_vin {
            return Ok(VehicleDecode::Full(decoder.decode_vin(&self.vin)?));
        }

        // The leading character of a partial VIN is the model year code
        let code = self
            .vin
            .chars()
            .next()
            .ok_or_else(|| Error::InvalidInput("empty VIN".to_string()))?;
        Ok(VehicleDecode::Partial {
            vin: self.vin.clone(),
            model_year: years.year_for_code(code)?.to_string(),
        })
    }
}
