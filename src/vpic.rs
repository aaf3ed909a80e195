//! NHTSA vPIC decode API client
//!
//! Two endpoints are used: DecodeVin (GET, one VIN) and DecodeVinValuesBatch
//! (POST, semicolon-joined VINs). Both are one-shot blocking calls; transport
//! failures and malformed payloads propagate to the caller.

use std::collections::HashMap;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{BatchDecodedVehicle, DecodedVin};

pub const DEFAULT_BASE_URL: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";

/// Single-VIN decoding seam
pub trait SingleVinDecoder {
    fn decode_vin(&self, vin: &str) -> Result<DecodedVin>;
}

/// Batch decoding seam, stubbed in tests
pub trait BatchVinDecoder {
    fn decode_batch(&self, vins: &[String]) -> Result<Vec<BatchDecodedVehicle>>;
}

/// Blocking client for the vPIC API
pub struct VpicClient {
    client: Client,
    base_url: String,
}

impl VpicClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for VpicClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl SingleVinDecoder for VpicClient {
    fn decode_vin(&self, vin: &str) -> Result<DecodedVin> {
        let url = format!("{}/DecodeVin/{}?format=json", self.base_url, vin);
        let response: DecodeVinResponse = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .json()?;
        parse_decode_vin(vin, response)
    }
}

impl BatchVinDecoder for VpicClient {
    fn decode_batch(&self, vins: &[String]) -> Result<Vec<BatchDecodedVehicle>> {
        let url = format!("{}/DecodeVinValuesBatch/", self.base_url);
        let payload = batch_payload(vins);
        let response: BatchResponse = self
            .client
            .post(&url)
            .form(&[("format", "json"), ("data", payload.as_str())])
            .send()?
            .error_for_status()?
            .json()?;
        parse_batch(vins, response)
    }
}

/// Semicolon-joined batch payload, no trailing separator
pub fn batch_payload(vins: &[String]) -> String {
    vins.join(";")
}

#[derive(Debug, Deserialize)]
struct DecodeVinResponse {
    #[serde(rename = "Results")]
    results: Option<Vec<DecodeVinEntry>>,
}

#[derive(Debug, Deserialize)]
struct DecodeVinEntry {
    #[serde(rename = "Variable")]
    variable: Option<String>,
    #[serde(rename = "Value")]
    value: Option<String>,
}

fn parse_decode_vin(vin: &str, response: DecodeVinResponse) -> Result<DecodedVin> {
    let results = response.results.ok_or_else(|| {
        Error::MalformedResponse("decode response is missing the Results key".to_string())
    })?;

    let mut values: HashMap<String, String> = HashMap::new();
    for entry in results {
        if let Some(variable) = entry.variable {
            values.insert(variable, entry.value.unwrap_or_default());
        }
    }

    Ok(DecodedVin {
        vin: vin.to_string(),
        vin_check: variable_value(&values, "Error Text")?,
        make: variable_value(&values, "Make")?,
        model: variable_value(&values, "Model")?,
        model_year: variable_value(&values, "Model Year")?,
        displacement_cc: variable_value(&values, "Displacement (CC)")?,
        displacement_ci: variable_value(&values, "Displacement (CI)")?,
    })
}

fn variable_value(values: &HashMap<String, String>, name: &str) -> Result<String> {
    values.get(name).cloned().ok_or_else(|| {
        Error::MalformedResponse(format!("decode response has no {:?} variable", name))
    })
}

#[derive(Debug, Deserialize)]
struct BatchResponse {
    #[serde(rename = "Results")]
    results: Option<Vec<BatchEntry>>,
}

#[derive(Debug, Default, Deserialize)]
struct BatchEntry {
    #[serde(rename = "VIN", default)]
    vin: Option<String>,
    #[serde(rename = "ModelYear", default)]
    model_year: Option<String>,
    #[serde(rename = "Make", default)]
    make: Option<String>,
    #[serde(rename = "Model", default)]
    model: Option<String>,
    #[serde(rename = "DisplacementL", default)]
    displacement_l: Option<String>,
    #[serde(rename = "FuelTypePrimary", default)]
    fuel_type: Option<String>,
}

fn parse_batch(vins: &[String], response: BatchResponse) -> Result<Vec<BatchDecodedVehicle>> {
    let results = response.results.ok_or_else(|| {
        Error::MalformedResponse("batch response is missing the Results key".to_string())
    })?;

    if results.len() != vins.len() {
        return Err(Error::MalformedResponse(format!(
            "requested {} VINs but the response contains {} results",
            vins.len(),
            results.len()
        )));
    }

    results
        .into_iter()
        .zip(vins)
        .map(|(entry, vin)| {
            // A result that echoes a different VIN means the service reordered
            // or substituted entries, so positional matching is no longer safe
            if let Some(ref echoed) = entry.vin {
                if !echoed.is_empty() && echoed != vin {
                    return Err(Error::MalformedResponse(format!(
                        "result order mismatch: requested {} but got {}",
                        vin, echoed
                    )));
                }
            }
            Ok(BatchDecodedVehicle {
                vin: vin.clone(),
                model_year: entry.model_year.unwrap_or_default(),
                make: entry.make.unwrap_or_default(),
                model: entry.model.unwrap_or_default(),
                displacement_l: entry.displacement_l.unwrap_or_default(),
                fuel_type: entry.fuel_type.unwrap_or_default(),
            })
        })
        .collect()
}
