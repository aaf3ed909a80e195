//! Error types for vin-fleet

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown model year code: {0}")]
    UnknownYearCode(char),

    #[error("Unsupported make for spec lookup: {0}")]
    UnsupportedMake(String),

    #[error("No spec entry for {make} displacement {displacement}")]
    UnknownDisplacement { make: String, displacement: String },

    #[error("Malformed decode response: {0}")]
    MalformedResponse(String),

    #[error("Reference data error: {0}")]
    Reference(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
