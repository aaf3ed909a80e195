//! VIN Fleet Library
//!
//! Decodes VINs via the NHTSA vPIC API, enriches results with local oil spec
//! tables, and builds fleet service reports exported to Excel.

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod infrastructure;
pub mod output;
pub mod reference;
pub mod types;
pub mod vpic;
