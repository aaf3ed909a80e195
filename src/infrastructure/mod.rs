//! Infrastructure layer
//!
//! Loaders for the local reference tables consumed by the domain layer.

pub mod spec_loader;
pub mod year_loader;

pub use spec_loader::load_spec_table;
pub use year_loader::load_model_year_table;
