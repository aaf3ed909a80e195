//! Domain module containing core business types

pub mod model;

pub use model::*;
