//! In-memory reference data: oil spec tables and the model-year code table
//!
//! Loaded once at startup from the data directory and read-only afterward.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::infrastructure::{load_model_year_table, load_spec_table};
use crate::types::{Make, OilSpec};

/// File name of the VIN position-11 model-year table
pub const MODEL_YEAR_FILE: &str = "vin_11_char.csv";

/// Displacement-keyed oil spec table for one make
#[derive(Debug, Clone, Default)]
pub struct SpecTable {
    entries: HashMap<String, OilSpec>,
}

impl SpecTable {
    pub fn new(entries: HashMap<String, OilSpec>) -> Self {
        Self { entries }
    }

    /// Look up the spec for a displacement string such as "5.3L"
    pub fn get(&self, displacement: &str) -> Option<&OilSpec> {
        self.entries.get(displacement)
    }

    pub fn displacements(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Model-year lookup keyed by the VIN position-11 character
#[derive(Debug, Clone, Default)]
pub struct ModelYearTable {
    codes: HashMap<char, String>,
}

impl ModelYearTable {
    pub fn new(codes: HashMap<char, String>) -> Self {
        Self { codes }
    }

    /// Resolve a year code to its model year string
    pub fn year_for_code(&self, code: char) -> Result<&str> {
        self.codes
            .get(&code)
            .map(|y| y.as_str())
            .ok_or(Error::UnknownYearCode(code))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// All reference tables, loaded once per process
#[derive(Debug, Clone)]
pub struct ReferenceData {
    specs: HashMap<Make, SpecTable>,
    model_years: ModelYearTable,
}

impl ReferenceData {
    /// Load the four make spec tables and the model-year table from a directory
    pub fn load(dir: &Path) -> Result<Self> {
        let mut specs = HashMap::new();
        for make in Make::ALL {
            let table = load_spec_table(&dir.join(make.spec_file_name()))?;
            specs.insert(make, table);
        }
        let model_years = load_model_year_table(&dir.join(MODEL_YEAR_FILE))?;
        Ok(Self { specs, model_years })
    }

    pub fn from_parts(specs: HashMap<Make, SpecTable>, model_years: ModelYearTable) -> Self {
        Self { specs, model_years }
    }

    pub fn spec_table(&self, make: Make) -> Option<&SpecTable> {
        self.specs.get(&make)
    }

    /// Look up the oil spec for a make and displacement string
    pub fn spec_for(&self, make: Make, displacement: &str) -> Result<&OilSpec> {
        self.specs
            .get(&make)
            .and_then(|table| table.get(displacement))
            .ok_or_else(|| Error::UnknownDisplacement {
                make: make.label().to_string(),
                displacement: displacement.to_string(),
            })
    }

    pub fn model_years(&self) -> &ModelYearTable {
        &self.model_years
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reference() -> ReferenceData {
        let mut chevrolet = HashMap::new();
        chevrolet.insert(
            "5.3L".to_string(),
            OilSpec {
                capacity: "8.0 qt".to_string(),
                filter: "PF63E".to_string(),
            },
        );
        let mut specs = HashMap::new();
        specs.insert(Make::Chevrolet, SpecTable::new(chevrolet));

        let mut codes = HashMap::new();
        codes.insert('M', "2021".to_string());
        codes.insert('L', "2020".to_string());

        ReferenceData::from_parts(specs, ModelYearTable::new(codes))
    }

    #[test]
    fn test_spec_for_hit() {
        let reference = sample_reference();
        let spec = reference.spec_for(Make::Chevrolet, "5.3L").unwrap();
        assert_eq!(spec.capacity, "8.0 qt");
        assert_eq!(spec.filter, "PF63E");
    }

    #[test]
    fn test_spec_for_unknown_displacement() {
        let reference = sample_reference();
        let err = reference.spec_for(Make::Chevrolet, "9.9L").unwrap_err();
        assert!(matches!(err, Error::UnknownDisplacement { .. }));
    }

    #[test]
    fn test_spec_for_make_without_table() {
        let reference = sample_reference();
        // Ford has no table in this fixture, so every displacement misses
        let err = reference.spec_for(Make::Ford, "5.3L").unwrap_err();
        assert!(matches!(err, Error::UnknownDisplacement { .. }));
    }

    #[test]
    fn test_year_for_code() {
        let reference = sample_reference();
        assert_eq!(reference.model_years().year_for_code('M').unwrap(), "2021");
        assert!(matches!(
            reference.model_years().year_for_code('?'),
            Err(Error::UnknownYearCode('?'))
        ));
    }
}
