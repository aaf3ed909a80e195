//! CSV loader for make-specific oil spec tables
//!
//! Expected header: Make,Model,Displacement,Capacity,Filter. Files may carry
//! a UTF-8 BOM, so bytes are decoded through encoding_rs before parsing.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use encoding_rs::UTF_8;

use crate::error::{Error, Result};
use crate::reference::SpecTable;
use crate::types::OilSpec;

/// Load one make's spec table, keyed by displacement string (e.g. "5.3L")
pub fn load_spec_table(path: &Path) -> Result<SpecTable> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    // Strips the BOM and replaces any invalid sequences
    let (decoded, _, _) = UTF_8.decode(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(decoded.as_bytes());

    let headers = reader.headers()?.clone();
    validate_headers(&headers)?;

    let mut entries = HashMap::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 2; // header is row 1

        let displacement = record.get(2).unwrap_or("").to_string();
        let capacity = record.get(3).unwrap_or("").to_string();
        let filter = record.get(4).unwrap_or("").to_string();

        if displacement.is_empty() {
            return Err(Error::Reference(format!(
                "row {} has an empty displacement",
                row_num
            )));
        }

        entries.insert(displacement, OilSpec { capacity, filter });
    }

    Ok(SpecTable::new(entries))
}

fn validate_headers(headers: &csv::StringRecord) -> Result<()> {
    let required = ["Make", "Model", "Displacement", "Capacity", "Filter"];

    for col in required {
        if !headers.iter().any(|h| h == col) {
            return Err(Error::Reference(format!("missing required column: {}", col)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TEST_CSV: &str = "\
Make,Model,Displacement,Capacity,Filter
CHEVROLET,Silverado,5.3L,8.0 qt,PF63E
CHEVROLET,Colorado,3.6L,6.0 qt,PF66
";

    fn write_temp(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_spec_table() {
        let file = write_temp(TEST_CSV.as_bytes());
        let table = load_spec_table(file.path()).unwrap();
        assert_eq!(table.len(), 2);

        let spec = table.get("5.3L").unwrap();
        assert_eq!(spec.capacity, "8.0 qt");
        assert_eq!(spec.filter, "PF63E");
    }

    #[test]
    fn test_load_spec_table_with_bom() {
        let mut contents = vec![0xEF, 0xBB, 0xBF];
        contents.extend_from_slice(TEST_CSV.as_bytes());
        let file = write_temp(&contents);

        let table = load_spec_table(file.path()).unwrap();
        assert!(table.get("3.6L").is_some());
    }

    #[test]
    fn test_missing_column() {
        let file = write_temp(b"Make,Model,Displacement\nCHEVROLET,Silverado,5.3L\n");
        let err = load_spec_table(file.path()).unwrap_err();
        assert!(matches!(err, Error::Reference(_)));
    }

    #[test]
    fn test_every_loaded_key_resolves() {
        let file = write_temp(TEST_CSV.as_bytes());
        let table = load_spec_table(file.path()).unwrap();
        let displacements: Vec<String> =
            table.displacements().map(|d| d.to_string()).collect();
        for displacement in displacements {
            assert!(table.get(&displacement).is_some());
        }
    }
}
