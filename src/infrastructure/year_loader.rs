//! CSV loader for the VIN position-11 model-year table
//!
//! The file is headerless, two columns per row: year code character, model
//! year. The upstream source starts with a UTF-8 BOM, which would otherwise
//! corrupt the first code.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use encoding_rs::UTF_8;

use crate::error::{Error, Result};
use crate::reference::ModelYearTable;

/// Load the model-year lookup table
pub fn load_model_year_table(path: &Path) -> Result<ModelYearTable> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    let (decoded, _, _) = UTF_8.decode(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(decoded.as_bytes());

    let mut codes = HashMap::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 1;

        let code_field = record.get(0).unwrap_or("");
        let mut chars = code_field.chars();
        let code = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(Error::Reference(format!(
                    "row {}: year code must be a single character, got {:?}",
                    row_num, code_field
                )))
            }
        };

        let year = record.get(1).unwrap_or("").to_string();
        if year.is_empty() {
            return Err(Error::Reference(format!("row {} has an empty year", row_num)));
        }

        codes.insert(code, year);
    }

    Ok(ModelYearTable::new(codes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_model_year_table() {
        let file = write_temp(b"L,2020\nM,2021\nN,2022\n");
        let table = load_model_year_table(file.path()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.year_for_code('M').unwrap(), "2021");
    }

    #[test]
    fn test_bom_does_not_corrupt_first_code() {
        let file = write_temp(b"\xEF\xBB\xBFL,2020\nM,2021\n");
        let table = load_model_year_table(file.path()).unwrap();
        assert_eq!(table.year_for_code('L').unwrap(), "2020");
    }

    #[test]
    fn test_multi_character_code_rejected() {
        let file = write_temp(b"LM,2020\n");
        let err = load_model_year_table(file.path()).unwrap_err();
        assert!(matches!(err, Error::Reference(_)));
    }

    #[test]
    fn test_unknown_code_is_lookup_miss() {
        let file = write_temp(b"L,2020\n");
        let table = load_model_year_table(file.path()).unwrap();
        assert!(matches!(
            table.year_for_code('Z'),
            Err(Error::UnknownYearCode('Z'))
        ));
    }
}
