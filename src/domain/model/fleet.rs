//! Fleet of full VINs and report assembly

use crate::error::{Error, Result};
use crate::reference::ReferenceData;
use crate::types::{FleetReport, Make, ReportRow};
use crate::vpic::BatchVinDecoder;

/// Service interval added to the current mileage for the next sticker
const SERVICE_INTERVAL_MILES: u32 = 5000;

/// A list of vehicles reported on together
#[derive(Debug, Clone)]
pub struct Fleet {
    vins: Vec<String>,
}

impl Fleet {
    pub fn new(vins: Vec<String>) -> Self {
        Self { vins }
    }

    pub fn vins(&self) -> &[String] {
        &self.vins
    }

    pub fn len(&self) -> usize {
        self.vins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vins.is_empty()
    }

    /// Build the fleet report: one row per VIN in input order.
    ///
    /// `mileage`, when given, must align 1:1 with the VIN list and adds the
    /// Miles / Sticker Miles columns. `reference`, when given, adds the Oil
    /// Capacity / Oil Filter columns from the local spec tables.
    ///
    /// All input validation happens before the batch decode call so a bad
    /// list never reaches the network.
    pub fn build_report(
        &self,
        decoder: &impl BatchVinDecoder,
        mileage: Option<&[u32]>,
        reference: Option<&ReferenceData>,
    ) -> Result<FleetReport> {
        if let Some(miles) = mileage {
            if miles.len() != self.vins.len() {
                return Err(Error::InvalidInput(format!(
                    "mileage list has {} entries for {} VINs",
                    miles.len(),
                    self.vins.len()
                )));
            }
        }

        for (i, vin) in self.vins.iter().enumerate() {
            if vin.chars().count() != 17 {
                return Err(Error::InvalidInput(format!(
                    "item {} is incomplete: fleet reports require full 17-character VINs",
                    i + 1
                )));
            }
        }

        let decoded = decoder.decode_batch(&self.vins)?;

        let mut rows = Vec::with_capacity(decoded.len());
        for (i, vehicle) in decoded.iter().enumerate() {
            let (miles, sticker_miles) = match mileage {
                Some(mileage) => {
                    let current = mileage[i];
                    let mut sticker = current + SERVICE_INTERVAL_MILES;
                    // Diesel engines run a doubled service interval
                    if vehicle.fuel_type == "Diesel" {
                        sticker += SERVICE_INTERVAL_MILES;
                    }
                    (Some(current), Some(sticker))
                }
                None => (None, None),
            };

            let (oil_capacity, oil_filter) = match reference {
                Some(reference) => {
                    let make = Make::from_decoded(&vehicle.make)?;
                    let spec = reference.spec_for(make, &vehicle.displacement())?;
                    (Some(spec.capacity.clone()), Some(spec.filter.clone()))
                }
                None => (None, None),
            };

            rows.push(ReportRow {
                vehicle: vehicle.description(),
                fuel_type: vehicle.fuel_type.clone(),
                miles,
                sticker_miles,
                oil_capacity,
                oil_filter,
            });
        }

        Ok(FleetReport {
            rows,
            has_mileage: mileage.is_some(),
            has_specs: reference.is_some(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{ModelYearTable, SpecTable};
    use crate::types::{BatchDecodedVehicle, OilSpec};
    use std::cell::Cell;
    use std::collections::HashMap;

    struct StubDecoder {
        results: Vec<BatchDecodedVehicle>,
        calls: Cell<usize>,
    }

    impl StubDecoder {
        fn new(results: Vec<BatchDecodedVehicle>) -> Self {
            Self {
                results,
                calls: Cell::new(0),
            }
        }
    }

    impl BatchVinDecoder for StubDecoder {
        fn decode_batch(&self, _vins: &[String]) -> Result<Vec<BatchDecodedVehicle>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.results.clone())
        }
    }

    fn vehicle(vin: &str, make: &str, displacement_l: &str, fuel: &str) -> BatchDecodedVehicle {
        BatchDecodedVehicle {
            vin: vin.to_string(),
            model_year: "2021".to_string(),
            make: make.to_string(),
            model: "Frontier".to_string(),
            displacement_l: displacement_l.to_string(),
            fuel_type: fuel.to_string(),
        }
    }

    fn sample_vins() -> Vec<String> {
        vec![
            "1N6ED0CE5MN706792".to_string(),
            "1FTBR1C8XLKA23395".to_string(),
        ]
    }

    fn reference_with(make: Make, displacement: &str) -> ReferenceData {
        let mut entries = HashMap::new();
        entries.insert(
            displacement.to_string(),
            OilSpec {
                capacity: "5.4 qt".to_string(),
                filter: "15208-65F0E".to_string(),
            },
        );
        let mut specs = HashMap::new();
        specs.insert(make, SpecTable::new(entries));
        ReferenceData::from_parts(specs, ModelYearTable::new(HashMap::new()))
    }

    #[test]
    fn test_report_base_columns() {
        let decoder = StubDecoder::new(vec![
            vehicle("1N6ED0CE5MN706792", "NISSAN", "3.8", "Gasoline"),
            vehicle("1FTBR1C8XLKA23395", "FORD", "3.5", "Gasoline"),
        ]);
        let report = Fleet::new(sample_vins())
            .build_report(&decoder, None, None)
            .unwrap();

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.headers(), vec!["Vehicle", "Fuel Type"]);
        assert_eq!(report.rows[0].vehicle, "2021 NISSAN Frontier 3.8L");
        assert!(report.rows[0].miles.is_none());
        assert!(report.rows[0].oil_capacity.is_none());
    }

    #[test]
    fn test_sticker_mileage_rule() {
        let decoder = StubDecoder::new(vec![
            vehicle("1N6ED0CE5MN706792", "NISSAN", "3.8", "Gasoline"),
            vehicle("1FTBR1C8XLKA23395", "FORD", "3.5", "Diesel"),
        ]);
        let report = Fleet::new(sample_vins())
            .build_report(&decoder, Some(&[38346, 83014]), None)
            .unwrap();

        assert_eq!(report.rows[0].miles, Some(38346));
        assert_eq!(report.rows[0].sticker_miles, Some(43346));
        // Diesel gets the doubled interval
        assert_eq!(report.rows[1].sticker_miles, Some(93014));
    }

    #[test]
    fn test_short_vin_fails_before_decode() {
        let decoder = StubDecoder::new(Vec::new());
        let vins = vec![
            "1N6ED0CE5MN706792".to_string(),
            "1FTBR1C8XLKA2339".to_string(), // 16 characters
        ];
        let err = Fleet::new(vins)
            .build_report(&decoder, None, None)
            .unwrap_err();

        match err {
            Error::InvalidInput(msg) => assert!(msg.contains("item 2")),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
        assert_eq!(decoder.calls.get(), 0);
    }

    #[test]
    fn test_misaligned_mileage_fails_before_decode() {
        let decoder = StubDecoder::new(Vec::new());
        let err = Fleet::new(sample_vins())
            .build_report(&decoder, Some(&[38346]), None)
            .unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(decoder.calls.get(), 0);
    }

    #[test]
    fn test_spec_enrichment() {
        let decoder = StubDecoder::new(vec![vehicle(
            "1GCEC19038Z293325",
            "CHEVROLET",
            "5.3",
            "Gasoline",
        )]);
        let reference = reference_with(Make::Chevrolet, "5.3L");
        let report = Fleet::new(vec!["1GCEC19038Z293325".to_string()])
            .build_report(&decoder, None, Some(&reference))
            .unwrap();

        assert_eq!(report.rows[0].oil_capacity.as_deref(), Some("5.4 qt"));
        assert_eq!(report.rows[0].oil_filter.as_deref(), Some("15208-65F0E"));
        assert_eq!(
            report.headers(),
            vec!["Vehicle", "Fuel Type", "Oil Capacity", "Oil Filter"]
        );
    }

    #[test]
    fn test_unsupported_make_is_fatal() {
        let decoder = StubDecoder::new(vec![vehicle(
            "1N6ED0CE5MN706792",
            "TOYOTA",
            "3.5",
            "Gasoline",
        )]);
        let reference = reference_with(Make::Chevrolet, "5.3L");
        let err = Fleet::new(vec!["1N6ED0CE5MN706792".to_string()])
            .build_report(&decoder, None, Some(&reference))
            .unwrap_err();

        assert!(matches!(err, Error::UnsupportedMake(_)));
    }

    #[test]
    fn test_unknown_displacement_is_fatal() {
        let decoder = StubDecoder::new(vec![vehicle(
            "1GCEC19038Z293325",
            "CHEVROLET",
            "9.9",
            "Gasoline",
        )]);
        let reference = reference_with(Make::Chevrolet, "5.3L");
        let err = Fleet::new(vec!["1GCEC19038Z293325".to_string()])
            .build_report(&decoder, None, Some(&reference))
            .unwrap_err();

        assert!(matches!(err, Error::UnknownDisplacement { .. }));
    }
}
