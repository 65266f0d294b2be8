//! Landed-weight backfill
//!
//! Catch lines referencing a domestic certificate may predate the capture of
//! `totalWeightLanded`. Projection fills the gap from the source document's
//! cached products so the form journey never shows an empty landed weight
//! for a line the system can resolve.

use crate::adapters::reference::SourceProductLookup;
use crate::domain::draft::CatchEntry;

/// Formats a landed weight for display
///
/// Integral values drop the fraction entirely (`25.0` becomes `25`); anything
/// else is fixed to two decimals, which also flattens float noise
/// (`0.30000000000000004` becomes `0.30`).
pub fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{}", weight as i64)
    } else {
        format!("{weight:.2}")
    }
}

/// Backfills missing landed weights from source-document products
///
/// Only lines on a domestic certificate with no landed weight are candidates.
/// A source product matches on exact species name, or on species code when
/// both sides carry one. Lines whose certificate has no cached products are
/// left as they are.
///
/// Returns how many lines were filled.
pub fn backfill_total_weights(
    catches: &mut [CatchEntry],
    sources: &dyn SourceProductLookup,
) -> usize {
    let mut filled = 0;

    for entry in catches.iter_mut() {
        if !entry.catch_certificate_type.is_domestic() || entry.total_weight_landed.is_some() {
            continue;
        }

        let Some(products) = sources.products_for(&entry.catch_certificate_number) else {
            continue;
        };

        let matched = products.iter().find(|product| {
            if product.species == entry.species {
                return true;
            }
            match (product.species_code.as_deref(), entry.species_code.as_deref()) {
                (Some(a), Some(b)) => !a.is_empty() && a == b,
                _ => false,
            }
        });

        if let Some(product) = matched {
            entry.total_weight_landed = Some(format_weight(product.total_weight));
            filled += 1;
        }
    }

    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::reference::{
        CompletedDocumentIndex, CompletedDocumentSnapshot, SourceProduct,
    };
    use crate::domain::draft::CertificateType;
    use test_case::test_case;

    #[test_case(25.0, "25"; "integral drops fraction")]
    #[test_case(0.3, "0.30"; "fraction fixed to two decimals")]
    #[test_case(0.30000000000000004, "0.30"; "float noise flattened")]
    #[test_case(12.345, "12.35"; "rounds half up")]
    #[test_case(0.0, "0"; "zero")]
    fn test_format_weight(weight: f64, expected: &str) {
        assert_eq!(format_weight(weight), expected);
    }

    fn sources() -> CompletedDocumentIndex {
        CompletedDocumentIndex::new(vec![CompletedDocumentSnapshot {
            certificate_number: "GBR-2022-CC-0123456789".to_string(),
            owner: "user-1".to_string(),
            completed: true,
            products: vec![
                SourceProduct {
                    species: "Atlantic cod (COD)".to_string(),
                    species_code: Some("COD".to_string()),
                    total_weight: 40.0,
                },
                SourceProduct {
                    species: "Haddock (HAD)".to_string(),
                    species_code: Some("HAD".to_string()),
                    total_weight: 0.3,
                },
            ],
        }])
    }

    fn entry(species: &str, code: Option<&str>) -> CatchEntry {
        CatchEntry {
            id: None,
            catch_certificate_number: "GBR-2022-CC-0123456789".to_string(),
            catch_certificate_type: CertificateType::Uk,
            species: species.to_string(),
            species_code: code.map(str::to_string),
            scientific_name: None,
            total_weight_landed: None,
            export_weight_before_processing: None,
            export_weight_after_processing: None,
        }
    }

    #[test]
    fn test_backfill_by_species_name() {
        let mut catches = vec![entry("Atlantic cod (COD)", None)];
        let filled = backfill_total_weights(&mut catches, &sources());

        assert_eq!(filled, 1);
        assert_eq!(catches[0].total_weight_landed.as_deref(), Some("40"));
    }

    #[test]
    fn test_backfill_by_species_code() {
        // Name differs, code matches
        let mut catches = vec![entry("Haddock", Some("HAD"))];
        let filled = backfill_total_weights(&mut catches, &sources());

        assert_eq!(filled, 1);
        assert_eq!(catches[0].total_weight_landed.as_deref(), Some("0.30"));
    }

    #[test]
    fn test_species_match_is_case_sensitive() {
        let mut catches = vec![entry("atlantic cod (cod)", None)];
        let filled = backfill_total_weights(&mut catches, &sources());

        assert_eq!(filled, 0);
        assert!(catches[0].total_weight_landed.is_none());
    }

    #[test]
    fn test_existing_weight_not_overwritten() {
        let mut catches = vec![entry("Atlantic cod (COD)", None)];
        catches[0].total_weight_landed = Some("12.50".to_string());

        let filled = backfill_total_weights(&mut catches, &sources());
        assert_eq!(filled, 0);
        assert_eq!(catches[0].total_weight_landed.as_deref(), Some("12.50"));
    }

    #[test]
    fn test_foreign_certificate_skipped() {
        let mut catches = vec![entry("Atlantic cod (COD)", None)];
        catches[0].catch_certificate_type = CertificateType::NonUk;

        let filled = backfill_total_weights(&mut catches, &sources());
        assert_eq!(filled, 0);
        assert!(catches[0].total_weight_landed.is_none());
    }

    #[test]
    fn test_unknown_certificate_left_alone() {
        let mut catches = vec![entry("Atlantic cod (COD)", None)];
        catches[0].catch_certificate_number = "GBR-0000".to_string();

        let filled = backfill_total_weights(&mut catches, &sources());
        assert_eq!(filled, 0);
        assert!(catches[0].total_weight_landed.is_none());
    }

    #[test]
    fn test_empty_codes_never_match() {
        let mut catches = vec![entry("Unknown species", Some(""))];
        let filled = backfill_total_weights(&mut catches, &sources());
        assert_eq!(filled, 0);
    }
}
