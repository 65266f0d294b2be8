//! Front-end projection
//!
//! Converts a persisted payload into the shape the form journey consumes.
//! Projection is pure: it never writes back to the store, it only reports
//! what normalization it applied so the caller can decide whether to
//! persist the result.

pub mod address;
pub mod clone;
pub mod weight;

pub use address::migrate_plant_address;
pub use clone::{assign_line_ids, clone_document, generate_document_number};
pub use weight::{backfill_total_weights, format_weight};

use crate::adapters::reference::SourceProductLookup;
use crate::core::rules::dates::{parse_display_date, validate_today_or_in_the_past_from};
use crate::domain::draft::ExportPayload;
use crate::domain::validation::ValidationError;
use chrono::NaiveDate;
use serde::Serialize;

/// Payload as served to the form journey
///
/// Serializes flat: the journey payload's own fields at the top level, the
/// address-migration marker only when a migration happened, and any
/// projection-time validation errors.
#[derive(Debug, Clone, Serialize)]
pub struct FrontEndView {
    #[serde(flatten)]
    pub payload: ExportPayload,

    /// Set when a legacy plant address was normalized during projection
    #[serde(rename = "_addressLayoutUpdated", skip_serializing_if = "std::ops::Not::not")]
    pub address_layout_updated: bool,

    /// Projection-time validation errors, insertion order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

/// Projects a payload for the form journey
///
/// Processing statements get the full treatment: legacy address migration,
/// landed-weight backfill from source products, and a health certificate
/// date check. Storage documents pass through unchanged. `today` anchors
/// the date check.
pub fn to_front_end(
    payload: &ExportPayload,
    sources: &dyn SourceProductLookup,
    today: NaiveDate,
) -> FrontEndView {
    let mut projected = payload.clone();
    let mut address_layout_updated = false;
    let mut errors = Vec::new();

    if let ExportPayload::ProcessingStatement(data) = &mut projected {
        let (plant, updated) = migrate_plant_address(&data.plant);
        data.plant = plant;
        address_layout_updated = updated;

        backfill_total_weights(&mut data.catches, sources);

        if let Some(date) = data.health_certificate_date.as_deref() {
            let valid = parse_display_date(date)
                .map(|parsed| validate_today_or_in_the_past_from(parsed, today))
                .unwrap_or(false);
            if !valid {
                errors.push(ValidationError::new(
                    "dateValidationError",
                    "Health certificate date is not a valid date",
                ));
                errors.push(ValidationError::new(
                    "dateFieldError",
                    "Health certificate date must be today or in the past",
                ));
            }
        }
    }

    FrontEndView {
        payload: projected,
        address_layout_updated,
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::reference::{
        CompletedDocumentIndex, CompletedDocumentSnapshot, SourceProduct,
    };
    use crate::domain::draft::{
        CatchEntry, CertificateType, PlantDetails, ProcessingStatementData, StorageDocumentData,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn sources() -> CompletedDocumentIndex {
        CompletedDocumentIndex::new(vec![CompletedDocumentSnapshot {
            certificate_number: "GBR-2022-CC-0123456789".to_string(),
            owner: "user-1".to_string(),
            completed: true,
            products: vec![SourceProduct {
                species: "Atlantic cod (COD)".to_string(),
                species_code: Some("COD".to_string()),
                total_weight: 40.0,
            }],
        }])
    }

    fn legacy_statement() -> ExportPayload {
        ExportPayload::ProcessingStatement(ProcessingStatementData {
            catches: vec![CatchEntry {
                id: None,
                catch_certificate_number: "GBR-2022-CC-0123456789".to_string(),
                catch_certificate_type: CertificateType::Uk,
                species: "Atlantic cod (COD)".to_string(),
                species_code: Some("COD".to_string()),
                scientific_name: None,
                total_weight_landed: None,
                export_weight_before_processing: None,
                export_weight_after_processing: None,
            }],
            health_certificate_date: Some("2024-02-28".to_string()),
            plant: PlantDetails {
                plant_name: Some("North Quay Processors".to_string()),
                plant_address_one: Some("1 Harbour Road".to_string()),
                plant_town_city: Some("Grimsby".to_string()),
                plant_postcode: Some("DN31 3LL".to_string()),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    #[test]
    fn test_projection_migrates_and_backfills() {
        let payload = legacy_statement();
        let view = to_front_end(&payload, &sources(), today());

        assert!(view.address_layout_updated);
        assert!(view.errors.is_empty());

        let ExportPayload::ProcessingStatement(data) = &view.payload else {
            panic!("journey changed during projection");
        };
        assert_eq!(data.plant.plant_address_one.as_deref(), Some(""));
        assert_eq!(data.catches[0].total_weight_landed.as_deref(), Some("40"));
    }

    #[test]
    fn test_projection_never_mutates_input() {
        let payload = legacy_statement();
        let before = payload.clone();
        let _ = to_front_end(&payload, &sources(), today());
        assert_eq!(payload, before);
    }

    #[test]
    fn test_invalid_date_appends_both_errors_in_order() {
        let mut payload = legacy_statement();
        if let ExportPayload::ProcessingStatement(data) = &mut payload {
            data.health_certificate_date = Some("not-a-date".to_string());
        }

        let view = to_front_end(&payload, &sources(), today());
        let keys: Vec<&str> = view.errors.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["dateValidationError", "dateFieldError"]);
    }

    #[test]
    fn test_future_date_rejected() {
        let mut payload = legacy_statement();
        if let ExportPayload::ProcessingStatement(data) = &mut payload {
            data.health_certificate_date = Some("2024-03-02".to_string());
        }

        let view = to_front_end(&payload, &sources(), today());
        assert_eq!(view.errors.len(), 2);
    }

    #[test]
    fn test_storage_document_passes_through() {
        let payload = ExportPayload::StorageDocument(StorageDocumentData::default());
        let view = to_front_end(&payload, &sources(), today());

        assert!(!view.address_layout_updated);
        assert!(view.errors.is_empty());
        assert_eq!(view.payload, payload);
    }

    #[test]
    fn test_serialized_view_is_flat() {
        let view = to_front_end(&legacy_statement(), &sources(), today());
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["journeyType"], "processingStatement");
        assert_eq!(json["_addressLayoutUpdated"], true);
        assert!(json.get("payload").is_none());
        assert!(json.get("errors").is_none());
    }
}
