//! Data-hub submission records
//!
//! The data-submission hub consumes flat per-line rows rather than the
//! nested journey payload. One record is produced per catch or product
//! line, each repeating the document-level fields.

use crate::domain::draft::{Draft, ExportPayload};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One flattened line reported to the data-submission hub
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    /// Number of the submitted document
    pub document_number: String,

    /// Uppercase document type label
    pub document_type: String,

    /// Submission timestamp, document-level
    pub submitted_at: DateTime<Utc>,

    /// Source certificate number for the line
    pub certificate_number: String,

    /// Declared species name
    pub species: String,

    /// FAO species code, when the line carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species_code: Option<String>,

    /// Line weight; export weight for catches, product weight for products
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,

    /// Official name of the destination country, when declared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_country: Option<String>,

    /// Exporter company name, when declared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exporter_company_name: Option<String>,
}

/// Flattens a submitted draft into per-line hub records
///
/// Returns one record per catch or product line, in payload order. A draft
/// with no lines produces no records; the hub is simply not called.
pub fn build_submission_records(draft: &Draft, submitted_at: DateTime<Utc>) -> Vec<SubmissionRecord> {
    let document_number = draft.document_number.as_str().to_string();
    let document_type = draft.journey_type().label().to_string();
    let destination = draft
        .export_data
        .destination()
        .map(|country| country.official_country_name.clone());
    let exporter = draft
        .export_data
        .exporter()
        .and_then(|details| details.exporter_company_name.clone());

    let base = |certificate_number: String, species: String, species_code: Option<String>, weight: Option<String>| {
        SubmissionRecord {
            document_number: document_number.clone(),
            document_type: document_type.clone(),
            submitted_at,
            certificate_number,
            species,
            species_code,
            weight,
            destination_country: destination.clone(),
            exporter_company_name: exporter.clone(),
        }
    };

    match &draft.export_data {
        ExportPayload::ProcessingStatement(data) => data
            .catches
            .iter()
            .map(|entry| {
                base(
                    entry.catch_certificate_number.clone(),
                    entry.species.clone(),
                    entry.species_code.clone(),
                    entry.export_weight_after_processing.clone(),
                )
            })
            .collect(),
        ExportPayload::StorageDocument(data) => data
            .products
            .iter()
            .map(|entry| {
                base(
                    entry.certificate_number.clone(),
                    entry.species.clone(),
                    entry.species_code.clone(),
                    entry.product_weight.clone(),
                )
            })
            .collect(),
    }
}
