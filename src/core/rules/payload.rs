//! Whole-payload business validation
//!
//! Aggregates the pure field rules over a journey payload, producing
//! [`ValidationError`] entries in line order with stable keys. Used by the
//! CLI `validate` command and by callers that want a pre-submission check
//! without touching reference data.

use crate::core::rules::dates::{parse_display_date, validate_maximum_future_date_from, validate_today_or_in_the_past_from};
use crate::core::rules::numeric::{is_invalid_length, is_numbers_only, is_positive_number_with_two_decimals};
use crate::domain::draft::ExportPayload;
use crate::domain::validation::ValidationError;
use chrono::NaiveDate;

/// Commodity code length bounds, inclusive
const COMMODITY_CODE_MIN: usize = 6;
const COMMODITY_CODE_MAX: usize = 12;

/// Validates a payload's field-level rules
///
/// Cross-document checks (ownership, species) are separate; see
/// [`super::cross`]. `today` anchors the date-range rules.
pub fn validate_payload(payload: &ExportPayload, today: NaiveDate) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match payload {
        ExportPayload::ProcessingStatement(data) => {
            if let Some(date) = data.health_certificate_date.as_deref() {
                match parse_display_date(date) {
                    Some(parsed) if validate_today_or_in_the_past_from(parsed, today) => {}
                    _ => {
                        errors.push(
                            ValidationError::new(
                                "healthCertificateDateInvalid",
                                "Health certificate date must be a real date, today or in the past",
                            )
                            .with_context(serde_json::json!({"value": date})),
                        );
                    }
                }
            }

            for (index, entry) in data.catches.iter().enumerate() {
                if entry.species.trim().is_empty() {
                    errors.push(line_error(
                        "catchSpeciesMissing",
                        "Enter the species for this catch",
                        index,
                    ));
                }

                for (field, value) in [
                    ("totalWeightLanded", entry.total_weight_landed.as_deref()),
                    (
                        "exportWeightBeforeProcessing",
                        entry.export_weight_before_processing.as_deref(),
                    ),
                    (
                        "exportWeightAfterProcessing",
                        entry.export_weight_after_processing.as_deref(),
                    ),
                ] {
                    if let Some(weight) = value {
                        if !is_positive_number_with_two_decimals(weight) {
                            errors.push(
                                ValidationError::new(
                                    "catchWeightInvalid",
                                    "Enter a weight with up to two decimal places",
                                )
                                .with_context(serde_json::json!({
                                    "lineIndex": index,
                                    "field": field,
                                    "value": weight,
                                })),
                            );
                        }
                    }
                }
            }
        }
        ExportPayload::StorageDocument(data) => {
            for (index, entry) in data.products.iter().enumerate() {
                if let Some(code) = entry.commodity_code.as_deref() {
                    if !is_numbers_only(code)
                        || is_invalid_length(code, COMMODITY_CODE_MIN, COMMODITY_CODE_MAX)
                    {
                        errors.push(
                            ValidationError::new(
                                "commodityCodeInvalid",
                                "Enter a commodity code between 6 and 12 digits",
                            )
                            .with_context(serde_json::json!({
                                "lineIndex": index,
                                "value": code,
                            })),
                        );
                    }
                }

                if let Some(weight) = entry.product_weight.as_deref() {
                    if !is_positive_number_with_two_decimals(weight) {
                        errors.push(line_error(
                            "productWeightInvalid",
                            "Enter a weight with up to two decimal places",
                            index,
                        ));
                    }
                }

                if let Some(date) = entry.date_of_unloading.as_deref() {
                    match parse_display_date(date) {
                        Some(parsed) if validate_maximum_future_date_from(parsed, today) => {}
                        _ => {
                            errors.push(line_error(
                                "dateOfUnloadingInvalid",
                                "Enter a real unloading date no more than a day ahead",
                                index,
                            ));
                        }
                    }
                }
            }
        }
    }

    errors
}

fn line_error(key: &str, message: &str, index: usize) -> ValidationError {
    ValidationError::new(key, message).with_context(serde_json::json!({"lineIndex": index}))
}
