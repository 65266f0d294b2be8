//! Cross-document catch validation
//!
//! Every catch line referencing a domestically issued certificate must
//! resolve to a completed, legitimately owned source document, and its
//! declared species must exist on that document. The first failing line
//! short-circuits the remaining checks: one failure, one log line, one
//! error object.

use crate::adapters::reference::{DocumentOwnershipValidator, SpeciesReferenceValidator};
use crate::domain::draft::{CertificateType, ExportPayload, JourneyType};
use crate::domain::ids::{ContactId, DocumentNumber, UserPrincipal};
use crate::domain::validation::ValidationError;
use crate::domain::Result;
use std::sync::Arc;

/// One line extracted from a payload for cross-checking
#[derive(Debug, Clone, PartialEq)]
pub struct CrossCheckLine {
    /// Source certificate number
    pub certificate_number: String,

    /// Source certificate classification
    pub certificate_type: CertificateType,

    /// Declared species name
    pub species: String,

    /// FAO species code, when the line supplies one
    pub species_code: Option<String>,
}

/// Extracts cross-checkable lines from a journey payload
///
/// Processing statements contribute their catches, storage documents their
/// products. Order follows the payload.
pub fn lines_for(payload: &ExportPayload) -> Vec<CrossCheckLine> {
    match payload {
        ExportPayload::ProcessingStatement(data) => data
            .catches
            .iter()
            .map(|entry| CrossCheckLine {
                certificate_number: entry.catch_certificate_number.clone(),
                certificate_type: entry.catch_certificate_type,
                species: entry.species.clone(),
                species_code: entry.species_code.clone(),
            })
            .collect(),
        ExportPayload::StorageDocument(data) => data
            .products
            .iter()
            .map(|entry| CrossCheckLine {
                certificate_number: entry.certificate_number.clone(),
                certificate_type: entry.certificate_type,
                species: entry.species.clone(),
                species_code: entry.species_code.clone(),
            })
            .collect(),
    }
}

/// What failed for the first failing line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureKind {
    Certificate,
    Species,
}

fn error_key(document_type: JourneyType, kind: FailureKind) -> &'static str {
    match (document_type, kind) {
        (JourneyType::ProcessingStatement, FailureKind::Certificate) => {
            "psCatchCertificateNotValid"
        }
        (JourneyType::ProcessingStatement, FailureKind::Species) => "psCatchSpeciesNotValid",
        (JourneyType::StorageDocument, FailureKind::Certificate) => "sdCatchCertificateNotValid",
        (JourneyType::StorageDocument, FailureKind::Species) => "sdCatchSpeciesNotValid",
        // Session journeys never reach cross-validation
        (JourneyType::Other, FailureKind::Certificate) => "catchCertificateNotValid",
        (JourneyType::Other, FailureKind::Species) => "catchSpeciesNotValid",
    }
}

/// Cross-document validator over the reference-data collaborators
pub struct CrossValidator {
    ownership: Arc<dyn DocumentOwnershipValidator>,
    species: Arc<dyn SpeciesReferenceValidator>,
}

impl CrossValidator {
    /// Creates a validator over the given collaborators
    pub fn new(
        ownership: Arc<dyn DocumentOwnershipValidator>,
        species: Arc<dyn SpeciesReferenceValidator>,
    ) -> Self {
        Self { ownership, species }
    }

    /// Validates catch lines against their source certificates
    ///
    /// Lines with a non-domestic certificate type are skipped. The first
    /// failing line stops further checks; remaining lines are never
    /// evaluated. One diagnostic log line is emitted per failed submission.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when every line passes, `Ok(Some(error))` for the first
    /// failure. Infrastructure failures from the collaborators propagate
    /// as `Err`.
    pub async fn validate_catches(
        &self,
        document_type: JourneyType,
        document_number: &DocumentNumber,
        user: &UserPrincipal,
        contact: &ContactId,
        lines: &[CrossCheckLine],
    ) -> Result<Option<ValidationError>> {
        for (index, line) in lines.iter().enumerate() {
            if !line.certificate_type.is_domestic() {
                continue;
            }

            let document_ok = self
                .ownership
                .validate_completed_document(user, contact, &line.certificate_number)
                .await?;
            if !document_ok {
                return Ok(Some(self.fail(
                    document_type,
                    document_number,
                    line,
                    index,
                    FailureKind::Certificate,
                )));
            }

            let species_ok = self
                .species
                .validate_species(
                    &line.certificate_number,
                    &line.species,
                    line.species_code.as_deref(),
                )
                .await?;
            if !species_ok {
                return Ok(Some(self.fail(
                    document_type,
                    document_number,
                    line,
                    index,
                    FailureKind::Species,
                )));
            }
        }

        Ok(None)
    }

    fn fail(
        &self,
        document_type: JourneyType,
        document_number: &DocumentNumber,
        line: &CrossCheckLine,
        index: usize,
        kind: FailureKind,
    ) -> ValidationError {
        let key = error_key(document_type, kind);
        let message = match kind {
            FailureKind::Certificate => format!(
                "Certificate {} is not a completed document owned by this exporter",
                line.certificate_number
            ),
            FailureKind::Species => format!(
                "Species {} is not present on certificate {}",
                line.species, line.certificate_number
            ),
        };
        let context = serde_json::json!({
            "key": key,
            "certificateNumber": line.certificate_number,
            "species": line.species,
            "lineIndex": index,
        });

        tracing::error!(
            "[DOCUMENT-NUMBER: {}][{}-CHECKING-ERRORS][{}]",
            document_number,
            document_type.label(),
            context
        );

        ValidationError::new(key, message).with_context(context)
    }
}
