//! Document cloning
//!
//! A completed document can be cloned into a fresh draft under a new number.
//! Line content is carried over verbatim; only the locally generated line
//! ids are regenerated so the clone's lines never collide with the parent's.

use crate::domain::draft::{Draft, DraftStatus, ExportPayload, JourneyType};
use crate::domain::ids::DocumentNumber;
use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use uuid::Uuid;

const LINE_ID_SUFFIX_LEN: usize = 9;
const DOCUMENT_SUFFIX_LEN: usize = 9;

/// Generates a document number for a new draft
///
/// Format: `GBR-{year}-{PS|SD}-{9 uppercase hex chars}`. Session journeys
/// carry no document number, so [`JourneyType::Other`] yields `None`.
pub fn generate_document_number(journey_type: JourneyType) -> Option<DocumentNumber> {
    let infix = match journey_type {
        JourneyType::ProcessingStatement => "PS",
        JourneyType::StorageDocument => "SD",
        JourneyType::Other => return None,
    };
    let hex = Uuid::new_v4().simple().to_string();
    let suffix = hex[..DOCUMENT_SUFFIX_LEN].to_uppercase();
    DocumentNumber::new(format!("GBR-{}-{infix}-{suffix}", Utc::now().format("%Y"))).ok()
}

fn line_id(certificate_number: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(LINE_ID_SUFFIX_LEN)
        .map(|c| (c as char).to_ascii_lowercase())
        .collect();
    format!("{certificate_number}-{suffix}")
}

/// Assigns ids to lines that do not yet carry one
///
/// Existing ids are kept; partial saves must not churn line identity.
pub fn assign_line_ids(payload: &mut ExportPayload) {
    match payload {
        ExportPayload::ProcessingStatement(data) => {
            for entry in &mut data.catches {
                if entry.id.is_none() {
                    entry.id = Some(line_id(&entry.catch_certificate_number));
                }
            }
        }
        ExportPayload::StorageDocument(data) => {
            for entry in &mut data.products {
                if entry.id.is_none() {
                    entry.id = Some(line_id(&entry.certificate_number));
                }
            }
        }
    }
}

/// Clones a document into a fresh draft
///
/// The clone gets the new number, `DRAFT` status, a fresh creation timestamp
/// and a back-reference to the parent. Completion artifacts (document URI,
/// submitter email) are dropped and every line id is regenerated; all other
/// payload content is carried over unchanged.
pub fn clone_document(
    parent: &Draft,
    new_number: DocumentNumber,
    parent_document_void: bool,
) -> Draft {
    let mut export_data = parent.export_data.clone();
    match &mut export_data {
        ExportPayload::ProcessingStatement(data) => {
            for entry in &mut data.catches {
                entry.id = Some(line_id(&entry.catch_certificate_number));
            }
        }
        ExportPayload::StorageDocument(data) => {
            for entry in &mut data.products {
                entry.id = Some(line_id(&entry.certificate_number));
            }
        }
    }

    Draft {
        document_number: new_number,
        user_principal: parent.user_principal.clone(),
        contact_id: parent.contact_id.clone(),
        status: DraftStatus::Draft,
        created_at: Utc::now(),
        created_by: parent.created_by.clone(),
        cloned_from: Some(parent.document_number.clone()),
        parent_document_void: Some(parent_document_void),
        document_uri: None,
        submitted_by_email: None,
        export_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::draft::{CatchEntry, CertificateType, ProcessingStatementData};
    use crate::domain::ids::{ContactId, UserPrincipal};

    fn parent() -> Draft {
        let mut draft = Draft::new(
            DocumentNumber::new("GBR-2024-PS-1").unwrap(),
            UserPrincipal::new("user-1").unwrap(),
            ContactId::new("contact-1").unwrap(),
            ExportPayload::ProcessingStatement(ProcessingStatementData {
                catches: vec![CatchEntry {
                    id: Some("GBR-2022-CC-0123456789-aaaaaaaaa".to_string()),
                    catch_certificate_number: "GBR-2022-CC-0123456789".to_string(),
                    catch_certificate_type: CertificateType::Uk,
                    species: "Atlantic cod (COD)".to_string(),
                    species_code: Some("COD".to_string()),
                    scientific_name: None,
                    total_weight_landed: Some("40".to_string()),
                    export_weight_before_processing: Some("30".to_string()),
                    export_weight_after_processing: Some("25".to_string()),
                }],
                consignment_description: Some("Frozen cod fillets".to_string()),
                ..Default::default()
            }),
        );
        draft.status = DraftStatus::Complete;
        draft.document_uri = Some("https://store.example/docs/GBR-2024-PS-1.pdf".to_string());
        draft.submitted_by_email = Some("exporter@example.com".to_string());
        draft
    }

    #[test]
    fn test_clone_resets_lifecycle_fields() {
        let parent = parent();
        let clone = clone_document(
            &parent,
            DocumentNumber::new("GBR-2024-PS-2").unwrap(),
            true,
        );

        assert_eq!(clone.document_number.as_str(), "GBR-2024-PS-2");
        assert_eq!(clone.status, DraftStatus::Draft);
        assert_eq!(clone.cloned_from, Some(parent.document_number.clone()));
        assert_eq!(clone.parent_document_void, Some(true));
        assert!(clone.document_uri.is_none());
        assert!(clone.submitted_by_email.is_none());
        assert!(clone.created_at >= parent.created_at);
    }

    #[test]
    fn test_clone_regenerates_line_ids_but_keeps_content() {
        let parent = parent();
        let clone = clone_document(
            &parent,
            DocumentNumber::new("GBR-2024-PS-2").unwrap(),
            false,
        );

        let (ExportPayload::ProcessingStatement(before), ExportPayload::ProcessingStatement(after)) =
            (&parent.export_data, &clone.export_data)
        else {
            panic!("journey changed during clone");
        };

        let old_id = before.catches[0].id.as_deref().unwrap();
        let new_id = after.catches[0].id.as_deref().unwrap();
        assert_ne!(old_id, new_id);
        assert!(new_id.starts_with("GBR-2022-CC-0123456789-"));

        assert_eq!(after.catches[0].species, before.catches[0].species);
        assert_eq!(
            after.catches[0].total_weight_landed,
            before.catches[0].total_weight_landed
        );
        assert_eq!(
            after.consignment_description,
            before.consignment_description
        );
    }

    #[test]
    fn test_generated_document_numbers() {
        let ps = generate_document_number(JourneyType::ProcessingStatement).unwrap();
        let sd = generate_document_number(JourneyType::StorageDocument).unwrap();

        assert!(ps.as_str().starts_with("GBR-"));
        assert!(ps.as_str().contains("-PS-"));
        assert!(sd.as_str().contains("-SD-"));
        assert_eq!(
            ps.as_str().rsplit('-').next().unwrap().len(),
            DOCUMENT_SUFFIX_LEN
        );
        assert!(generate_document_number(JourneyType::Other).is_none());
    }

    #[test]
    fn test_generated_ids_are_lowercase_suffixed() {
        let id = line_id("GBR-2022-CC-0123456789");
        let suffix = id.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), LINE_ID_SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_assign_line_ids_only_fills_gaps() {
        let mut payload = parent().export_data;
        if let ExportPayload::ProcessingStatement(data) = &mut payload {
            data.catches.push(CatchEntry {
                id: None,
                catch_certificate_number: "GBR-2023-CC-0000000001".to_string(),
                catch_certificate_type: CertificateType::Uk,
                species: "Haddock (HAD)".to_string(),
                species_code: None,
                scientific_name: None,
                total_weight_landed: None,
                export_weight_before_processing: None,
                export_weight_after_processing: None,
            });
        }

        assign_line_ids(&mut payload);

        let ExportPayload::ProcessingStatement(data) = &payload else {
            panic!("unexpected journey");
        };
        assert_eq!(
            data.catches[0].id.as_deref(),
            Some("GBR-2022-CC-0123456789-aaaaaaaaa")
        );
        assert!(data.catches[1]
            .id
            .as_deref()
            .unwrap()
            .starts_with("GBR-2023-CC-0000000001-"));
    }
}
