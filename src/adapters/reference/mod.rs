//! Reference-data collaborator traits
//!
//! Cross-document validation and weight backfill both consult data owned by
//! other systems: the set of completed source certificates, who owns them,
//! and the products declared on them. This module defines those seams and a
//! static in-memory implementation backed by completed-document snapshots,
//! used by tests and the CLI.

use crate::domain::ids::{ContactId, UserPrincipal};
use crate::domain::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One product declared on a completed source certificate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceProduct {
    /// Species name as declared on the source document
    pub species: String,

    /// FAO species code, when the source document carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species_code: Option<String>,

    /// Total landed weight on the source document
    pub total_weight: f64,
}

/// Cached product lists of completed source certificates
///
/// Synchronous by design: implementations serve from an already-warmed cache,
/// never from the wire. A missing entry means "no cache entry", not an error.
pub trait SourceProductLookup: Send + Sync {
    /// Returns the cached product list for a source certificate, if any
    fn products_for(&self, certificate_number: &str) -> Option<Vec<SourceProduct>>;
}

/// Confirms a source certificate is completed and legitimately owned
#[async_trait]
pub trait DocumentOwnershipValidator: Send + Sync {
    /// True when `certificate_number` names a completed document owned by
    /// the calling user
    ///
    /// # Errors
    ///
    /// Returns an error only on infrastructure failure; "not owned" and
    /// "not found" are both `Ok(false)`.
    async fn validate_completed_document(
        &self,
        user: &UserPrincipal,
        contact: &ContactId,
        certificate_number: &str,
    ) -> Result<bool>;
}

/// Confirms a declared species exists on a given source certificate
#[async_trait]
pub trait SpeciesReferenceValidator: Send + Sync {
    /// True when the species (by name, and by code when the caller supplies
    /// one) is present on the certificate
    async fn validate_species(
        &self,
        certificate_number: &str,
        species: &str,
        species_code: Option<&str>,
    ) -> Result<bool>;
}

/// Snapshot of one completed source document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedDocumentSnapshot {
    /// Certificate number of the completed document
    pub certificate_number: String,

    /// Principal of the owning user
    pub owner: String,

    /// Whether the document reached COMPLETE status
    pub completed: bool,

    /// Products declared on the document
    #[serde(default)]
    pub products: Vec<SourceProduct>,
}

/// Static in-memory index over completed-document snapshots
///
/// Implements all three reference seams from one dataset.
#[derive(Debug, Default)]
pub struct CompletedDocumentIndex {
    documents: HashMap<String, CompletedDocumentSnapshot>,
}

impl CompletedDocumentIndex {
    /// Builds an index from snapshots, keyed by certificate number
    pub fn new(snapshots: Vec<CompletedDocumentSnapshot>) -> Self {
        let documents = snapshots
            .into_iter()
            .map(|snapshot| (snapshot.certificate_number.clone(), snapshot))
            .collect();
        Self { documents }
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when the index holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn snapshot(&self, certificate_number: &str) -> Option<&CompletedDocumentSnapshot> {
        self.documents.get(certificate_number)
    }
}

impl SourceProductLookup for CompletedDocumentIndex {
    fn products_for(&self, certificate_number: &str) -> Option<Vec<SourceProduct>> {
        self.snapshot(certificate_number)
            .map(|snapshot| snapshot.products.clone())
    }
}

#[async_trait]
impl DocumentOwnershipValidator for CompletedDocumentIndex {
    async fn validate_completed_document(
        &self,
        user: &UserPrincipal,
        _contact: &ContactId,
        certificate_number: &str,
    ) -> Result<bool> {
        Ok(self
            .snapshot(certificate_number)
            .map(|snapshot| snapshot.completed && snapshot.owner == user.as_str())
            .unwrap_or(false))
    }
}

#[async_trait]
impl SpeciesReferenceValidator for CompletedDocumentIndex {
    async fn validate_species(
        &self,
        certificate_number: &str,
        species: &str,
        species_code: Option<&str>,
    ) -> Result<bool> {
        let Some(snapshot) = self.snapshot(certificate_number) else {
            return Ok(false);
        };

        // Name match is always required; code match applies only when the
        // caller supplies a code. Matching is case-sensitive.
        Ok(snapshot.products.iter().any(|product| {
            let name_matches = product.species == species;
            let code_matches = match species_code {
                Some(code) => product.species_code.as_deref() == Some(code),
                None => true,
            };
            name_matches && code_matches
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> CompletedDocumentIndex {
        CompletedDocumentIndex::new(vec![
            CompletedDocumentSnapshot {
                certificate_number: "GBR-2022-CC-0123456789".to_string(),
                owner: "user-1".to_string(),
                completed: true,
                products: vec![SourceProduct {
                    species: "Atlantic cod (COD)".to_string(),
                    species_code: Some("COD".to_string()),
                    total_weight: 120.0,
                }],
            },
            CompletedDocumentSnapshot {
                certificate_number: "GBR-2022-CC-1111111111".to_string(),
                owner: "user-2".to_string(),
                completed: false,
                products: vec![],
            },
        ])
    }

    fn user(principal: &str) -> UserPrincipal {
        UserPrincipal::new(principal).unwrap()
    }

    fn contact() -> ContactId {
        ContactId::new("contact-1").unwrap()
    }

    #[tokio::test]
    async fn test_ownership_requires_completed_and_owned() {
        let index = index();

        assert!(index
            .validate_completed_document(&user("user-1"), &contact(), "GBR-2022-CC-0123456789")
            .await
            .unwrap());

        // Wrong owner
        assert!(!index
            .validate_completed_document(&user("user-2"), &contact(), "GBR-2022-CC-0123456789")
            .await
            .unwrap());

        // Not completed
        assert!(!index
            .validate_completed_document(&user("user-2"), &contact(), "GBR-2022-CC-1111111111")
            .await
            .unwrap());

        // Unknown certificate
        assert!(!index
            .validate_completed_document(&user("user-1"), &contact(), "GBR-0000")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_species_match_by_name_and_code() {
        let index = index();

        assert!(index
            .validate_species("GBR-2022-CC-0123456789", "Atlantic cod (COD)", None)
            .await
            .unwrap());
        assert!(index
            .validate_species("GBR-2022-CC-0123456789", "Atlantic cod (COD)", Some("COD"))
            .await
            .unwrap());
        // Code mismatch fails even when the name matches
        assert!(!index
            .validate_species("GBR-2022-CC-0123456789", "Atlantic cod (COD)", Some("HAD"))
            .await
            .unwrap());
        // Case-sensitive name match
        assert!(!index
            .validate_species("GBR-2022-CC-0123456789", "atlantic cod (cod)", None)
            .await
            .unwrap());
    }

    #[test]
    fn test_products_lookup() {
        let index = index();
        let products = index.products_for("GBR-2022-CC-0123456789").unwrap();
        assert_eq!(products.len(), 1);
        assert!(index.products_for("GBR-0000").is_none());
    }
}
