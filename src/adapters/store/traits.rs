//! Storage abstraction traits
//!
//! This module defines the traits that draft and session storage backends
//! must implement. The storage engines themselves (document store, key-value
//! cache) are external collaborators; these traits are the whole contract the
//! pipeline relies on.

use crate::domain::draft::{Draft, ExportPayload};
use crate::domain::ids::{ContactId, DocumentNumber, JourneyName, UserPrincipal};
use crate::domain::Result;
use async_trait::async_trait;

/// Draft repository for one document type
///
/// Backend-agnostic read/upsert/complete/invalidate operations keyed by
/// (user, document number, contact). Exactly one draft exists per document
/// number; upserts are full-payload replace, with merging done by the caller.
#[async_trait]
pub trait DraftRepository: Send + Sync {
    /// Read a draft
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(Draft))` if found, `Ok(None)` if no draft exists for
    /// the document number. Absence is not an error.
    async fn get_draft(
        &self,
        user: &UserPrincipal,
        document: &DocumentNumber,
        contact: &ContactId,
    ) -> Result<Option<Draft>>;

    /// Create or replace the draft's export data
    ///
    /// A draft is created implicitly on the first write for a document
    /// number. Updates are full-document replace-by-merge semantics: the
    /// caller merges, this method persists the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    async fn upsert_draft_data(
        &self,
        user: &UserPrincipal,
        document: &DocumentNumber,
        update: ExportPayload,
        contact: &ContactId,
    ) -> Result<()>;

    /// Mark a draft COMPLETE with the rendered artifact location
    ///
    /// # Arguments
    ///
    /// * `document` - Document number of the draft
    /// * `rendered_uri` - Storage location of the rendered document
    /// * `submitter_email` - Email of the submitting user
    ///
    /// # Errors
    ///
    /// Returns an error if no draft exists or the write fails.
    async fn complete_draft(
        &self,
        document: &DocumentNumber,
        rendered_uri: &str,
        submitter_email: &str,
    ) -> Result<()>;

    /// Invalidate any cached copy of the draft
    ///
    /// Bounds staleness rather than providing exclusion; callers invalidate
    /// at specific pipeline points instead of locking.
    async fn invalidate_draft_cache(
        &self,
        user: &UserPrincipal,
        document: &DocumentNumber,
        contact: &ContactId,
    ) -> Result<()>;
}

/// Ephemeral session cache for non-draft journeys
///
/// Stores one schemaless document per (user, contact, journey). Created on
/// first write, overwritten on each write; expiry is the backend's concern.
#[async_trait]
pub trait SessionCache: Send + Sync {
    /// Read the cached document for a journey
    ///
    /// Returns `Ok(None)` when nothing has been written yet.
    async fn read_all_for(
        &self,
        user: &UserPrincipal,
        contact: &ContactId,
        journey: &JourneyName,
    ) -> Result<Option<serde_json::Value>>;

    /// Overwrite the cached document for a journey
    async fn write_all_for(
        &self,
        user: &UserPrincipal,
        contact: &ContactId,
        journey: &JourneyName,
        value: serde_json::Value,
    ) -> Result<()>;

    /// Remove the cached document for a journey
    ///
    /// Used at submission to clear transient journey state.
    async fn clear_journey(
        &self,
        user: &UserPrincipal,
        contact: &ContactId,
        journey: &JourneyName,
    ) -> Result<()>;
}

/// "Resume later" draft links
///
/// A link lets the user return to an in-progress draft; it is deleted when
/// the draft completes.
#[async_trait]
pub trait ResumeLinkStore: Send + Sync {
    /// Remove the resume link for a document, if one exists
    ///
    /// Removing a non-existent link is not an error.
    async fn remove_link(&self, user: &UserPrincipal, document: &DocumentNumber) -> Result<()>;
}
