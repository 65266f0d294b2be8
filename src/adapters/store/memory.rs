//! In-memory storage adapters
//!
//! RwLock-backed implementations of the storage traits. These back the CLI's
//! file-driven flows and the integration tests; production deployments wire
//! real document-store and cache adapters behind the same traits.

use crate::adapters::store::traits::{DraftRepository, ResumeLinkStore, SessionCache};
use crate::domain::draft::{Draft, DraftStatus, ExportPayload};
use crate::domain::errors::StoreError;
use crate::domain::ids::{ContactId, DocumentNumber, JourneyName, UserPrincipal};
use crate::domain::Result;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

/// In-memory draft repository
///
/// Keyed by document number; tracks cache invalidations so tests can assert
/// how often staleness was bounded.
#[derive(Debug, Default)]
pub struct InMemoryDraftStore {
    drafts: RwLock<HashMap<String, Draft>>,
    invalidations: RwLock<HashMap<String, usize>>,
}

impl InMemoryDraftStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a draft directly, bypassing upsert key checks
    pub async fn seed(&self, draft: Draft) {
        self.drafts
            .write()
            .await
            .insert(draft.document_number.as_str().to_string(), draft);
    }

    /// Number of cache invalidations recorded for a document
    pub async fn invalidation_count(&self, document: &DocumentNumber) -> usize {
        self.invalidations
            .read()
            .await
            .get(document.as_str())
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl DraftRepository for InMemoryDraftStore {
    async fn get_draft(
        &self,
        user: &UserPrincipal,
        document: &DocumentNumber,
        _contact: &ContactId,
    ) -> Result<Option<Draft>> {
        let drafts = self.drafts.read().await;
        Ok(drafts
            .get(document.as_str())
            .filter(|draft| draft.user_principal == *user)
            .cloned())
    }

    async fn upsert_draft_data(
        &self,
        user: &UserPrincipal,
        document: &DocumentNumber,
        update: ExportPayload,
        contact: &ContactId,
    ) -> Result<()> {
        let mut drafts = self.drafts.write().await;
        match drafts.get_mut(document.as_str()) {
            Some(draft) => {
                if draft.user_principal != *user {
                    return Err(StoreError::UpsertFailed(format!(
                        "draft {} is owned by another user",
                        document
                    ))
                    .into());
                }
                draft.export_data = update;
            }
            None => {
                // Created implicitly on first write
                let draft = Draft::new(document.clone(), user.clone(), contact.clone(), update);
                drafts.insert(document.as_str().to_string(), draft);
            }
        }
        Ok(())
    }

    async fn complete_draft(
        &self,
        document: &DocumentNumber,
        rendered_uri: &str,
        submitter_email: &str,
    ) -> Result<()> {
        let mut drafts = self.drafts.write().await;
        let draft = drafts.get_mut(document.as_str()).ok_or_else(|| {
            StoreError::CompleteFailed(format!("no draft for document {}", document))
        })?;

        draft.status = DraftStatus::Complete;
        draft.document_uri = Some(rendered_uri.to_string());
        draft.submitted_by_email = Some(submitter_email.to_string());
        Ok(())
    }

    async fn invalidate_draft_cache(
        &self,
        _user: &UserPrincipal,
        document: &DocumentNumber,
        _contact: &ContactId,
    ) -> Result<()> {
        let mut invalidations = self.invalidations.write().await;
        *invalidations
            .entry(document.as_str().to_string())
            .or_insert(0) += 1;
        Ok(())
    }
}

fn session_key(user: &UserPrincipal, contact: &ContactId, journey: &JourneyName) -> String {
    format!("{}:{}:{}", user, contact, journey)
}

/// In-memory session cache
#[derive(Debug, Default)]
pub struct InMemorySessionCache {
    entries: RwLock<HashMap<String, serde_json::Value>>,
}

impl InMemorySessionCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionCache for InMemorySessionCache {
    async fn read_all_for(
        &self,
        user: &UserPrincipal,
        contact: &ContactId,
        journey: &JourneyName,
    ) -> Result<Option<serde_json::Value>> {
        let entries = self.entries.read().await;
        Ok(entries.get(&session_key(user, contact, journey)).cloned())
    }

    async fn write_all_for(
        &self,
        user: &UserPrincipal,
        contact: &ContactId,
        journey: &JourneyName,
        value: serde_json::Value,
    ) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(session_key(user, contact, journey), value);
        Ok(())
    }

    async fn clear_journey(
        &self,
        user: &UserPrincipal,
        contact: &ContactId,
        journey: &JourneyName,
    ) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.remove(&session_key(user, contact, journey));
        Ok(())
    }
}

/// In-memory resume-link store
#[derive(Debug, Default)]
pub struct InMemoryResumeLinkStore {
    links: RwLock<HashSet<(String, String)>>,
}

impl InMemoryResumeLinkStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a resume link
    pub async fn add_link(&self, user: &UserPrincipal, document: &DocumentNumber) {
        self.links
            .write()
            .await
            .insert((user.as_str().to_string(), document.as_str().to_string()));
    }

    /// True when a link exists
    pub async fn has_link(&self, user: &UserPrincipal, document: &DocumentNumber) -> bool {
        self.links
            .read()
            .await
            .contains(&(user.as_str().to_string(), document.as_str().to_string()))
    }
}

#[async_trait]
impl ResumeLinkStore for InMemoryResumeLinkStore {
    async fn remove_link(&self, user: &UserPrincipal, document: &DocumentNumber) -> Result<()> {
        let mut links = self.links.write().await;
        links.remove(&(user.as_str().to_string(), document.as_str().to_string()));
        Ok(())
    }
}
