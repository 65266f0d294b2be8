//! Journey state routing
//!
//! One front door for reading and saving journey state. Processing statement
//! and storage document journeys route to their draft repositories and get
//! the full projection treatment; every other journey is schemaless session
//! state served as-is.

use crate::adapters::reference::SourceProductLookup;
use crate::adapters::store::{DraftRepository, SessionCache};
use crate::core::project::{assign_line_ids, to_front_end};
use crate::domain::draft::{Draft, ExportPayload, JourneyType};
use crate::domain::errors::StoreError;
use crate::domain::ids::{ContactId, DocumentNumber, JourneyName, UserPrincipal};
use crate::domain::Result;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

/// Outcome of a journey save
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// State persisted; the projected view for the form journey
    Saved(Value),

    /// State persisted; the caller should continue to the given location
    Redirect(String),
}

/// Routes journey reads and saves to the owning backend
pub struct JourneyRouter {
    processing_statements: Arc<dyn DraftRepository>,
    storage_documents: Arc<dyn DraftRepository>,
    sessions: Arc<dyn SessionCache>,
    sources: Arc<dyn SourceProductLookup>,
}

impl JourneyRouter {
    pub fn new(
        processing_statements: Arc<dyn DraftRepository>,
        storage_documents: Arc<dyn DraftRepository>,
        sessions: Arc<dyn SessionCache>,
        sources: Arc<dyn SourceProductLookup>,
    ) -> Self {
        Self {
            processing_statements,
            storage_documents,
            sessions,
            sources,
        }
    }

    /// Draft repository owning a journey type, `None` for session journeys
    pub fn repository_for(&self, journey_type: JourneyType) -> Option<&Arc<dyn DraftRepository>> {
        match journey_type {
            JourneyType::ProcessingStatement => Some(&self.processing_statements),
            JourneyType::StorageDocument => Some(&self.storage_documents),
            JourneyType::Other => None,
        }
    }

    /// Loads a draft through the journey's repository
    pub async fn load_draft(
        &self,
        journey_type: JourneyType,
        user: &UserPrincipal,
        document: &DocumentNumber,
        contact: &ContactId,
    ) -> Result<Option<Draft>> {
        match self.repository_for(journey_type) {
            Some(repository) => repository.get_draft(user, document, contact).await,
            None => Ok(None),
        }
    }

    /// Reads journey state projected for the form journey
    ///
    /// Draft journeys project the stored payload (or the journey's initial
    /// state when no draft exists yet). Session journeys return the cached
    /// document, or an empty object when nothing has been written.
    pub async fn get(
        &self,
        journey: &JourneyName,
        user: &UserPrincipal,
        document: &DocumentNumber,
        contact: &ContactId,
    ) -> Result<Value> {
        let journey_type = JourneyType::resolve(journey);

        let Some(repository) = self.repository_for(journey_type) else {
            let cached = self.sessions.read_all_for(user, contact, journey).await?;
            return Ok(cached.unwrap_or_else(|| Value::Object(Default::default())));
        };

        let payload = match repository.get_draft(user, document, contact).await? {
            Some(draft) => draft.export_data,
            None => initial_payload(journey_type)?,
        };

        let view = to_front_end(&payload, self.sources.as_ref(), Utc::now().date_naive());
        Ok(serde_json::to_value(view)?)
    }

    /// Merges an update into journey state and persists it
    ///
    /// Merge is shallow: the update's top-level keys replace the stored
    /// document's, everything else is kept. Draft journeys re-decode the
    /// merged document into the journey's shape, assign ids to new lines and
    /// persist through the repository; session journeys persist the merged
    /// document as-is.
    ///
    /// `next` is an optional continue-to location from the caller's query;
    /// when present the outcome is a redirect instead of the saved view.
    pub async fn save(
        &self,
        journey: &JourneyName,
        user: &UserPrincipal,
        document: &DocumentNumber,
        contact: &ContactId,
        update: Value,
        next: Option<&str>,
    ) -> Result<SaveOutcome> {
        let journey_type = JourneyType::resolve(journey);

        let Some(repository) = self.repository_for(journey_type) else {
            let base = self
                .sessions
                .read_all_for(user, contact, journey)
                .await?
                .unwrap_or_else(|| Value::Object(Default::default()));
            let merged = merge_top_level(base, update);
            self.sessions
                .write_all_for(user, contact, journey, merged.clone())
                .await?;
            return Ok(outcome(merged, next));
        };

        let base_payload = match repository.get_draft(user, document, contact).await? {
            Some(draft) => draft.export_data,
            None => initial_payload(journey_type)?,
        };

        let merged = merge_top_level(serde_json::to_value(&base_payload)?, update);
        let mut payload: ExportPayload = serde_json::from_value(merged).map_err(|err| {
            StoreError::CorruptPayload(format!(
                "merged update does not decode as a {} payload: {err}",
                journey_type.label()
            ))
        })?;
        assign_line_ids(&mut payload);

        repository
            .upsert_draft_data(user, document, payload.clone(), contact)
            .await?;

        let view = to_front_end(&payload, self.sources.as_ref(), Utc::now().date_naive());
        Ok(outcome(serde_json::to_value(view)?, next))
    }
}

fn initial_payload(journey_type: JourneyType) -> Result<ExportPayload> {
    ExportPayload::initial_for(journey_type).ok_or_else(|| {
        StoreError::CorruptPayload(format!("journey {} has no draft shape", journey_type.label()))
            .into()
    })
}

fn outcome(saved: Value, next: Option<&str>) -> SaveOutcome {
    match next {
        Some(location) => SaveOutcome::Redirect(location.to_string()),
        None => SaveOutcome::Saved(saved),
    }
}

/// Shallow top-level merge; the update's keys win
fn merge_top_level(base: Value, update: Value) -> Value {
    match (base, update) {
        (Value::Object(mut base), Value::Object(update)) => {
            for (key, value) in update {
                base.insert(key, value);
            }
            Value::Object(base)
        }
        (_, update) => update,
    }
}
