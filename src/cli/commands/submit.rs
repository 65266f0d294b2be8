//! Submit command implementation
//!
//! Drives one draft through the full submission pipeline against the
//! configured collaborators. Draft state is held in memory for the run; the
//! payload comes from a file and the reference data from an optional
//! snapshot file.

use crate::adapters::render::HttpRenderingService;
use crate::adapters::reporting::{HttpDataHubClient, HttpEuCatchClient, HttpMonitoringClient};
use crate::adapters::store::{InMemoryDraftStore, InMemoryResumeLinkStore, InMemorySessionCache};
use crate::cli::commands::{read_payload, read_reference_index};
use crate::config::load_config;
use crate::core::journey::JourneyRouter;
use crate::core::project::generate_document_number;
use crate::core::rules::cross::CrossValidator;
use crate::core::submission::{SubmissionContext, SubmissionOutcome, SubmissionPipeline};
use crate::domain::draft::{Draft, JourneyType};
use crate::domain::ids::{ContactId, DocumentNumber, JourneyName, UserPrincipal};
use clap::Args;
use std::sync::Arc;

/// Arguments for the submit command
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Path to the journey payload JSON file
    #[arg(long)]
    pub draft: String,

    /// Document number to submit under; generated when omitted
    #[arg(long)]
    pub document_number: Option<String>,

    /// User principal submitting the draft
    #[arg(long)]
    pub user: String,

    /// Contact the draft is scoped to
    #[arg(long)]
    pub contact: String,

    /// Email recorded on the completed document
    #[arg(long)]
    pub email: String,

    /// Path to a completed-document snapshot JSON file for cross-validation
    #[arg(long)]
    pub reference: Option<String>,

    /// Originating IP recorded on monitoring events
    #[arg(long)]
    pub origin_ip: Option<String>,
}

impl SubmitArgs {
    /// Execute the submit command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_config(config_path)
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

        let payload = read_payload(&self.draft)?;
        let journey = match payload.journey_type() {
            JourneyType::ProcessingStatement => JourneyName::new("processingStatement"),
            JourneyType::StorageDocument => JourneyName::new("storageDocument"),
            JourneyType::Other => {
                anyhow::bail!("Payload journey cannot be submitted");
            }
        }
        .map_err(|e| anyhow::anyhow!("{e}"))?;

        let document_number = match &self.document_number {
            Some(number) => DocumentNumber::new(number)
                .map_err(|e| anyhow::anyhow!("Invalid document number: {e}"))?,
            None => generate_document_number(payload.journey_type())
                .ok_or_else(|| anyhow::anyhow!("Payload journey has no document numbers"))?,
        };
        let user = UserPrincipal::new(&self.user)
            .map_err(|e| anyhow::anyhow!("Invalid user principal: {e}"))?;
        let contact =
            ContactId::new(&self.contact).map_err(|e| anyhow::anyhow!("Invalid contact: {e}"))?;

        println!("🚀 Submitting document: {document_number}");
        println!();

        // Seed the in-memory store with the draft under submission
        let store = Arc::new(InMemoryDraftStore::new());
        store
            .seed(Draft::new(
                document_number.clone(),
                user.clone(),
                contact.clone(),
                payload.clone(),
            ))
            .await;

        let reference = Arc::new(read_reference_index(self.reference.as_deref())?);
        let sessions = Arc::new(InMemorySessionCache::new());

        let (processing_statements, storage_documents): (Arc<InMemoryDraftStore>, _) =
            match payload.journey_type() {
                JourneyType::ProcessingStatement => (store, Arc::new(InMemoryDraftStore::new())),
                _ => (Arc::new(InMemoryDraftStore::new()), store),
            };

        let router = Arc::new(JourneyRouter::new(
            processing_statements,
            storage_documents,
            sessions.clone(),
            reference.clone(),
        ));

        let monitoring = Arc::new(
            HttpMonitoringClient::new(config.monitoring.base_url.clone(), 30)
                .map_err(|e| anyhow::anyhow!("{e}"))?,
        );
        let pipeline = SubmissionPipeline::new(
            router,
            CrossValidator::new(reference.clone(), reference),
            Arc::new(
                HttpRenderingService::new(
                    config.rendering.base_url.clone(),
                    config.rendering.timeout_seconds,
                )
                .map_err(|e| anyhow::anyhow!("{e}"))?,
            ),
            sessions,
            Arc::new(InMemoryResumeLinkStore::new()),
            monitoring.clone(),
            monitoring,
            Arc::new(
                HttpDataHubClient::new(
                    config.datahub.base_url.clone(),
                    config.datahub.submit_endpoint.clone(),
                    config.datahub.api_key.clone(),
                    config.datahub.timeout_seconds,
                )
                .map_err(|e| anyhow::anyhow!("{e}"))?,
            ),
            Arc::new(
                HttpEuCatchClient::new(
                    config.eu_catch.base_url.clone(),
                    config.eu_catch.timeout_seconds,
                )
                .map_err(|e| anyhow::anyhow!("{e}"))?,
            ),
            config.submission.clone(),
            config.rendering.container.clone(),
            config.monitoring.blocking_flag.clone(),
        );

        let ctx = SubmissionContext {
            user,
            contact,
            document_number,
            journey,
            submitter_email: self.email.clone(),
            correlation_path: "/cli/submit".to_string(),
            origin_ip: self.origin_ip.clone(),
        };

        match pipeline.submit(&ctx).await {
            Ok(SubmissionOutcome::Completed(result)) => {
                println!("✅ Document submitted");
                println!("   Document Number: {}", result.document_number);
                println!("   Document URI: {}", result.document_uri);
                Ok(0)
            }
            Ok(SubmissionOutcome::Rejected { status, error }) => {
                println!("❌ Submission rejected ({status})");
                println!("   {}: {}", error.key, error.message);
                Ok(3) // Validation failure exit code
            }
            Err(e) => {
                println!("❌ Submission failed");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }
}
