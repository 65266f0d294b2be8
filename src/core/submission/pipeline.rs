//! Submission pipeline
//!
//! Drives one draft from loaded to submitted: cross-validate, render,
//! complete the stored draft, report to downstream collaborators and clean
//! up transient state. Failures split into two classes: anything up to and
//! including persistence fails the submission; reporting and cleanup
//! failures are caught and logged, because the document is already complete
//! and the caller must be told so.

use crate::adapters::render::{RenderRequest, RenderingService};
use crate::adapters::reporting::{
    BlockingStatusCheck, DataHubClient, EuCatchClient, MonitoringClient, MonitoringEvent,
};
use crate::adapters::store::{ResumeLinkStore, SessionCache};
use crate::config::schema::SubmissionConfig;
use crate::core::journey::JourneyRouter;
use crate::core::rules::cross::{lines_for, CrossValidator};
use crate::core::submission::records::build_submission_records;
use crate::domain::draft::{Draft, JourneyType, SubmissionResult};
use crate::domain::errors::HarbourError;
use crate::domain::ids::{ContactId, DocumentNumber, JourneyName, UserPrincipal};
use crate::domain::validation::ValidationError;
use crate::domain::Result;
use chrono::Utc;
use std::sync::Arc;

const ACTION_SUBMIT: &str = "SUBMIT";
const ACTION_SUBMIT_BLOCKED: &str = "SUBMIT_BLOCKED_ACCOUNT";

/// Everything identifying one submission request
#[derive(Debug, Clone)]
pub struct SubmissionContext {
    pub user: UserPrincipal,
    pub contact: ContactId,
    pub document_number: DocumentNumber,
    pub journey: JourneyName,

    /// Email recorded on the completed draft
    pub submitter_email: String,

    /// Request path attached to monitoring events
    pub correlation_path: String,

    /// Originating IP, when the caller knows it
    pub origin_ip: Option<String>,
}

/// Terminal state of a submission attempt
///
/// Infrastructure failures are `Err` from [`SubmissionPipeline::submit`];
/// this type only covers requests the pipeline ran to a decision.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Document rendered, completed and reported
    Completed(SubmissionResult),

    /// Cross-validation failed; nothing was rendered or persisted
    Rejected { status: u16, error: ValidationError },
}

/// Collaborator bundle and policy for the submission pipeline
pub struct SubmissionPipeline {
    router: Arc<JourneyRouter>,
    cross: CrossValidator,
    renderer: Arc<dyn RenderingService>,
    sessions: Arc<dyn SessionCache>,
    resume_links: Arc<dyn ResumeLinkStore>,
    monitoring: Arc<dyn MonitoringClient>,
    blocking: Arc<dyn BlockingStatusCheck>,
    datahub: Arc<dyn DataHubClient>,
    eu_catch: Arc<dyn EuCatchClient>,
    submission: SubmissionConfig,
    render_container: String,
    blocking_flag: String,
}

impl SubmissionPipeline {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        router: Arc<JourneyRouter>,
        cross: CrossValidator,
        renderer: Arc<dyn RenderingService>,
        sessions: Arc<dyn SessionCache>,
        resume_links: Arc<dyn ResumeLinkStore>,
        monitoring: Arc<dyn MonitoringClient>,
        blocking: Arc<dyn BlockingStatusCheck>,
        datahub: Arc<dyn DataHubClient>,
        eu_catch: Arc<dyn EuCatchClient>,
        submission: SubmissionConfig,
        render_container: String,
        blocking_flag: String,
    ) -> Self {
        Self {
            router,
            cross,
            renderer,
            sessions,
            resume_links,
            monitoring,
            blocking,
            datahub,
            eu_catch,
            submission,
            render_container,
            blocking_flag,
        }
    }

    /// Runs one draft through the full submission pipeline
    ///
    /// # Errors
    ///
    /// Propagates store and rendering failures; once the draft is marked
    /// complete no error is returned, whatever the reporting collaborators
    /// do.
    pub async fn submit(&self, ctx: &SubmissionContext) -> Result<SubmissionOutcome> {
        let journey_type = JourneyType::resolve(&ctx.journey);
        let Some(repository) = self.router.repository_for(journey_type) else {
            return Err(HarbourError::Submission(format!(
                "journey {} cannot be submitted",
                ctx.journey
            )));
        };

        // LOADED
        let draft = repository
            .get_draft(&ctx.user, &ctx.document_number, &ctx.contact)
            .await?
            .ok_or_else(|| {
                HarbourError::Submission(format!(
                    "no draft found for document {}",
                    ctx.document_number
                ))
            })?;

        tracing::info!(
            document_number = %ctx.document_number,
            journey = %ctx.journey,
            "Submission started"
        );

        // VALIDATED
        let lines = lines_for(&draft.export_data);
        if let Some(error) = self
            .cross
            .validate_catches(
                journey_type,
                &ctx.document_number,
                &ctx.user,
                &ctx.contact,
                &lines,
            )
            .await?
        {
            repository
                .invalidate_draft_cache(&ctx.user, &ctx.document_number, &ctx.contact)
                .await?;
            return Ok(SubmissionOutcome::Rejected { status: 400, error });
        }

        // RENDERED
        let rendered = self
            .renderer
            .generate_and_upload(RenderRequest {
                container: &self.render_container,
                document_type: journey_type.label(),
                document_number: &ctx.document_number,
                export_data: &draft.export_data,
                exporter: draft.export_data.exporter(),
            })
            .await?;

        // PERSISTED: completion metadata first, then transient state goes
        repository
            .complete_draft(&ctx.document_number, &rendered.uri, &ctx.submitter_email)
            .await?;
        self.clean_up(ctx, repository.as_ref()).await;

        // REPORTED
        self.report(ctx, &draft, &rendered.uri).await;

        // CLEANED
        tracing::info!(
            document_number = %ctx.document_number,
            document_uri = %rendered.uri,
            "Submission complete"
        );

        Ok(SubmissionOutcome::Completed(SubmissionResult {
            document_uri: rendered.uri,
            document_number: ctx.document_number.clone(),
        }))
    }

    /// Reports a completed submission to the downstream collaborators
    ///
    /// Every collaborator failure is caught here and logged exactly once
    /// with the document number; none of them can fail the submission.
    async fn report(&self, ctx: &SubmissionContext, draft: &Draft, document_uri: &str) {
        let blocked = match self
            .blocking
            .get_blocking_status(&ctx.user, &self.blocking_flag)
            .await
        {
            Ok(blocked) => blocked,
            Err(err) => {
                tracing::warn!(
                    document_number = %ctx.document_number,
                    error = %err,
                    "Blocking status lookup failed, assuming unblocked"
                );
                false
            }
        };

        let action_code = if blocked {
            ACTION_SUBMIT_BLOCKED
        } else {
            ACTION_SUBMIT
        };

        let description = format!(
            "{} {} submitted",
            draft.journey_type().label(),
            ctx.document_number
        );
        if let Err(err) = self
            .monitoring
            .post_event_data(MonitoringEvent {
                user: ctx.user.as_str(),
                description: &description,
                correlation_path: &ctx.correlation_path,
                origin_ip: ctx.origin_ip.as_deref(),
                action_code,
            })
            .await
        {
            tracing::error!(
                document_number = %ctx.document_number,
                error = %err,
                "Monitoring event failed after submission"
            );
        }

        let records = build_submission_records(draft, Utc::now());
        if let Err(err) = self.datahub.report_document_submitted(&records).await {
            tracing::error!(
                document_number = %ctx.document_number,
                error = %err,
                "Data hub report failed after submission"
            );
        }

        let eu_bound = draft
            .export_data
            .destination()
            .map(|country| {
                self.submission
                    .is_eu_destination(&country.official_country_name)
            })
            .unwrap_or(false);
        if eu_bound {
            if let Err(err) = self
                .eu_catch
                .submit_to_catch_system(&ctx.document_number, document_uri)
                .await
            {
                tracing::error!(
                    document_number = %ctx.document_number,
                    error = %err,
                    "EU catch system submission failed after submission"
                );
            }
        }
    }

    /// Clears transient state once the draft is complete
    ///
    /// Cleanup failures are logged, not surfaced; the submission already
    /// succeeded.
    async fn clean_up(&self, ctx: &SubmissionContext, repository: &dyn crate::adapters::store::DraftRepository) {
        if let Err(err) = self
            .sessions
            .clear_journey(&ctx.user, &ctx.contact, &ctx.journey)
            .await
        {
            tracing::warn!(
                document_number = %ctx.document_number,
                error = %err,
                "Session cleanup failed"
            );
        }

        if let Err(err) = repository
            .invalidate_draft_cache(&ctx.user, &ctx.document_number, &ctx.contact)
            .await
        {
            tracing::warn!(
                document_number = %ctx.document_number,
                error = %err,
                "Draft cache invalidation failed"
            );
        }

        if let Err(err) = self
            .resume_links
            .remove_link(&ctx.user, &ctx.document_number)
            .await
        {
            tracing::warn!(
                document_number = %ctx.document_number,
                error = %err,
                "Resume link removal failed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::reference::{
        CompletedDocumentIndex, CompletedDocumentSnapshot, SourceProduct,
    };
    use crate::adapters::render::RenderedDocument;
    use crate::adapters::store::{
        DraftRepository, InMemoryDraftStore, InMemoryResumeLinkStore, InMemorySessionCache,
    };
    use crate::core::submission::records::SubmissionRecord;
    use crate::domain::draft::{
        CatchEntry, CertificateType, Country, DraftStatus, ExportPayload, ProcessingStatementData,
    };
    use crate::domain::errors::{RenderError, ReportingError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct StaticRenderer {
        fail: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RenderingService for StaticRenderer {
        async fn generate_and_upload(
            &self,
            request: RenderRequest<'_>,
        ) -> Result<RenderedDocument> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(RenderError::ConnectionFailed("render down".to_string()).into());
            }
            Ok(RenderedDocument {
                uri: format!("https://store.example/docs/{}.pdf", request.document_number),
            })
        }
    }

    #[derive(Default)]
    struct RecordingMonitoring {
        actions: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl MonitoringClient for RecordingMonitoring {
        async fn post_event_data(&self, event: MonitoringEvent<'_>) -> Result<()> {
            self.actions
                .lock()
                .unwrap()
                .push(event.action_code.to_string());
            if self.fail {
                return Err(ReportingError::ConnectionFailed("monitoring down".to_string()).into());
            }
            Ok(())
        }
    }

    struct StaticBlocking(bool);

    #[async_trait]
    impl BlockingStatusCheck for StaticBlocking {
        async fn get_blocking_status(&self, _user: &UserPrincipal, _flag: &str) -> Result<bool> {
            Ok(self.0)
        }
    }

    #[derive(Default)]
    struct RecordingDataHub {
        batches: Mutex<Vec<Vec<SubmissionRecord>>>,
        fail: bool,
    }

    #[async_trait]
    impl DataHubClient for RecordingDataHub {
        async fn report_document_submitted(&self, records: &[SubmissionRecord]) -> Result<()> {
            self.batches.lock().unwrap().push(records.to_vec());
            if self.fail {
                return Err(ReportingError::Rejected {
                    status: 503,
                    message: "maintenance".to_string(),
                }
                .into());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingEuCatch {
        submissions: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl EuCatchClient for RecordingEuCatch {
        async fn submit_to_catch_system(
            &self,
            document_number: &DocumentNumber,
            _document_uri: &str,
        ) -> Result<()> {
            self.submissions
                .lock()
                .unwrap()
                .push(document_number.as_str().to_string());
            Ok(())
        }
    }

    struct Fixture {
        pipeline: SubmissionPipeline,
        store: Arc<InMemoryDraftStore>,
        monitoring: Arc<RecordingMonitoring>,
        datahub: Arc<RecordingDataHub>,
        eu_catch: Arc<RecordingEuCatch>,
    }

    fn valid_entry() -> CatchEntry {
        CatchEntry {
            id: Some("GBR-2022-CC-0123456789-abc123def".to_string()),
            catch_certificate_number: "GBR-2022-CC-0123456789".to_string(),
            catch_certificate_type: CertificateType::Uk,
            species: "Atlantic cod (COD)".to_string(),
            species_code: Some("COD".to_string()),
            scientific_name: None,
            total_weight_landed: Some("40".to_string()),
            export_weight_before_processing: Some("30".to_string()),
            export_weight_after_processing: Some("25".to_string()),
        }
    }

    fn draft(destination: &str, entries: Vec<CatchEntry>) -> Draft {
        Draft::new(
            DocumentNumber::new("GBR-2024-PS-1").unwrap(),
            UserPrincipal::new("user-1").unwrap(),
            ContactId::new("contact-1").unwrap(),
            ExportPayload::ProcessingStatement(ProcessingStatementData {
                catches: entries,
                exported_to: Some(Country {
                    official_country_name: destination.to_string(),
                    iso_code: None,
                }),
                ..Default::default()
            }),
        )
    }

    async fn fixture(seeded: Draft, render_fails: bool, datahub_fails: bool, blocked: bool) -> Fixture {
        let store = Arc::new(InMemoryDraftStore::new());
        store.seed(seeded).await;

        let reference = Arc::new(CompletedDocumentIndex::new(vec![
            CompletedDocumentSnapshot {
                certificate_number: "GBR-2022-CC-0123456789".to_string(),
                owner: "user-1".to_string(),
                completed: true,
                products: vec![SourceProduct {
                    species: "Atlantic cod (COD)".to_string(),
                    species_code: Some("COD".to_string()),
                    total_weight: 40.0,
                }],
            },
        ]));

        let sessions = Arc::new(InMemorySessionCache::new());
        let router = Arc::new(JourneyRouter::new(
            store.clone(),
            Arc::new(InMemoryDraftStore::new()),
            sessions.clone(),
            reference.clone(),
        ));

        let monitoring = Arc::new(RecordingMonitoring {
            fail: false,
            ..Default::default()
        });
        let datahub = Arc::new(RecordingDataHub {
            fail: datahub_fails,
            ..Default::default()
        });
        let eu_catch = Arc::new(RecordingEuCatch::default());

        let pipeline = SubmissionPipeline::new(
            router,
            CrossValidator::new(reference.clone(), reference),
            Arc::new(StaticRenderer {
                fail: render_fails,
                calls: AtomicUsize::new(0),
            }),
            sessions,
            Arc::new(InMemoryResumeLinkStore::new()),
            monitoring.clone(),
            Arc::new(StaticBlocking(blocked)),
            datahub.clone(),
            eu_catch.clone(),
            SubmissionConfig {
                eu_countries: vec!["SPAIN".to_string(), "FRANCE".to_string()],
            },
            "export-documents".to_string(),
            "accountBlocked".to_string(),
        );

        Fixture {
            pipeline,
            store,
            monitoring,
            datahub,
            eu_catch,
        }
    }

    fn context() -> SubmissionContext {
        SubmissionContext {
            user: UserPrincipal::new("user-1").unwrap(),
            contact: ContactId::new("contact-1").unwrap(),
            document_number: DocumentNumber::new("GBR-2024-PS-1").unwrap(),
            journey: JourneyName::new("processingStatement").unwrap(),
            submitter_email: "exporter@example.com".to_string(),
            correlation_path: "/v1/export-certificates/submit".to_string(),
            origin_ip: Some("10.0.0.1".to_string()),
        }
    }

    #[tokio::test]
    async fn test_happy_path_completes_and_reports() {
        let fixture = fixture(draft("SPAIN", vec![valid_entry()]), false, false, false).await;
        let ctx = context();

        let outcome = fixture.pipeline.submit(&ctx).await.unwrap();
        let SubmissionOutcome::Completed(result) = outcome else {
            panic!("expected completion");
        };
        assert_eq!(
            result.document_uri,
            "https://store.example/docs/GBR-2024-PS-1.pdf"
        );

        let stored = fixture
            .store
            .get_draft(&ctx.user, &ctx.document_number, &ctx.contact)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, DraftStatus::Complete);
        assert_eq!(
            stored.submitted_by_email.as_deref(),
            Some("exporter@example.com")
        );

        assert_eq!(
            fixture.monitoring.actions.lock().unwrap().as_slice(),
            ["SUBMIT"]
        );
        assert_eq!(fixture.datahub.batches.lock().unwrap().len(), 1);
        // SPAIN is configured EU; the catch system hears about it
        assert_eq!(
            fixture.eu_catch.submissions.lock().unwrap().as_slice(),
            ["GBR-2024-PS-1"]
        );
    }

    #[tokio::test]
    async fn test_validation_failure_rejects_and_invalidates_once() {
        let mut entry = valid_entry();
        entry.catch_certificate_number = "GBR-0000".to_string();
        let fixture = fixture(draft("SPAIN", vec![entry]), false, false, false).await;
        let ctx = context();

        let outcome = fixture.pipeline.submit(&ctx).await.unwrap();
        let SubmissionOutcome::Rejected { status, error } = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(status, 400);
        assert_eq!(error.key, "psCatchCertificateNotValid");

        // Nothing rendered or reported; draft stays DRAFT
        let stored = fixture
            .store
            .get_draft(&ctx.user, &ctx.document_number, &ctx.contact)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, DraftStatus::Draft);
        assert!(fixture.monitoring.actions.lock().unwrap().is_empty());
        assert!(fixture.datahub.batches.lock().unwrap().is_empty());
        assert_eq!(fixture.store.invalidation_count(&ctx.document_number).await, 1);
    }

    #[tokio::test]
    async fn test_render_failure_is_fatal() {
        let fixture = fixture(draft("SPAIN", vec![valid_entry()]), true, false, false).await;

        let err = fixture.pipeline.submit(&context()).await.unwrap_err();
        assert!(matches!(err, HarbourError::Render(_)));

        // Draft untouched, nothing reported
        assert!(fixture.monitoring.actions.lock().unwrap().is_empty());
        assert!(fixture.datahub.batches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_datahub_failure_does_not_fail_submission() {
        let fixture = fixture(draft("SPAIN", vec![valid_entry()]), false, true, false).await;
        let ctx = context();

        let outcome = fixture.pipeline.submit(&ctx).await.unwrap();
        assert!(matches!(outcome, SubmissionOutcome::Completed(_)));

        // The hub was attempted exactly once, the EU report still happened
        assert_eq!(fixture.datahub.batches.lock().unwrap().len(), 1);
        assert_eq!(fixture.eu_catch.submissions.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_non_eu_destination_never_reaches_catch_system() {
        let fixture = fixture(draft("INDIA", vec![valid_entry()]), false, false, false).await;

        let outcome = fixture.pipeline.submit(&context()).await.unwrap();
        assert!(matches!(outcome, SubmissionOutcome::Completed(_)));
        assert!(fixture.eu_catch.submissions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blocked_account_selects_blocked_action_code() {
        let fixture = fixture(draft("SPAIN", vec![valid_entry()]), false, false, true).await;

        let outcome = fixture.pipeline.submit(&context()).await.unwrap();
        // The flag changes the monitoring action only; submission proceeds
        assert!(matches!(outcome, SubmissionOutcome::Completed(_)));
        assert_eq!(
            fixture.monitoring.actions.lock().unwrap().as_slice(),
            ["SUBMIT_BLOCKED_ACCOUNT"]
        );
    }

    #[tokio::test]
    async fn test_missing_draft_is_an_error() {
        let fixture = fixture(draft("SPAIN", vec![valid_entry()]), false, false, false).await;
        let mut ctx = context();
        ctx.document_number = DocumentNumber::new("GBR-2024-PS-404").unwrap();

        let err = fixture.pipeline.submit(&ctx).await.unwrap_err();
        assert!(matches!(err, HarbourError::Submission(_)));
    }

    #[tokio::test]
    async fn test_session_journey_cannot_be_submitted() {
        let fixture = fixture(draft("SPAIN", vec![valid_entry()]), false, false, false).await;
        let mut ctx = context();
        ctx.journey = JourneyName::new("favourites").unwrap();

        let err = fixture.pipeline.submit(&ctx).await.unwrap_err();
        assert!(matches!(err, HarbourError::Submission(_)));
    }
}
