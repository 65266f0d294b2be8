//! Post-submission reporting adapters
//!
//! Three collaborators are told about a completed submission: the protective
//! monitoring service, the data-submission hub and, for EU-bound documents,
//! the EU catch-reporting system. All three are best-effort; the pipeline
//! catches their failures after the document is already complete.

use crate::config::SecretString;
use crate::core::submission::records::SubmissionRecord;
use crate::domain::errors::ReportingError;
use crate::domain::ids::{DocumentNumber, UserPrincipal};
use crate::domain::Result;
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Serialize;
use std::time::Duration;

/// One protective-monitoring event
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringEvent<'a> {
    /// Principal the event is attributed to
    pub user: &'a str,

    /// Human-readable event description
    pub description: &'a str,

    /// Request path the event correlates to
    pub correlation_path: &'a str,

    /// Originating IP, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_ip: Option<&'a str>,

    /// Action code, e.g. `SUBMIT` or `SUBMIT_BLOCKED_ACCOUNT`
    pub action_code: &'a str,
}

/// Protective monitoring seam
#[async_trait]
pub trait MonitoringClient: Send + Sync {
    /// Records one monitoring event
    async fn post_event_data(&self, event: MonitoringEvent<'_>) -> Result<()>;
}

/// Account blocking-status lookup
///
/// The flag only selects the monitoring action code; it never prevents a
/// submission.
#[async_trait]
pub trait BlockingStatusCheck: Send + Sync {
    /// True when the named flag is raised for the user
    async fn get_blocking_status(&self, user: &UserPrincipal, flag: &str) -> Result<bool>;
}

/// Data-submission-hub seam
#[async_trait]
pub trait DataHubClient: Send + Sync {
    /// Reports the flattened line records of a completed submission
    async fn report_document_submitted(&self, records: &[SubmissionRecord]) -> Result<()>;
}

/// EU catch-reporting system seam
#[async_trait]
pub trait EuCatchClient: Send + Sync {
    /// Submits a completed EU-bound document to the catch system
    async fn submit_to_catch_system(
        &self,
        document_number: &DocumentNumber,
        document_uri: &str,
    ) -> Result<()>;
}

fn reporting_client(timeout_seconds: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
        .map_err(|e| ReportingError::ConnectionFailed(e.to_string()).into())
}

fn map_send_error(e: reqwest::Error) -> ReportingError {
    if e.is_timeout() {
        ReportingError::Timeout(e.to_string())
    } else {
        ReportingError::ConnectionFailed(e.to_string())
    }
}

async fn check_status(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let message = response.text().await.unwrap_or_default();
    Err(ReportingError::Rejected {
        status: status.as_u16(),
        message,
    }
    .into())
}

/// HTTP client for the monitoring collaborator
///
/// Also answers blocking-status lookups; both live on the same service.
pub struct HttpMonitoringClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMonitoringClient {
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        Ok(Self {
            client: reporting_client(timeout_seconds)?,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl MonitoringClient for HttpMonitoringClient {
    async fn post_event_data(&self, event: MonitoringEvent<'_>) -> Result<()> {
        let url = format!("{}/v1/events", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .json(&event)
            .send()
            .await
            .map_err(map_send_error)?;
        check_status(response).await
    }
}

#[async_trait]
impl BlockingStatusCheck for HttpMonitoringClient {
    async fn get_blocking_status(&self, user: &UserPrincipal, flag: &str) -> Result<bool> {
        let url = format!(
            "{}/v1/flags/{}?user={}",
            self.base_url.trim_end_matches('/'),
            flag,
            user
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ReportingError::Rejected {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        response
            .json::<bool>()
            .await
            .map_err(|e| ReportingError::EncodeFailed(e.to_string()).into())
    }
}

/// HTTP client for the data-submission hub
pub struct HttpDataHubClient {
    client: reqwest::Client,
    base_url: String,
    submit_endpoint: String,
    api_key: Option<SecretString>,
}

impl HttpDataHubClient {
    pub fn new(
        base_url: impl Into<String>,
        submit_endpoint: impl Into<String>,
        api_key: Option<SecretString>,
        timeout_seconds: u64,
    ) -> Result<Self> {
        Ok(Self {
            client: reporting_client(timeout_seconds)?,
            base_url: base_url.into(),
            submit_endpoint: submit_endpoint.into(),
            api_key,
        })
    }
}

#[async_trait]
impl DataHubClient for HttpDataHubClient {
    async fn report_document_submitted(&self, records: &[SubmissionRecord]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let url = format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.submit_endpoint
        );

        let mut request = self.client.post(&url).json(records);
        if let Some(key) = &self.api_key {
            request = request.header("X-Api-Key", key.expose_secret().as_ref());
        }

        let response = request.send().await.map_err(map_send_error)?;
        check_status(response).await
    }
}

/// HTTP client for the EU catch-reporting system
pub struct HttpEuCatchClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEuCatchClient {
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        Ok(Self {
            client: reporting_client(timeout_seconds)?,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl EuCatchClient for HttpEuCatchClient {
    async fn submit_to_catch_system(
        &self,
        document_number: &DocumentNumber,
        document_uri: &str,
    ) -> Result<()> {
        let url = format!(
            "{}/v1/catch-certificates",
            self.base_url.trim_end_matches('/')
        );
        let body = serde_json::json!({
            "documentNumber": document_number.as_str(),
            "documentUri": document_uri,
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;
        check_status(response).await
    }
}
