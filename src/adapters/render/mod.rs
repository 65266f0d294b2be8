//! Document rendering adapter
//!
//! The rendering collaborator turns a validated payload into the final
//! document artifact and uploads it to blob storage, returning the storage
//! location. Rendering failures are fatal to a submission.

use crate::domain::draft::{ExporterDetails, ExportPayload};
use crate::domain::errors::RenderError;
use crate::domain::ids::DocumentNumber;
use crate::domain::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request to render and upload one document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest<'a> {
    /// Storage container the artifact lands in
    pub container: &'a str,

    /// Uppercase document type label, e.g. `PROCESSING-STATEMENT`
    pub document_type: &'a str,

    /// Number the document is rendered under
    pub document_number: &'a DocumentNumber,

    /// Validated export payload
    pub export_data: &'a ExportPayload,

    /// Exporter details printed on the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exporter: Option<&'a ExporterDetails>,
}

/// Rendered artifact location
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDocument {
    /// Storage URI of the uploaded artifact
    pub uri: String,
}

/// Rendering collaborator seam
#[async_trait]
pub trait RenderingService: Send + Sync {
    /// Renders the document and uploads it to storage
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] wrapped in the domain error on connection
    /// failure, rejection, or a response missing the storage location.
    async fn generate_and_upload(&self, request: RenderRequest<'_>) -> Result<RenderedDocument>;
}

/// HTTP client for the rendering collaborator
pub struct HttpRenderingService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRenderingService {
    /// Creates a client against the given base URL
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| RenderError::ConnectionFailed(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl RenderingService for HttpRenderingService {
    async fn generate_and_upload(&self, request: RenderRequest<'_>) -> Result<RenderedDocument> {
        let url = format!("{}/v1/documents", self.base_url.trim_end_matches('/'));

        tracing::debug!(
            document_number = %request.document_number,
            document_type = request.document_type,
            container = request.container,
            "Requesting document render"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RenderError::Timeout(e.to_string())
                } else {
                    RenderError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RenderError::Rejected {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let rendered: RenderedDocument = response
            .json()
            .await
            .map_err(|e| RenderError::InvalidResponse(e.to_string()))?;

        if rendered.uri.trim().is_empty() {
            return Err(RenderError::MissingLocation(format!(
                "empty uri for document {}",
                request.document_number
            ))
            .into());
        }

        Ok(rendered)
    }
}
