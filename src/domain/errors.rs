//! Domain error types
//!
//! This module defines the error hierarchy for Harbour. All errors are
//! domain-specific and don't expose third-party types; collaborator failures
//! (stores, rendering, reporting) map into the sub-enums below.
//!
//! The split mirrors the pipeline's error taxonomy: business-rule failures
//! never travel through these types (they are [`super::validation`] values
//! returned to the caller), while infrastructure failures do.

use thiserror::Error;

/// Main Harbour error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum HarbourError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Draft / session store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Rendering service errors
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Reporting collaborator errors
    #[error("Reporting error: {0}")]
    Reporting(#[from] ReportingError),

    /// Submission pipeline errors
    #[error("Submission error: {0}")]
    Submission(String),

    /// Validation errors (structural, not business-rule)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Draft store and session cache errors
///
/// Errors that occur when reading or writing draft and session state.
/// These errors don't expose the backing storage engine's types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to connect to the store
    #[error("Failed to connect to store: {0}")]
    ConnectionFailed(String),

    /// Failed to read a draft
    #[error("Failed to read draft: {0}")]
    ReadFailed(String),

    /// Failed to upsert draft data
    #[error("Failed to upsert draft: {0}")]
    UpsertFailed(String),

    /// Failed to mark a draft complete
    #[error("Failed to complete draft: {0}")]
    CompleteFailed(String),

    /// Failed to invalidate a cached draft
    #[error("Failed to invalidate draft cache: {0}")]
    InvalidateFailed(String),

    /// Session cache read/write failure
    #[error("Session cache failure: {0}")]
    SessionFailed(String),

    /// Stored payload could not be decoded into the journey's shape
    #[error("Stored payload is not valid for the journey: {0}")]
    CorruptPayload(String),
}

/// Rendering service errors
///
/// Errors from the external document rendering collaborator. Rendering
/// failures are fatal to a submission; the pipeline propagates them uncaught.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Failed to reach the rendering service
    #[error("Failed to connect to rendering service: {0}")]
    ConnectionFailed(String),

    /// The rendering service rejected the request
    #[error("Rendering request rejected: {status} - {message}")]
    Rejected { status: u16, message: String },

    /// The rendering service returned no storage location
    #[error("Rendering response missing document location: {0}")]
    MissingLocation(String),

    /// Response could not be decoded
    #[error("Invalid response from rendering service: {0}")]
    InvalidResponse(String),

    /// Request timeout
    #[error("Rendering request timeout: {0}")]
    Timeout(String),
}

/// Reporting collaborator errors
///
/// Errors from the monitoring, data-submission-hub and EU catch-system
/// clients. The submission pipeline catches these during the REPORTED step
/// and logs them without failing the submission.
#[derive(Debug, Error)]
pub enum ReportingError {
    /// Failed to reach the collaborator
    #[error("Failed to connect to reporting collaborator: {0}")]
    ConnectionFailed(String),

    /// The collaborator rejected the report
    #[error("Report rejected: {status} - {message}")]
    Rejected { status: u16, message: String },

    /// Report payload could not be encoded
    #[error("Failed to encode report payload: {0}")]
    EncodeFailed(String),

    /// Request timeout
    #[error("Reporting request timeout: {0}")]
    Timeout(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for HarbourError {
    fn from(err: std::io::Error) -> Self {
        HarbourError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for HarbourError {
    fn from(err: serde_json::Error) -> Self {
        HarbourError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for HarbourError {
    fn from(err: toml::de::Error) -> Self {
        HarbourError::Configuration(format!("TOML parse error: {err}"))
    }
}
