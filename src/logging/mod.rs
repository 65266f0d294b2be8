//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - JSON-formatted logs
//! - Configurable log levels
//! - Local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use harbour::logging::init_logging;
//! use harbour::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! tracing::error!(error = "Something went wrong", "Error occurred");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a submission
#[macro_export]
macro_rules! log_submission_start {
    ($document_number:expr, $journey:expr) => {
        tracing::info!(
            document_number = %$document_number,
            journey = $journey,
            "Starting submission"
        );
    };
}

/// Log the completion of a submission
#[macro_export]
macro_rules! log_submission_complete {
    ($document_number:expr, $uri:expr) => {
        tracing::info!(
            document_number = %$document_number,
            document_uri = %$uri,
            "Submission completed"
        );
    };
}

/// Log an error with context
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
