//! Business validation error values
//!
//! Business-rule failures are data, not `Err` values: rules append
//! [`ValidationError`] entries to a list in insertion order and the caller
//! decides whether the list gates further processing. Uniqueness is not
//! enforced; the same key may appear across rule categories.

use serde::{Deserialize, Serialize};

/// One business validation failure with a stable machine-readable key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Stable machine-readable key, e.g. `dateFieldError`
    pub key: String,

    /// Human-readable message
    pub message: String,

    /// Optional structured context for diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

impl ValidationError {
    /// Creates a validation error without context
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
            context: None,
        }
    }

    /// Attaches structured context
    pub fn with_context(mut self, context: serde_json::Value) -> Self {
        self.context = Some(context);
        self
    }
}

/// True iff the error list is non-empty
///
/// Used as the gate before proceeding to finalize a submission.
pub fn check_validation_errors(errors: &[ValidationError]) -> bool {
    !errors.is_empty()
}
