//! Domain models and types for Harbour.
//!
//! This module contains the core domain models, types and business values
//! shared by every layer of the pipeline.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`DocumentNumber`], [`UserPrincipal`],
//!   [`ContactId`], [`JourneyName`])
//! - **Draft models** ([`Draft`], [`ExportPayload`], line items, plant
//!   address layouts)
//! - **Error types** ([`HarbourError`] and collaborator sub-enums)
//! - **Validation values** ([`ValidationError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Identifiers use the newtype pattern so different id kinds cannot be mixed:
//!
//! ```rust
//! use harbour::domain::{DocumentNumber, ContactId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let number = DocumentNumber::new("GBR-2024-PS-1")?;
//! let contact = ContactId::new("contact-9")?;
//! // let wrong: DocumentNumber = contact; // Compile error!
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Infrastructure failures return [`Result<T, HarbourError>`]; business-rule
//! failures are [`ValidationError`] values returned as data.

pub mod draft;
pub mod errors;
pub mod ids;
pub mod result;
pub mod validation;

// Re-export commonly used types for convenience
pub use draft::{
    CatchEntry, CertificateType, Country, Draft, DraftStatus, ExportPayload, ExporterDetails,
    JourneyType, PlantDetails, ProcessingStatementData, ProductEntry, StorageDocumentData,
    SubmissionResult,
};
pub use errors::{HarbourError, RenderError, ReportingError, StoreError};
pub use ids::{ContactId, DocumentNumber, JourneyName, UserPrincipal};
pub use result::Result;
pub use validation::{check_validation_errors, ValidationError};
