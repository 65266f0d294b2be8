//! # Harbour - Export Document Submission Pipeline
//!
//! Harbour manages work-in-progress export certificate drafts and drives
//! them through validation, rendering and downstream reporting when the
//! exporter submits.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Routing** journey state between persistent draft stores and an
//!   ephemeral session cache
//! - **Projecting** stored drafts into the shape the form journey consumes,
//!   including legacy address migration and landed-weight backfill
//! - **Validating** drafts at field, payload and cross-document level
//! - **Submitting** drafts: render, complete, report, clean up
//!
//! ## Architecture
//!
//! Harbour follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (rules, projection, journeys, submission)
//! - [`adapters`] - External collaborators (stores, rendering, reporting,
//!   reference data)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use harbour::adapters::reference::CompletedDocumentIndex;
//! use harbour::adapters::store::{InMemoryDraftStore, InMemorySessionCache};
//! use harbour::core::journey::JourneyRouter;
//! use harbour::domain::ids::{ContactId, DocumentNumber, JourneyName, UserPrincipal};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let router = JourneyRouter::new(
//!         Arc::new(InMemoryDraftStore::new()),
//!         Arc::new(InMemoryDraftStore::new()),
//!         Arc::new(InMemorySessionCache::new()),
//!         Arc::new(CompletedDocumentIndex::default()),
//!     );
//!
//!     let journey = JourneyName::new("processingStatement")?;
//!     let user = UserPrincipal::new("user-1")?;
//!     let document = DocumentNumber::new("GBR-2024-PS-1")?;
//!     let contact = ContactId::new("contact-1")?;
//!
//!     let state = router.get(&journey, &user, &document, &contact).await?;
//!     println!("{state}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Infrastructure failures travel as [`domain::HarbourError`]; business-rule
//! failures are [`domain::validation::ValidationError`] values returned to
//! the caller:
//!
//! ```rust,no_run
//! use harbour::domain::HarbourError;
//!
//! fn example() -> Result<(), HarbourError> {
//!     let config = harbour::config::load_config("harbour.toml")?;
//!     config.validate().map_err(HarbourError::Configuration)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Harbour uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!(document_number = "GBR-2024-PS-1", "Submission started");
//! warn!("Blocking status lookup failed, assuming unblocked");
//! error!(error = "connection refused", "Data hub report failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
