//! Validate command implementation
//!
//! Runs field-level business validation over a journey payload file, and
//! optionally the cross-document checks against a reference snapshot file.

use crate::cli::commands::{read_payload, read_reference_index};
use crate::core::rules::cross::{lines_for, CrossValidator};
use crate::core::rules::validate_payload;
use crate::domain::ids::{ContactId, DocumentNumber, UserPrincipal};
use crate::domain::validation::check_validation_errors;
use chrono::Utc;
use clap::Args;
use std::sync::Arc;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the journey payload JSON file
    #[arg(long)]
    pub payload: String,

    /// Path to a completed-document snapshot JSON file; enables the
    /// cross-document checks
    #[arg(long)]
    pub reference: Option<String>,

    /// Document number used in cross-check diagnostics
    #[arg(long, default_value = "GBR-0000-XX-0")]
    pub document_number: String,

    /// User principal the cross-checks run as
    #[arg(long, default_value = "local-user")]
    pub user: String,

    /// Contact the cross-checks run as
    #[arg(long, default_value = "local-contact")]
    pub contact: String,
}

impl ValidateArgs {
    /// Execute the validate command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(payload = %self.payload, "Validating payload");

        println!("🔍 Validating payload: {}", self.payload);
        println!();

        let payload = read_payload(&self.payload)?;

        let errors = validate_payload(&payload, Utc::now().date_naive());
        for error in &errors {
            match &error.context {
                Some(context) => println!("  ❌ {}: {} {}", error.key, error.message, context),
                None => println!("  ❌ {}: {}", error.key, error.message),
            }
        }

        let mut cross_failed = false;
        if self.reference.is_some() {
            let index = Arc::new(read_reference_index(self.reference.as_deref())?);
            let validator = CrossValidator::new(index.clone(), index);

            let document_number = DocumentNumber::new(&self.document_number)
                .map_err(|e| anyhow::anyhow!("Invalid document number: {e}"))?;
            let user = UserPrincipal::new(&self.user)
                .map_err(|e| anyhow::anyhow!("Invalid user principal: {e}"))?;
            let contact = ContactId::new(&self.contact)
                .map_err(|e| anyhow::anyhow!("Invalid contact: {e}"))?;

            let lines = lines_for(&payload);
            if let Some(error) = validator
                .validate_catches(
                    payload.journey_type(),
                    &document_number,
                    &user,
                    &contact,
                    &lines,
                )
                .await?
            {
                println!("  ❌ {}: {}", error.key, error.message);
                cross_failed = true;
            }
        }

        if !check_validation_errors(&errors) && !cross_failed {
            println!("✅ Payload passes validation");
            Ok(0)
        } else {
            println!();
            println!("❌ Validation failed");
            Ok(3) // Validation failure exit code
        }
    }
}
