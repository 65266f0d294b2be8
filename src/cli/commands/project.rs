//! Project command implementation
//!
//! Prints the front-end projection of a journey payload: legacy address
//! migration, landed-weight backfill and projection-time date checks.

use crate::cli::commands::{read_payload, read_reference_index};
use crate::core::project::to_front_end;
use chrono::Utc;
use clap::Args;

/// Arguments for the project command
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Path to the journey payload JSON file
    #[arg(long)]
    pub payload: String,

    /// Path to a completed-document snapshot JSON file used for
    /// landed-weight backfill
    #[arg(long)]
    pub reference: Option<String>,

    /// Pretty-print the projected JSON
    #[arg(long)]
    pub pretty: bool,
}

impl ProjectArgs {
    /// Execute the project command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(payload = %self.payload, "Projecting payload");

        let payload = read_payload(&self.payload)?;
        let index = read_reference_index(self.reference.as_deref())?;

        let view = to_front_end(&payload, &index, Utc::now().date_naive());
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&view)?
        } else {
            serde_json::to_string(&view)?
        };
        println!("{rendered}");

        Ok(0)
    }
}
