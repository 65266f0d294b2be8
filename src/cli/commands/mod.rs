//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod init;
pub mod project;
pub mod submit;
pub mod validate;
pub mod validate_config;

use crate::adapters::reference::{CompletedDocumentIndex, CompletedDocumentSnapshot};
use crate::domain::draft::ExportPayload;
use std::fs;
use std::path::Path;

/// Reads a journey payload from a JSON file
pub(crate) fn read_payload(path: &str) -> anyhow::Result<ExportPayload> {
    let content = fs::read_to_string(Path::new(path))
        .map_err(|e| anyhow::anyhow!("Failed to read payload file '{path}': {e}"))?;
    let payload: ExportPayload = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Payload file '{path}' is not a valid journey payload: {e}"))?;
    Ok(payload)
}

/// Reads completed-document snapshots for reference-data checks
///
/// Missing path means an empty index; validation then fails any line that
/// references a domestic certificate.
pub(crate) fn read_reference_index(path: Option<&str>) -> anyhow::Result<CompletedDocumentIndex> {
    let Some(path) = path else {
        return Ok(CompletedDocumentIndex::default());
    };

    let content = fs::read_to_string(Path::new(path))
        .map_err(|e| anyhow::anyhow!("Failed to read reference file '{path}': {e}"))?;
    let snapshots: Vec<CompletedDocumentSnapshot> = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Reference file '{path}' is not a snapshot list: {e}"))?;
    Ok(CompletedDocumentIndex::new(snapshots))
}
