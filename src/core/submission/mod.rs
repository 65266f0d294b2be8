//! Submission orchestration
//!
//! [`pipeline`] drives a draft through validation, rendering, persistence
//! and reporting; [`records`] flattens a submitted draft into the rows the
//! data-submission hub consumes.

pub mod pipeline;
pub mod records;

pub use pipeline::{SubmissionContext, SubmissionOutcome, SubmissionPipeline};
pub use records::{build_submission_records, SubmissionRecord};
