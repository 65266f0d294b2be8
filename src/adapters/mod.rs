//! External collaborator adapters
//!
//! Every external system sits behind a trait defined here: draft and
//! session storage ([`store`]), reference data for cross-validation and
//! weight backfill ([`reference`]), document rendering ([`render`]) and
//! post-submission reporting ([`reporting`]).

pub mod reference;
pub mod render;
pub mod reporting;
pub mod store;
