//! Core business logic
//!
//! The layers, bottom up: [`rules`] (field, payload and cross-document
//! validation), [`project`] (front-end projection, address migration,
//! weight backfill, cloning), [`journey`] (state routing between draft
//! stores and the session cache) and [`submission`] (the pipeline that
//! turns a draft into a completed document).

pub mod journey;
pub mod project;
pub mod rules;
pub mod submission;
