//! Draft and session storage adapters
//!
//! [`traits`] defines the backend-agnostic storage contracts; [`memory`]
//! provides RwLock-backed implementations for tests and CLI flows.

pub mod memory;
pub mod traits;

pub use memory::{InMemoryDraftStore, InMemoryResumeLinkStore, InMemorySessionCache};
pub use traits::{DraftRepository, ResumeLinkStore, SessionCache};
