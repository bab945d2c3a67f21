//! DebuggingSession domain module.
//!
//! # Module Structure
//!
//! - `model`: the remote record, its writable fields and write payloads
//! - `query`: filter/sort/limit parameters
//! - `repository`: repository trait for the remote collection

mod model;
mod query;
mod repository;

/// Entity name of the collection on the platform.
pub const DEBUGGING_SESSION_ENTITY: &str = "DebuggingSession";

// Re-export public API
pub use model::{DebuggingSession, NewDebuggingSession, SessionField, SessionUpdate};
pub use query::{NEWEST_FIRST, SessionQuery};
pub use repository::DebuggingSessionRepository;
