//! Domain layer of the CodeTutor client.
//!
//! The remote platform owns every record; this crate only describes the
//! records, the operations a repository must offer, the navigation shell and
//! the progress figures derived from fetched sessions.

pub mod config;
pub mod error;
pub mod navigation;
pub mod progress;
pub mod secret;
pub mod session;

// Re-export common error type
pub use error::{CodeTutorError, Result};
