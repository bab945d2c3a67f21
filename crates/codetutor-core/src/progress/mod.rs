//! Learning progress derived from debugging sessions.
//!
//! Everything here is a pure function of a slice of sessions that the caller
//! has already fetched; nothing is stored.

mod summary;

pub use summary::{
    DayActivity, LanguageCount, Milestone, ProgressSummary, UNKNOWN_LANGUAGE, session_milestones,
    weekly_activity,
};
