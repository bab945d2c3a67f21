//! DebuggingSession repository trait.
//!
//! Defines the interface for reading and writing debugging sessions on the
//! remote platform.

use super::model::{DebuggingSession, NewDebuggingSession, SessionUpdate};
use super::query::SessionQuery;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for the remote `DebuggingSession` collection.
///
/// The platform owns the records; implementations only translate these calls
/// into requests and map failures onto [`crate::CodeTutorError`]. Nothing is
/// retried or cached.
#[async_trait]
pub trait DebuggingSessionRepository: Send + Sync {
    /// Fetches every record in the collection.
    async fn list_sessions(&self) -> Result<Vec<DebuggingSession>>;

    /// Fetches the records matching `query`.
    async fn filter_sessions(&self, query: &SessionQuery) -> Result<Vec<DebuggingSession>>;

    /// Fetches a single record.
    ///
    /// # Returns
    ///
    /// - `Ok(DebuggingSession)`: Record found
    /// - `Err(CodeTutorError::NotFound)`: The platform has no record with this id
    async fn get_session(&self, id: &str) -> Result<DebuggingSession>;

    /// Creates a record and returns it as stored by the platform.
    async fn create_session(&self, session: &NewDebuggingSession) -> Result<DebuggingSession>;

    /// Overwrites the fields in `update` on the record `id`.
    ///
    /// Returns the record as echoed back by the platform. There is no
    /// confirmation of which fields were accepted.
    async fn update_session(&self, id: &str, update: &SessionUpdate) -> Result<DebuggingSession>;

    /// Rates the most recent session created by `created_by`.
    ///
    /// Returns `Ok(None)` when the user has no sessions yet.
    async fn rate_latest_session(
        &self,
        created_by: &str,
        rating: u8,
    ) -> Result<Option<DebuggingSession>> {
        let query = SessionQuery::by_creator(created_by).newest_first().limit(1);
        let latest = self.filter_sessions(&query).await?.into_iter().next();

        let Some(id) = latest.and_then(|session| session.id) else {
            return Ok(None);
        };

        let update = SessionUpdate::new().user_satisfaction(rating);
        self.update_session(&id, &update).await.map(Some)
    }
}
