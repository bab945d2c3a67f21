//! Base44SessionRepository - REST implementation of the DebuggingSession collection.
//!
//! Every call is a single request to
//! `{base}/api/apps/{app_id}/entities/DebuggingSession[/{id}]`, authenticated
//! with the `api_key` header. Responses are checked before their body is
//! parsed; nothing is retried.

use async_trait::async_trait;
use codetutor_core::config::ApiConfig;
use codetutor_core::session::{
    DEBUGGING_SESSION_ENTITY, DebuggingSession, DebuggingSessionRepository, NewDebuggingSession,
    SessionQuery, SessionUpdate,
};
use codetutor_core::{CodeTutorError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

const API_KEY_HEADER: &str = "api_key";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Repository that talks to the platform's entity API.
#[derive(Clone)]
pub struct Base44SessionRepository {
    client: Client,
    config: ApiConfig,
}

impl Base44SessionRepository {
    /// Creates a repository with its own connection pool.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Creates a repository sharing an existing client.
    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn collection_url(&self) -> Result<Url> {
        Url::parse(&self.config.sessions_url()).map_err(|e| {
            CodeTutorError::config(format!(
                "Invalid base44 base URL '{}': {}",
                self.config.base_url(),
                e
            ))
        })
    }

    fn record_url(&self, id: &str) -> Result<Url> {
        if id.trim().is_empty() {
            return Err(CodeTutorError::validation(
                "DebuggingSession id must not be empty",
            ));
        }
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|_| CodeTutorError::config("base44 base URL cannot carry a path"))?
            .push(id);
        Ok(url)
    }

    /// Starts a request carrying the credential and JSON content type.
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!("[Base44] {} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .header(API_KEY_HEADER, self.config.api_key())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);

        if let Some(timeout) = self.config.request_timeout() {
            request = request.timeout(timeout);
        }
        request
    }

    fn with_json_body<B: Serialize + ?Sized>(
        request: RequestBuilder,
        body: &B,
    ) -> Result<RequestBuilder> {
        Ok(request.body(serde_json::to_vec(body)?))
    }

    /// Sends the request, rejects non-success statuses and parses the body.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, action: &str) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            CodeTutorError::network(format!("Failed to {}: {}", action, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("[Base44] Failed to {} (status: {})", action, status);
            return Err(CodeTutorError::from_status(status.as_u16(), error_text));
        }

        let bytes = response.bytes().await.map_err(|e| {
            CodeTutorError::network(format!("Failed to read response to {}: {}", action, e))
        })?;

        serde_json::from_slice(&bytes).map_err(|e| CodeTutorError::Serialization {
            format: "JSON".to_string(),
            message: format!("Failed to parse response to {}: {}", action, e),
        })
    }
}

/// By-id operations report a 404 as the entity being absent.
fn not_found_for(id: &str) -> impl FnOnce(CodeTutorError) -> CodeTutorError + '_ {
    move |err| match err {
        CodeTutorError::Remote { status: 404, .. } => {
            CodeTutorError::not_found(DEBUGGING_SESSION_ENTITY, id)
        }
        other => other,
    }
}

#[async_trait]
impl DebuggingSessionRepository for Base44SessionRepository {
    async fn list_sessions(&self) -> Result<Vec<DebuggingSession>> {
        let request = self.request(Method::GET, self.collection_url()?);
        let sessions: Vec<DebuggingSession> = self.send(request, "list sessions").await?;
        tracing::debug!("[Base44] Fetched {} sessions", sessions.len());
        Ok(sessions)
    }

    async fn filter_sessions(&self, query: &SessionQuery) -> Result<Vec<DebuggingSession>> {
        let pairs = query.to_query_pairs()?;
        let mut url = self.collection_url()?;
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        self.send(self.request(Method::GET, url), "filter sessions")
            .await
    }

    async fn get_session(&self, id: &str) -> Result<DebuggingSession> {
        let request = self.request(Method::GET, self.record_url(id)?);
        self.send(request, "get session")
            .await
            .map_err(not_found_for(id))
    }

    async fn create_session(&self, session: &NewDebuggingSession) -> Result<DebuggingSession> {
        let request = self.request(Method::POST, self.collection_url()?);
        let request = Self::with_json_body(request, session)?;
        self.send(request, "create session").await
    }

    async fn update_session(&self, id: &str, update: &SessionUpdate) -> Result<DebuggingSession> {
        let request = self.request(Method::PUT, self.record_url(id)?);
        let request = Self::with_json_body(request, update)?;
        let fields: Vec<&'static str> = update.fields().map(Into::into).collect();
        tracing::debug!("[Base44] Updating [{}] on session {}", fields.join(", "), id);
        self.send(request, "update session")
            .await
            .map_err(not_found_for(id))
    }
}
