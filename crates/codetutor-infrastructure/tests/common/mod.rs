//! In-process HTTP server that records every request and replays canned
//! responses in order.

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::IntoResponse;
use codetutor_core::config::ApiConfig;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

pub const TEST_APP_ID: &str = "test-app";
pub const TEST_API_KEY: &str = "test-key";

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }
}

#[derive(Clone, Default)]
struct ServerState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
}

pub struct CaptureServer {
    pub base_url: String,
    state: ServerState,
}

impl CaptureServer {
    /// Starts a server that answers with `responses` in order, then `200 []`.
    pub async fn start(responses: Vec<(u16, &str)>) -> Self {
        let state = ServerState::default();
        {
            let mut queue = state.responses.lock().unwrap();
            for (status, body) in responses {
                queue.push_back((StatusCode::from_u16(status).unwrap(), body.to_string()));
            }
        }

        let app = Router::new().fallback(capture).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(TEST_APP_ID, TEST_API_KEY).with_base_url(&self.base_url)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn capture(
    State(state): State<ServerState>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    state.requests.lock().unwrap().push(CapturedRequest {
        method,
        path: uri.path().to_string(),
        query,
        headers,
        body,
    });

    let (status, body) = state
        .responses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or((StatusCode::OK, "[]".to_string()));

    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
