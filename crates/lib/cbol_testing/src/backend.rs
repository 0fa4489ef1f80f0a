//! In-process fake of the CBOL backend.
//!
//! Serves canned responses keyed by method and path, and records every
//! request it sees so tests can assert on headers, bodies and call counts.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Path prefix the fake mounts the API under.
pub const API_PREFIX: &str = "/api";

/// A request as the fake backend saw it. `path` excludes [`API_PREFIX`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
struct Canned {
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

#[derive(Default)]
struct FakeState {
    responses: Mutex<HashMap<(Method, String), Canned>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct FakeBackend {
    addr: SocketAddr,
    state: Arc<FakeState>,
    server: JoinHandle<()>,
}

impl FakeBackend {
    /// Bind to an ephemeral local port and start serving.
    pub async fn start() -> Self {
        let state = Arc::new(FakeState::default());
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind fake backend");
        let addr = listener.local_addr().expect("local addr");
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake backend serve");
        });

        Self {
            addr,
            state,
            server,
        }
    }

    /// Base URL to point the client at, including [`API_PREFIX`].
    pub fn base_url(&self) -> String {
        format!("http://{}{API_PREFIX}", self.addr)
    }

    /// Answer `method path` with a JSON body.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        self.insert(method, path, status, "application/json", body.to_string());
    }

    /// Answer `method path` with a plain-text body.
    pub fn respond_text(&self, method: Method, path: &str, status: u16, body: &str) {
        self.insert(method, path, status, "text/plain; charset=utf-8", body.to_string());
    }

    fn insert(&self, method: Method, path: &str, status: u16, content_type: &'static str, body: String) {
        let canned = Canned {
            status: StatusCode::from_u16(status).expect("valid status"),
            content_type,
            body,
        };
        self.state
            .responses
            .lock()
            .unwrap()
            .insert((method, path.to_string()), canned);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    /// Requests matching `method path`.
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn handle(
    State(state): State<Arc<FakeState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or(uri.path())
        .to_string();

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    });

    let canned = state
        .responses
        .lock()
        .unwrap()
        .get(&(method, path))
        .cloned();

    match canned {
        Some(c) => (c.status, [(CONTENT_TYPE, c.content_type)], c.body).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(CONTENT_TYPE, "application/json")],
            r#"{"message":"no canned response"}"#,
        )
            .into_response(),
    }
}
