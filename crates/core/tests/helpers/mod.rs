//! Test harness for backend integration tests.
//!
//! Serves a scripted stand-in for the search backend with `axum` on an ephemeral
//! port, records every request body, and hands out an `HttpBackend` pointed at it.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use facetscope_core::{ClientConfig, HttpBackend, Session};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Canned reply for one endpoint.
#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Value,
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Self { status: StatusCode::OK, body }
    }

    pub fn status(status: StatusCode) -> Self {
        Self { status, body: json!({ "detail": "scripted failure" }) }
    }
}

#[derive(Default)]
struct MockState {
    replies: Mutex<HashMap<&'static str, Reply>>,
    requests: Mutex<Vec<(&'static str, Value)>>,
}

pub struct MockBackend {
    state: Arc<MockState>,
    pub base_url: String,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .route("/api/search", post(search))
            .route("/api/update-document", post(update))
            .route("/api/preview", post(preview))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock backend crashed");
        });

        MockBackend { state, base_url: format!("http://{addr}") }
    }

    /// Script the reply for an endpoint (`"search"`, `"update"`, `"preview"`).
    pub fn reply(&self, endpoint: &'static str, reply: Reply) {
        self.state.replies.lock().unwrap().insert(endpoint, reply);
    }

    /// Bodies received by an endpoint, in arrival order.
    pub fn requests(&self, endpoint: &str) -> Vec<Value> {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(e, _)| *e == endpoint)
            .map(|(_, body)| body.clone())
            .collect()
    }

    pub fn client(&self) -> HttpBackend {
        HttpBackend::new(ClientConfig { base_url: self.base_url.clone(), timeout_secs: 5 })
            .expect("Mock backend URL is valid")
    }

    pub fn session(&self) -> Session<HttpBackend> {
        Session::new(self.client())
    }
}

fn record(state: &MockState, endpoint: &'static str, body: Value) -> (StatusCode, Json<Value>) {
    state.requests.lock().unwrap().push((endpoint, body));
    let reply = state
        .replies
        .lock()
        .unwrap()
        .get(endpoint)
        .cloned()
        .unwrap_or_else(|| Reply::status(StatusCode::NOT_IMPLEMENTED));
    (reply.status, Json(reply.body))
}

async fn search(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    record(&state, "search", body)
}

async fn update(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    record(&state, "update", body)
}

async fn preview(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    record(&state, "preview", body)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn document(id: &str, agent_id: &str, client: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Deck {id}"),
        "text": format!("Full text of {id}"),
        "metadata": {
            "agent_id": agent_id,
            "artifact_type": "Sales Proposals",
            "business_date": "2024-02",
            "client_name": client,
            "industry": "Retail",
            "is_client_specific": "True",
            "language": "English",
            "purpose": "Sales & Business Development",
            "topic": "renewal",
            "owner": "team-b"
        }
    })
}

pub fn search_reply(docs: Vec<Value>) -> Reply {
    Reply::ok(json!({
        "total": docs.len(),
        "results": docs,
        "query": "",
        "applied_filters": {}
    }))
}

pub fn slides(count: u32) -> Value {
    let data: Vec<Value> = (1..=count)
        .map(|n| json!({ "slide_number": n, "image_url": format!("/previews/{n}.png"), "text": "", "metadata": {} }))
        .collect();
    json!({ "success": true, "preview_data": data })
}
