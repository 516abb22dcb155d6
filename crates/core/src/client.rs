//! Backend access: the [`Backend`] seam, its `reqwest` implementation, and the
//! glue that turns view effects into completion actions.

use std::collections::VecDeque;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, Operation};
use crate::types::{PreviewRequest, PreviewResponse, SearchRequest, SearchResponse, UpdateRequest};
use crate::view::{Action, Effect, SearchView};

pub const SEARCH_PATH: &str = "/api/search";
pub const UPDATE_PATH: &str = "/api/update-document";
pub const PREVIEW_PATH: &str = "/api/preview";

/// The three calls the view makes. Contracts are owned by the backend; this
/// side only relies on status codes and the response shapes in [`crate::types`].
#[async_trait]
pub trait Backend: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ClientError>;

    /// Any 2xx counts as accepted. The body is ignored.
    async fn update_document(&self, request: &UpdateRequest) -> Result<(), ClientError>;

    async fn preview(&self, request: &PreviewRequest) -> Result<PreviewResponse, ClientError>;
}

// ---------------------------------------------------------------------------
// HTTP implementation
// ---------------------------------------------------------------------------

/// JSON-over-HTTP backend client. Cheap to clone; clones share a connection pool.
#[derive(Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        if reqwest::Url::parse(&config.base_url).is_err() {
            return Err(ClientError::InvalidUrl(config.base_url));
        }
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self { http: builder.build()?, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        operation: Operation,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ClientError> {
        let url = self.config.endpoint(path);
        debug!(url = url.as_str(), ?operation, "POST");
        let response = self
            .http
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { operation, status });
        }
        Ok(response)
    }

    async fn post_json<B, T>(&self, operation: Operation, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let bytes = self.post(operation, path, body).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ClientError> {
        self.post_json(Operation::Search, SEARCH_PATH, request).await
    }

    async fn update_document(&self, request: &UpdateRequest) -> Result<(), ClientError> {
        self.post(Operation::Update, UPDATE_PATH, request).await.map(|_| ())
    }

    async fn preview(&self, request: &PreviewRequest) -> Result<PreviewResponse, ClientError> {
        self.post_json(Operation::Preview, PREVIEW_PATH, request).await
    }
}

// ---------------------------------------------------------------------------
// Effect execution
// ---------------------------------------------------------------------------

/// Run one effect against the backend and return the action that completes it.
/// Errors become human-readable messages here; nothing escapes as a `Result`.
pub async fn perform<B: Backend + ?Sized>(backend: &B, effect: Effect) -> Action {
    match effect {
        Effect::Search { seq, request } => match backend.search(&request).await {
            Ok(response) => Action::SearchSucceeded { seq, response },
            Err(e) => Action::SearchFailed { seq, message: e.to_string() },
        },
        Effect::UpdateDocument { seq, request } => match backend.update_document(&request).await {
            Ok(()) => Action::SaveSucceeded { seq, doc_id: request.doc_id, metadata: request.metadata },
            Err(e) => Action::SaveFailed { seq, message: e.to_string() },
        },
        Effect::Preview { seq, request } => match backend.preview(&request).await {
            Ok(response) => Action::PreviewLoaded { seq, response },
            Err(e) => Action::PreviewFailed { seq, message: e.to_string() },
        },
    }
}

/// A [`SearchView`] wired to a backend. Each dispatch runs to quiescence: the
/// action is applied, any effect is performed, and its completion is applied.
pub struct Session<B> {
    view: SearchView,
    backend: B,
}

impl<B: Backend> Session<B> {
    pub fn new(backend: B) -> Self {
        Self { view: SearchView::new(), backend }
    }

    pub fn view(&self) -> &SearchView {
        &self.view
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Apply `action` and everything it triggers. Returns the number of backend
    /// calls made.
    pub async fn dispatch(&mut self, action: Action) -> usize {
        let mut queue = VecDeque::from([action]);
        let mut calls = 0;
        while let Some(action) = queue.pop_front() {
            if let Some(effect) = self.view.dispatch(action) {
                calls += 1;
                queue.push_back(perform(&self.backend, effect).await);
            }
        }
        calls
    }

    /// Dispatch several actions in order.
    pub async fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> usize {
        let mut calls = 0;
        for action in actions {
            calls += self.dispatch(action).await;
        }
        calls
    }
}
