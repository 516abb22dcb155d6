//! Integration tests for the search view driven against a live HTTP backend.
//!
//! Each test starts a scripted `axum` backend, drives a `Session` through user
//! actions, and checks both the requests that went out and the resulting view.

mod helpers;

use axum::http::StatusCode;
use facetscope_core::error::DOCUMENT_NOT_FOUND;
use facetscope_core::facets::Facet;
use facetscope_core::present::{caption, ResultsPane};
use facetscope_core::Action;
use helpers::{document, search_reply, slides, MockBackend, Reply};
use serde_json::json;

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_posts_query_and_active_filters_only() {
    let backend = MockBackend::start().await;
    backend.reply("search", search_reply(vec![document("d1", "ag-1", "Acme"), document("d2", "ag-2", "Bolt")]));
    let mut session = backend.session();

    let calls = session
        .dispatch_all([
            Action::QueryChanged("renewal pricing".into()),
            Action::FilterChanged { facet: Facet::Language, value: "German".into() },
            Action::FilterChanged { facet: Facet::Purpose, value: "_none".into() },
            Action::FilterChanged { facet: Facet::ClientSpecific, value: "True".into() },
            Action::FilterChanged { facet: Facet::Topic, value: String::new() },
            Action::SearchSubmitted,
        ])
        .await;
    assert_eq!(calls, 1);

    let sent = backend.requests("search");
    assert_eq!(
        sent,
        vec![json!({
            "query": "renewal pricing",
            "filters": { "language": "German", "is_client_specific": "True" }
        })]
    );

    let view = session.view();
    assert!(!view.is_loading());
    assert_eq!(view.error, None);
    assert_eq!(ResultsPane::of(view), ResultsPane::Listing);
    assert_eq!(caption(view.result.as_ref().unwrap().total).as_deref(), Some("Found 2 documents"));
    let first = &view.result.as_ref().unwrap().results[0];
    assert_eq!(first.metadata.get("owner"), Some("team-b"));
}

#[tokio::test]
async fn empty_query_browses_by_filter() {
    let backend = MockBackend::start().await;
    backend.reply("search", search_reply(vec![]));
    let mut session = backend.session();

    session.dispatch(Action::SearchSubmitted).await;

    assert_eq!(backend.requests("search"), vec![json!({ "query": "", "filters": {} })]);
    assert_eq!(ResultsPane::of(session.view()), ResultsPane::Empty);
}

#[tokio::test]
async fn search_http_failure_shows_banner_and_keeps_results() {
    let backend = MockBackend::start().await;
    backend.reply("search", search_reply(vec![document("d1", "ag-1", "Acme")]));
    let mut session = backend.session();
    session.dispatch(Action::SearchSubmitted).await;

    backend.reply("search", Reply::status(StatusCode::INTERNAL_SERVER_ERROR));
    session.dispatch(Action::SearchSubmitted).await;

    let view = session.view();
    assert_eq!(view.error.as_deref(), Some("Search failed: Internal Server Error"));
    assert_eq!(view.result.as_ref().map(|r| r.results.len()), Some(1));
    assert!(!view.is_loading());
}

#[tokio::test]
async fn malformed_search_body_is_a_failure() {
    let backend = MockBackend::start().await;
    backend.reply("search", Reply::ok(json!({ "hits": [] })));
    let mut session = backend.session();

    session.dispatch(Action::SearchSubmitted).await;

    let error = session.view().error.clone().unwrap_or_default();
    assert!(error.starts_with("Invalid response body"), "unexpected error: {error}");
    assert!(session.view().result.is_none());
}

// ---------------------------------------------------------------------------
// Edit and save
// ---------------------------------------------------------------------------

#[tokio::test]
async fn save_sends_full_document_and_applies_draft() {
    let backend = MockBackend::start().await;
    backend.reply("search", search_reply(vec![document("d1", "ag-1", "Acme")]));
    // The backend echoes something different; the client must ignore it
    backend.reply("update", Reply::ok(json!({ "metadata": { "client_name": "Server Says" } })));
    let mut session = backend.session();

    let calls = session
        .dispatch_all([
            Action::SearchSubmitted,
            Action::EditStarted { doc_id: "d1".into() },
            Action::FieldChanged { field: "client_name".into(), value: "Acme Europe".into() },
            Action::FieldChanged { field: "comment".into(), value: "re-tagged".into() },
            Action::SaveRequested,
        ])
        .await;
    assert_eq!(calls, 2);

    let sent = backend.requests("update");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["doc_id"], "d1");
    assert_eq!(sent[0]["text"], "Full text of d1");
    assert_eq!(sent[0]["metadata"]["client_name"], "Acme Europe");
    assert_eq!(sent[0]["metadata"]["comment"], "re-tagged");
    assert_eq!(sent[0]["metadata"]["owner"], "team-b");

    let view = session.view();
    assert!(view.edit.is_none());
    let stored = &view.result.as_ref().unwrap().results[0].metadata;
    assert_eq!(stored.client_name, "Acme Europe");
    assert_eq!(stored.comment(), Some("re-tagged"));
    assert_eq!(serde_json::to_value(stored).unwrap(), sent[0]["metadata"]);
}

#[tokio::test]
async fn save_after_results_replaced_fails_without_network() {
    let backend = MockBackend::start().await;
    backend.reply("search", search_reply(vec![document("d1", "ag-1", "Acme")]));
    backend.reply("update", Reply::ok(json!({})));
    let mut session = backend.session();

    session
        .dispatch_all([Action::SearchSubmitted, Action::EditStarted { doc_id: "d1".into() }])
        .await;
    backend.reply("search", search_reply(vec![document("d9", "ag-9", "Other")]));
    session.dispatch(Action::SearchSubmitted).await;

    let calls = session.dispatch(Action::SaveRequested).await;
    assert_eq!(calls, 0);
    assert!(backend.requests("update").is_empty());
    assert_eq!(session.view().error.as_deref(), Some(DOCUMENT_NOT_FOUND));
}

#[tokio::test]
async fn update_rejection_keeps_edit_open() {
    let backend = MockBackend::start().await;
    backend.reply("search", search_reply(vec![document("d1", "ag-1", "Acme")]));
    backend.reply("update", Reply::status(StatusCode::CONFLICT));
    let mut session = backend.session();

    session
        .dispatch_all([
            Action::SearchSubmitted,
            Action::EditStarted { doc_id: "d1".into() },
            Action::FieldChanged { field: "industry".into(), value: "Utilities".into() },
            Action::SaveRequested,
        ])
        .await;

    let view = session.view();
    assert_eq!(view.error.as_deref(), Some("Update failed: Conflict"));
    assert!(view.is_editing("d1"));
    assert_eq!(view.edit.as_ref().unwrap().draft.industry, "Utilities");
    assert_eq!(view.result.as_ref().unwrap().results[0].metadata.industry, "Retail");
    assert!(!view.is_updating());
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

#[tokio::test]
async fn preview_opens_carousel() {
    let backend = MockBackend::start().await;
    backend.reply("search", search_reply(vec![document("d1", "ag-1", "Acme")]));
    backend.reply("preview", Reply::ok(slides(3)));
    let mut session = backend.session();

    session
        .dispatch_all([
            Action::SearchSubmitted,
            Action::PreviewRequested { doc_id: "d1".into(), agent_id: "ag-1".into() },
        ])
        .await;

    assert_eq!(backend.requests("preview"), vec![json!({ "agent_id": "ag-1" })]);
    let preview = &session.view().preview;
    assert!(preview.open);
    assert_eq!(preview.slides.len(), 3);
    assert_eq!(preview.current_slide().map(|s| s.image_url.as_str()), Some("/previews/1.png"));
    assert!(!preview.any_loading());
}

#[tokio::test]
async fn preview_failures_are_silent() {
    let backend = MockBackend::start().await;
    backend.reply("search", search_reply(vec![document("d1", "ag-1", "Acme")]));
    let mut session = backend.session();
    session.dispatch(Action::SearchSubmitted).await;

    for reply in [
        Reply::ok(json!({ "success": false })),
        Reply::ok(json!({ "success": true })),
        Reply::status(StatusCode::BAD_GATEWAY),
    ] {
        backend.reply("preview", reply);
        session
            .dispatch(Action::PreviewRequested { doc_id: "d1".into(), agent_id: "ag-1".into() })
            .await;

        let view = session.view();
        assert!(!view.preview.open);
        assert!(view.preview.slides.is_empty());
        assert!(!view.preview.any_loading());
        assert_eq!(view.error, None);
    }
    assert_eq!(backend.requests("preview").len(), 3);
}
