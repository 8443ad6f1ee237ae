//! Integration tests for the lookup client and the full session flow.
//!
//! Network behavior is exercised against a local mock server so the suite is
//! deterministic and CI-safe: success, HTTP failure, and malformed payloads
//! are all simulated rather than hitting the real encyclopedia endpoint.

use httpmock::prelude::*;
use serde_json::json;
use tracing_subscriber::FmtSubscriber;

use parascope::{Session, WikipediaClient};

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let subscriber = FmtSubscriber::builder().with_env_filter("debug").finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

fn client_for(server: &MockServer) -> WikipediaClient {
    WikipediaClient::builder()
        .endpoint(server.url("/w/api.php"))
        .build()
        .unwrap()
}

fn search_payload(hits: &[(&str, &str)]) -> serde_json::Value {
    json!({
        "query": {
            "search": hits
                .iter()
                .map(|(title, snippet)| json!({ "title": title, "snippet": snippet }))
                .collect::<Vec<_>>()
        }
    })
}

#[tokio::test]
async fn search_normalizes_titles_and_strips_markup() {
    init_tracing();
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/w/api.php")
                .query_param("action", "query")
                .query_param("list", "search")
                .query_param("format", "json")
                .query_param("srlimit", "3")
                .query_param("srsearch", "rust language");
            then.status(200).json_body(search_payload(&[(
                "Rust (programming language)",
                "<span class=\"x\">foo</span> bar",
            )]));
        })
        .await;

    let client = client_for(&server);
    let results = client.search("rust language").await.unwrap();

    mock.assert_async().await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Rust (programming language)");
    assert_eq!(results[0].excerpt, "foo bar");
}

#[tokio::test]
async fn search_caps_results_at_three() {
    init_tracing();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/w/api.php");
            then.status(200).json_body(search_payload(&[
                ("one", "a"),
                ("two", "b"),
                ("three", "c"),
                ("four", "d"),
            ]));
        })
        .await;

    let client = client_for(&server);
    let results = client.search("anything").await.unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[2].title, "three");
}

#[tokio::test]
async fn search_surfaces_http_failures_as_errors() {
    init_tracing();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/w/api.php");
            then.status(503);
        })
        .await;

    let client = client_for(&server);
    assert!(client.search("anything").await.is_err());
}

#[tokio::test]
async fn search_rejects_malformed_payloads() {
    init_tracing();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/w/api.php");
            then.status(200).json_body(json!({ "unexpected": true }));
        })
        .await;

    let client = client_for(&server);
    assert!(client.search("anything").await.is_err());
}

#[tokio::test]
async fn selecting_a_segment_fills_similar_set_and_results() {
    init_tracing();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/w/api.php");
            then.status(200)
                .json_body(search_payload(&[("Gamma", "related article")]));
        })
        .await;

    let mut session = Session::new(client_for(&server));
    session.load_text("alpha\n\nbeta\n\ngamma\n\ndelta\n\nepsilon");
    session.select(2).await.unwrap();

    let snap = session.snapshot();
    assert_eq!(snap.segments.len(), 5);
    assert_eq!(snap.selected, Some(2));
    // First three of the other four paragraphs, document order preserved.
    assert_eq!(snap.similar, vec!["alpha", "beta", "delta"]);
    assert_eq!(snap.results.len(), 1);
    assert_eq!(snap.results[0].excerpt, "related article");
    assert!(!snap.is_loading);
}

#[tokio::test]
async fn transport_failure_yields_empty_results_without_erroring() {
    init_tracing();
    // Unroutable endpoint: connection is refused before any HTTP exchange.
    let client = WikipediaClient::builder()
        .endpoint("http://127.0.0.1:1/w/api.php")
        .build()
        .unwrap();

    let mut session = Session::new(client);
    session.load_text("alpha\n\nbeta\n\ngamma\n\ndelta\n\nepsilon");
    session.select(2).await.unwrap();

    let snap = session.snapshot();
    // The similar set does not depend on lookup outcome.
    assert_eq!(snap.similar, vec!["alpha", "beta", "delta"]);
    assert!(snap.results.is_empty());
    assert!(!snap.is_loading);
}

#[tokio::test]
async fn overlapping_selections_resolve_latest_wins() {
    init_tracing();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/w/api.php")
                .query_param("srsearch", "alpha");
            then.status(200)
                .json_body(search_payload(&[("Alpha", "first")]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/w/api.php")
                .query_param("srsearch", "beta");
            then.status(200)
                .json_body(search_payload(&[("Beta", "second")]));
        })
        .await;

    let mut session = Session::new(client_for(&server));
    session.load_text("alpha\n\nbeta");

    // Two selections issued before either lookup resolves.
    let stale = session.begin_select(0).unwrap();
    let latest = session.begin_select(1).unwrap();

    // The newer request resolves first and commits.
    session.resolve(latest).await;
    assert_eq!(session.snapshot().results[0].title, "Beta");
    assert!(!session.snapshot().is_loading);

    // The stale one resolves later and is discarded.
    session.resolve(stale).await;
    assert_eq!(session.snapshot().results[0].title, "Beta");
    assert_eq!(session.snapshot().selected, Some(1));
}

#[tokio::test]
async fn load_file_reads_document_and_preserves_state_on_failure() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.md");
    tokio::fs::write(&path, "intro\n\nbody\n\noutro")
        .await
        .unwrap();

    let client = WikipediaClient::builder()
        .endpoint("http://127.0.0.1:1/w/api.php")
        .build()
        .unwrap();
    let mut session = Session::new(client);

    session.load_file(&path).await.unwrap();
    assert_eq!(session.snapshot().segments.len(), 3);

    let before = session.snapshot().clone();
    let missing = dir.path().join("does_not_exist.md");
    assert!(session.load_file(&missing).await.is_err());
    assert_eq!(session.snapshot(), &before);
}
