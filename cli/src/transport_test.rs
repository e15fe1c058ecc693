use std::rc::Rc;

use console::views::sources;
use console::{ApiClient, ConsoleConfig, MemorySession, RequestError, Session, SessionStore};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn api_at(base: &str, session: Session) -> ApiClient {
    let config = ConsoleConfig::from_api_base(Some(base));
    let transport: Rc<dyn Transport> = Rc::new(ReqwestTransport::default());
    ApiClient::new(&config, session, transport)
}

fn api(server: &MockServer, session: Session) -> ApiClient {
    api_at(&format!("{}/api/v1/", server.uri()), session)
}

#[tokio::test]
async fn sends_bearer_header_from_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/runs"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let runs = api(&server, MemorySession::with_token("tok-1").shared())
        .list_runs(None)
        .await
        .expect("runs");

    assert!(runs.is_empty());
}

#[tokio::test]
async fn omits_authorization_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .mount(&server)
        .await;

    api(&server, MemorySession::new().shared()).health().await.expect("health");

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
    assert!(received[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn query_string_reaches_server_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .and(query_param("q", "rust & wasm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "title": "Rust Engineer",
            "company": "Acme",
            "location": "Remote",
            "score": { "total_score": 82, "decision": "high" },
            "canonical_url": "https://x/1"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let jobs = api(&server, MemorySession::with_token("tok-1").shared())
        .list_jobs(&console::views::jobs::JobQuery::text("rust & wasm"))
        .await
        .expect("jobs");

    assert_eq!(jobs[0].score_text(), "82 (high)");
}

#[tokio::test]
async fn non_success_surfaces_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/sources"))
        .respond_with(ResponseTemplate::new(401).set_body_string("{\"detail\":\"Invalid token\"}"))
        .mount(&server)
        .await;
    let session = MemorySession::with_token("stale").shared();

    let err = api(&server, Rc::clone(&session)).list_sources().await.expect_err("should fail");

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "{\"detail\":\"Invalid token\"}");
    assert_eq!(session.get().as_deref(), Some("stale"));
}

#[tokio::test]
async fn toggle_patches_json_body_then_reloads() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/sources/3"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "enabled": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/sources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 3, "name": "dejob", "base_url": "https://dejob.top", "enabled": false }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let client = api(&server, MemorySession::with_token("tok-1").shared());
    let cell = Rc::new(std::cell::RefCell::new(sources::SourcesView::new()));
    let row: records::Source = serde_json::from_value(json!({
        "id": 3, "name": "dejob", "base_url": "https://dejob.top", "enabled": true
    }))
    .expect("row");

    sources::toggle(&client, &cell, &row).await.expect("toggle");

    assert!(!cell.borrow().source(3).expect("row").enabled);
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    let client = api_at(&format!("http://127.0.0.1:{port}/api/v1"), MemorySession::new().shared());

    let err = client.health().await.expect_err("should fail");

    assert!(matches!(err, RequestError::Transport(_)));
}
