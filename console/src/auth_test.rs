use std::rc::Rc;

use super::*;
use crate::fake_transport::{FakeTransport, client, url};
use crate::session::MemorySession;
use serde_json::{Value, json};

#[tokio::test]
async fn accepted_login_stores_exact_token_and_targets_jobs() {
    let fake = FakeTransport::shared();
    fake.reply_json(json!({ "access_token": "eyJhbGciOi.abc.def", "token_type": "bearer" }));
    let session = MemorySession::new().shared();
    let api = client(&fake, Rc::clone(&session));

    let destination = login(&api, "admin", "hunter2").await.expect("login");

    assert_eq!(destination, Route::Jobs);
    assert_eq!(session.get().as_deref(), Some("eyJhbGciOi.abc.def"));
}

#[tokio::test]
async fn login_posts_credentials_to_auth_endpoint() {
    let fake = FakeTransport::shared();
    fake.reply_json(json!({ "access_token": "tok" }));
    let api = client(&fake, MemorySession::new().shared());

    login(&api, "admin", "hunter2").await.expect("login");

    let request = &fake.requests()[0];
    assert_eq!(fake.request_lines(), vec![format!("POST {}", url("/auth/login"))]);
    let body: Value = serde_json::from_str(request.body.as_deref().expect("body")).expect("json");
    assert_eq!(body, json!({ "username": "admin", "password": "hunter2" }));
    assert_eq!(request.header("Authorization"), None);
}

#[tokio::test]
async fn rejected_login_leaves_session_empty() {
    let fake = FakeTransport::shared();
    fake.reply(401, "{\"detail\":\"Invalid credentials\"}");
    let session = MemorySession::new().shared();
    let api = client(&fake, Rc::clone(&session));

    let err = login(&api, "admin", "wrong").await.expect_err("should fail");

    assert_eq!(err.to_string(), LOGIN_FAILED_MESSAGE);
    assert_eq!(err.cause().status(), Some(401));
    assert_eq!(session.get(), None);
}

#[tokio::test]
async fn rejected_login_keeps_prior_token_untouched() {
    let fake = FakeTransport::shared();
    fake.reply(401, "Invalid credentials");
    let session = MemorySession::with_token("previous").shared();
    let api = client(&fake, Rc::clone(&session));

    login(&api, "admin", "wrong").await.expect_err("should fail");

    assert_eq!(session.get().as_deref(), Some("previous"));
}

#[tokio::test]
async fn unreachable_server_is_a_login_failure() {
    let fake = FakeTransport::shared();
    fake.fail("connection refused");
    let session = MemorySession::new().shared();
    let api = client(&fake, Rc::clone(&session));

    let err = login(&api, "admin", "hunter2").await.expect_err("should fail");

    assert_eq!(err.to_string(), LOGIN_FAILED_MESSAGE);
    assert_eq!(session.get(), None);
}

#[tokio::test]
async fn blank_access_token_is_rejected() {
    let fake = FakeTransport::shared();
    fake.reply_json(json!({ "access_token": "" }));
    let session = MemorySession::new().shared();
    let api = client(&fake, Rc::clone(&session));

    let err = login(&api, "admin", "hunter2").await.expect_err("should fail");

    assert!(matches!(err.cause(), RequestError::Decode(_)));
    assert_eq!(session.get(), None);
}
