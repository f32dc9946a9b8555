//! Session controller scenarios against a mock backend

use keyhold_core::{
    MemoryTokenStore, SessionEvent, SessionPhase, SessionState, TokenPair, TokenStore, User,
};
use keyhold_http::session::{LOGIN_FAILED_MESSAGE, SESSION_EXPIRED_MESSAGE};
use keyhold_http::{ApiClient, SessionController};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn controller(server: &MockServer, store: Arc<MemoryTokenStore>) -> SessionController {
    SessionController::new(ApiClient::new(server.uri(), store).unwrap())
}

fn alice() -> User {
    User {
        id: 1,
        username: "alice".to_string(),
    }
}

async fn mount_profile(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "username": "alice", "id": 1 })))
        .mount(server)
        .await;
}

async fn mount_unauthorized(server: &MockServer, http_method: &str, endpoint: &str) {
    Mock::given(method(http_method))
        .and(path(endpoint))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "detail": "Could not validate credentials" })),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_startup_without_tokens_is_unauthenticated() {
    let mock_server = MockServer::start().await;
    let store = Arc::new(MemoryTokenStore::new());
    let session = controller(&mock_server, store.clone());

    let state = SessionState::default().apply(session.check().await);

    assert_eq!(state.phase(), SessionPhase::Unauthenticated);
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert!(store.token_pair().is_none());
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_startup_with_valid_token_is_authenticated() {
    let mock_server = MockServer::start().await;
    mount_profile(&mock_server, "access-1").await;

    let store = Arc::new(MemoryTokenStore::with_pair("access-1", "refresh-1"));
    let session = controller(&mock_server, store);

    let state = SessionState::default().apply(session.check().await);

    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert!(!state.loading);
    assert_eq!(state.user, Some(alice()));
}

#[tokio::test]
async fn test_startup_with_expired_token_refreshes() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/token/refresh"))
        .and(query_param("refresh_token", "refresh-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "fresh" })))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_profile(&mock_server, "fresh").await;

    let store = Arc::new(MemoryTokenStore::with_pair("stale", "refresh-1"));
    let session = controller(&mock_server, store.clone());

    let state = SessionState::default().apply(session.check().await);

    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert_eq!(store.token_pair(), Some(TokenPair::new("fresh", "refresh-1")));
}

#[tokio::test]
async fn test_startup_with_dead_tokens_clears_them() {
    let mock_server = MockServer::start().await;
    mount_unauthorized(&mock_server, "GET", "/users/me").await;
    mount_unauthorized(&mock_server, "POST", "/token/refresh").await;

    let store = Arc::new(MemoryTokenStore::with_pair("stale", "revoked"));
    let session = controller(&mock_server, store.clone());

    let state = SessionState::default().apply(session.check().await);

    assert_eq!(state.phase(), SessionPhase::Unauthenticated);
    assert!(!state.loading);
    assert!(state.is_expired());
    assert_eq!(state.error.as_deref(), Some(SESSION_EXPIRED_MESSAGE));
    assert!(store.token_pair().is_none());
}

#[tokio::test]
async fn test_dead_tokens_at_startup_differ_from_no_tokens() {
    let mock_server = MockServer::start().await;
    mount_unauthorized(&mock_server, "GET", "/users/me").await;
    mount_unauthorized(&mock_server, "POST", "/token/refresh").await;

    let dead = controller(&mock_server, Arc::new(MemoryTokenStore::with_pair("a", "r")));
    let empty = controller(&mock_server, Arc::new(MemoryTokenStore::new()));

    let dead_event = dead.check().await;
    let empty_event = empty.check().await;

    assert!(matches!(dead_event, SessionEvent::Expired { .. }));
    assert_eq!(empty_event, SessionEvent::Unauthenticated { error: None });
    assert_ne!(dead_event, empty_event);
}

#[tokio::test]
async fn test_login_stores_tokens_and_loads_profile() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-1",
            "refresh_token": "refresh-1",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_profile(&mock_server, "access-1").await;

    let store = Arc::new(MemoryTokenStore::new());
    let session = controller(&mock_server, store.clone());

    let state = SessionState::signed_out().apply(SessionEvent::Pending);
    assert!(state.loading);
    let state = state.apply(session.login("alice", "s3cret").await);

    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert_eq!(state.user, Some(alice()));
    assert!(!state.loading);
    assert_eq!(store.token_pair(), Some(TokenPair::new("access-1", "refresh-1")));
}

#[tokio::test]
async fn test_login_with_wrong_password_stays_unauthenticated() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "detail": "Incorrect username or password" })),
        )
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let session = controller(&mock_server, store.clone());

    let state = SessionState::signed_out().apply(session.login("alice", "wrong").await);

    assert_eq!(state.phase(), SessionPhase::Unauthenticated);
    assert!(store.token_pair().is_none());
    assert_eq!(state.error.as_deref(), Some("Incorrect username or password"));
}

#[tokio::test]
async fn test_login_without_server_detail_uses_generic_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_pair("old-access", "old-refresh"));
    let session = controller(&mock_server, store.clone());

    let event = session.login("alice", "s3cret").await;

    assert_eq!(
        event,
        SessionEvent::Unauthenticated {
            error: Some(LOGIN_FAILED_MESSAGE.to_string())
        }
    );
    assert!(store.token_pair().is_none());
}

#[tokio::test]
async fn test_logout_clears_everything() {
    let mock_server = MockServer::start().await;
    mount_profile(&mock_server, "access-1").await;

    let store = Arc::new(MemoryTokenStore::with_pair("access-1", "refresh-1"));
    let session = controller(&mock_server, store.clone());

    let state = SessionState::default().apply(session.check().await);
    assert_eq!(state.phase(), SessionPhase::Authenticated);

    let state = state.apply(session.logout());
    assert_eq!(state, SessionState::signed_out());
    assert!(store.token_pair().is_none());

    // Logging out twice changes nothing
    let state = state.apply(session.logout());
    assert_eq!(state, SessionState::signed_out());
}

#[tokio::test]
async fn test_refresh_reloads_profile() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token/refresh"))
        .and(query_param("refresh_token", "refresh-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "fresh" })))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_profile(&mock_server, "fresh").await;

    let store = Arc::new(MemoryTokenStore::with_pair("stale", "refresh-1"));
    let session = controller(&mock_server, store.clone());

    let state = SessionState::signed_out().apply(session.refresh().await);

    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert_eq!(state.user, Some(alice()));
}

#[tokio::test]
async fn test_refresh_failure_signs_out() {
    let mock_server = MockServer::start().await;
    mount_profile(&mock_server, "access-1").await;
    mount_unauthorized(&mock_server, "POST", "/token/refresh").await;

    let store = Arc::new(MemoryTokenStore::with_pair("access-1", "revoked"));
    let session = controller(&mock_server, store.clone());

    let state = SessionState::default().apply(session.check().await);
    assert_eq!(state.phase(), SessionPhase::Authenticated);

    let state = state.apply(session.refresh().await);
    assert_eq!(state.phase(), SessionPhase::Unauthenticated);
    assert!(state.is_expired());
    assert!(state.user.is_none());
    assert_eq!(state.error.as_deref(), Some("Could not validate credentials"));
    assert!(store.token_pair().is_none());
}

#[tokio::test]
async fn test_refresh_without_tokens_signs_out() {
    let mock_server = MockServer::start().await;
    let store = Arc::new(MemoryTokenStore::new());
    let session = controller(&mock_server, store);

    let state = SessionState::default().apply(session.refresh().await);

    assert_eq!(state.phase(), SessionPhase::Unauthenticated);
    assert!(state.is_expired());
    assert_eq!(state.error.as_deref(), Some(SESSION_EXPIRED_MESSAGE));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_profile_failure_drops_authenticated_session() {
    let mock_server = MockServer::start().await;
    mount_profile(&mock_server, "access-1").await;

    let store = Arc::new(MemoryTokenStore::with_pair("access-1", "refresh-1"));
    let session = controller(&mock_server, store.clone());
    let state = SessionState::default().apply(session.check().await);
    assert_eq!(state.phase(), SessionPhase::Authenticated);

    // Backend starts failing
    mock_server.reset().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let state = state.apply(session.fetch_profile().await);
    assert_eq!(state.phase(), SessionPhase::Unauthenticated);
    assert!(!state.is_expired());
    assert!(state.user.is_none());
    assert!(store.token_pair().is_none());
}

#[tokio::test]
async fn test_profile_failure_shows_generic_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(
            ResponseTemplate::new(502).set_body_string("<html><body>nginx upstream error</body></html>"),
        )
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_pair("access-1", "refresh-1"));
    let session = controller(&mock_server, store);

    let state = SessionState::signed_out().apply(session.fetch_profile().await);
    let message = state.error.unwrap();

    assert_eq!(message, "The server encountered an error. Please try again later.");
    assert!(!message.contains("<html>"));
}
