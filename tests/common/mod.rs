//! Test utilities: app builder, session seeding, cookie-bearing requests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::Request;
use homepage::config::Config;
use homepage::session::cookie::sign_session_id;
use homepage::session::{AUTH_USER_KEY, AuthenticatedUser, SessionBackend, SessionData};
use homepage::{AppState, create_app};
use std::sync::Arc;

/// Build a test app with the default test config.
pub fn build_test_app() -> (axum::Router, Arc<AppState>) {
    build_test_app_with_config(Config::test_default())
}

/// Build a test app with a custom Config.
pub fn build_test_app_with_config(config: Config) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(config));
    let app = create_app(state.clone());
    (app, state)
}

pub fn test_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: "1".into(),
        username: "ada".into(),
    }
}

/// Store a signed-in user directly in the session backend.
pub async fn seed_authenticated_session(
    state: &AppState,
    session_id: &str,
    user: &AuthenticatedUser,
) {
    let mut data = SessionData::new();
    data.set(AUTH_USER_KEY, serde_json::to_value(user).unwrap());
    state.session_layer.backend.save(session_id, &data).await;
}

/// `Cookie` header value carrying the signed session ID.
pub fn session_cookie(state: &AppState, session_id: &str) -> String {
    let signed = sign_session_id(state.config.session_secret.as_bytes(), session_id).unwrap();
    format!("sessionid={signed}")
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a request carrying the signed session cookie.
pub fn request_with_session(
    method: &str,
    uri: &str,
    state: &AppState,
    session_id: &str,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Cookie", session_cookie(state, session_id))
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as UTF-8 text.
pub async fn body_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
