//! Axum session middleware layer.
//!
//! Extracts the signed session ID from the `sessionid` cookie, loads the
//! session from the backend, exposes it to handlers as a [`SessionHandle`]
//! and, once the handler has run, persists or destroys it.
//!
//! A request that neither changes nor destroys its session leaves no trace:
//! nothing is written to the backend and no cookie is set.

use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::http::{HeaderValue, header};
use axum::middleware::Next;
use axum::response::Response;
use base64::Engine;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use super::cookie::{sign_session_id, verify_cookie};
use super::{AUTH_USER_KEY, AuthenticatedUser, SessionBackend, SessionData};
use crate::error::AppError;

pub const SESSION_COOKIE_NAME: &str = "sessionid";

/// Shared handle to session state, inserted into request extensions.
#[derive(Clone)]
pub struct SessionHandle {
    pub id: String,
    pub data: Arc<Mutex<SessionData>>,
    pub destroyed: Arc<Mutex<bool>>,
}

impl<S> FromRequestParts<S> for SessionHandle
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionHandle>()
            .cloned()
            .ok_or_else(|| AppError::Internal("Session middleware not configured".into()))
    }
}

impl SessionHandle {
    fn new(id: String, data: SessionData) -> Self {
        Self {
            id,
            data: Arc::new(Mutex::new(data)),
            destroyed: Arc::new(Mutex::new(false)),
        }
    }

    /// The user signed in on this session, if any.
    pub async fn user(&self) -> Option<AuthenticatedUser> {
        self.data.lock().await.user()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.user().await.is_some()
    }

    /// Bind `user` to this session.
    pub async fn login(&self, user: &AuthenticatedUser) -> Result<(), AppError> {
        let value = serde_json::to_value(user)
            .map_err(|e| AppError::Internal(format!("failed to serialize user: {e}")))?;
        self.data.lock().await.set(AUTH_USER_KEY, value);
        Ok(())
    }

    /// Invalidate the session: drop all of its data and have the middleware
    /// delete it from the backend and expire the cookie.
    ///
    /// Safe to call on an anonymous session. Returns the user that was
    /// signed in, if any.
    pub async fn logout(&self) -> Option<AuthenticatedUser> {
        let previous = {
            let mut data = self.data.lock().await;
            let previous = data.user();
            data.clear();
            previous
        };
        *self.destroyed.lock().await = true;
        previous
    }
}

/// Session middleware configuration.
pub struct SessionLayer<B: SessionBackend> {
    pub backend: Arc<B>,
    pub secret: String,
    pub https_only: bool,
    pub cookie_domain: Option<String>,
    pub max_age: Duration,
}

/// Axum middleware function for session handling.
pub async fn session_middleware<B: SessionBackend + 'static>(
    layer: Arc<SessionLayer<B>>,
    mut req: Request,
    next: Next,
) -> Response {
    let cookie_header = req
        .headers()
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let session_id = parse_cookie(cookie_header, SESSION_COOKIE_NAME)
        .and_then(|v| verify_cookie(layer.secret.as_bytes(), v));

    let loaded = match session_id {
        Some(id) => layer.backend.load(&id).await.map(|data| (id, data)),
        None => None,
    };
    // Unknown, expired or forged IDs all start a fresh session under a new ID.
    let (session_id, initial_data) =
        loaded.unwrap_or_else(|| (generate_session_id(), SessionData::new()));

    let handle = SessionHandle::new(session_id.clone(), initial_data.clone());
    req.extensions_mut().insert(handle.clone());

    let mut response = next.run(req).await;

    let destroyed = *handle.destroyed.lock().await;
    let current_data = handle.data.lock().await.clone();

    let cookie = if destroyed {
        layer.backend.delete(&session_id).await;
        Some(make_delete_cookie(layer.https_only, layer.cookie_domain.as_deref()))
    } else if current_data != initial_data {
        layer.backend.save(&session_id, &current_data).await;
        match sign_session_id(layer.secret.as_bytes(), &session_id) {
            Ok(signed) => Some(make_set_cookie(
                &signed,
                layer.max_age,
                layer.https_only,
                layer.cookie_domain.as_deref(),
            )),
            Err(e) => {
                tracing::error!(error = %e, "failed to sign session cookie");
                None
            }
        }
    } else {
        None
    };

    if let Some(cookie) = cookie {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::error!(error = %e, "invalid Set-Cookie header"),
        }
    }

    response
}

fn generate_session_id() -> String {
    use rand::Rng;
    let bytes: [u8; 32] = rand::thread_rng().r#gen();
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

fn cookie_attributes(parts: &mut Vec<String>, https_only: bool, cookie_domain: Option<&str>) {
    parts.push("Path=/".into());
    parts.push("HttpOnly".into());
    parts.push("SameSite=Lax".into());
    if https_only {
        parts.push("Secure".into());
    }
    if let Some(domain) = cookie_domain {
        parts.push(format!("Domain={domain}"));
    }
}

fn make_set_cookie(
    signed_id: &str,
    max_age: Duration,
    https_only: bool,
    cookie_domain: Option<&str>,
) -> String {
    let mut parts = vec![
        format!("{SESSION_COOKIE_NAME}={signed_id}"),
        format!("Max-Age={}", max_age.as_secs()),
    ];
    cookie_attributes(&mut parts, https_only, cookie_domain);
    parts.join("; ")
}

fn make_delete_cookie(https_only: bool, cookie_domain: Option<&str>) -> String {
    let mut parts = vec![format!("{SESSION_COOKIE_NAME}="), "Max-Age=0".into()];
    cookie_attributes(&mut parts, https_only, cookie_domain);
    parts.join("; ")
}

/// Parse a specific cookie from a Cookie header value.
fn parse_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|part| {
        part.trim()
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
    })
}
