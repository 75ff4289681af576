//! Homepage service: landing page, health check, logout and debug navigation.
//!
//! Sessions, templates and the named URL table live in this crate; the
//! handlers in [`routes`] only delegate to them.

pub mod config;
pub mod error;
pub mod routes;
pub mod session;
pub mod urls;

use axum::Router;
use axum::middleware::from_fn;
use axum::routing::get;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::session::memory::InMemoryBackend;
use crate::session::middleware::{SessionLayer, session_middleware};
use crate::urls::RouteName;

/// Shared application state available to all route handlers.
pub struct AppState {
    pub config: Config,
    pub session_layer: Arc<SessionLayer<InMemoryBackend>>,
}

impl AppState {
    /// State with a fresh in-memory session store configured from `config`.
    pub fn new(config: Config) -> Self {
        let session_layer = Arc::new(SessionLayer {
            backend: Arc::new(InMemoryBackend::new(config.session_max_age)),
            secret: config.session_secret.clone(),
            https_only: config.session_https_only,
            cookie_domain: config.cookie_domain.clone(),
            max_age: config.session_max_age,
        });
        Self {
            config,
            session_layer,
        }
    }
}

/// Build the Axum router with all middleware and routes.
pub fn create_app(state: Arc<AppState>) -> Router {
    let session_layer = state.session_layer.clone();

    Router::new()
        .route(RouteName::Home.path(), get(routes::home::home))
        .route(
            RouteName::HealthCheck.path(),
            get(routes::health::health_check),
        )
        .route(
            RouteName::Logout.path(),
            get(routes::logout::custom_logout).post(routes::logout::custom_logout),
        )
        .route(RouteName::DebugNav.path(), get(routes::debug_nav::debug_nav))
        .layer(from_fn(move |req, next| {
            let layer = session_layer.clone();
            session_middleware(layer, req, next)
        }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
