//! GET /health

use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

/// Liveness probe. Touches neither the session nor any other state.
pub async fn health_check() -> impl IntoResponse {
    tracing::debug!("health check");
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "OK",
    )
}
