//! GET|POST /logout

use axum::response::Response;

use crate::session::middleware::SessionHandle;
use crate::urls::{self, RouteName};

/// Invalidate the caller's session and send them home.
pub async fn custom_logout(session: SessionHandle) -> Response {
    match session.logout().await {
        Some(user) => {
            tracing::info!(user_id = %user.id, username = %user.username, "user logged out")
        }
        None => tracing::debug!("logout without an authenticated session"),
    }
    urls::redirect(RouteName::Home)
}
