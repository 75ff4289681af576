//! GET /

use askama::Template;
use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;

use crate::error::AppError;
use crate::session::middleware::SessionHandle;
use crate::urls::RouteName;

#[derive(Template)]
#[template(path = "homepage/index.html")]
pub struct HomeTemplate {
    pub site_name: String,
    pub username: Option<String>,
    pub logout_path: &'static str,
}

/// Landing page.
pub async fn home(
    State(state): State<Arc<crate::AppState>>,
    session: SessionHandle,
) -> Result<Html<String>, AppError> {
    let template = HomeTemplate {
        site_name: state.config.site_name.clone(),
        username: session.user().await.map(|u| u.username),
        logout_path: RouteName::Logout.path(),
    };
    super::render(&template)
}
