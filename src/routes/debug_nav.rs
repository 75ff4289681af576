//! GET /debug-nav

use askama::Template;
use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;

use crate::error::AppError;
use crate::urls::RouteName;

pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
}

#[derive(Template)]
#[template(path = "debug_nav.html")]
pub struct DebugNavTemplate {
    pub site_name: String,
    pub links: Vec<NavLink>,
}

/// Every named route, linked.
pub async fn debug_nav(
    State(state): State<Arc<crate::AppState>>,
) -> Result<Html<String>, AppError> {
    let links = RouteName::ALL
        .iter()
        .map(|route| NavLink {
            name: route.name(),
            path: route.path(),
        })
        .collect();
    super::render(&DebugNavTemplate {
        site_name: state.config.site_name.clone(),
        links,
    })
}
