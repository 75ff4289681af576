//! HTTP route handlers.

pub mod debug_nav;
pub mod health;
pub mod home;
pub mod logout;

use askama::Template;
use axum::response::Html;

use crate::error::AppError;

/// Render a template into an HTML response body.
pub fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}
