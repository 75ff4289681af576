//! Named URL table.
//!
//! Handlers and templates refer to routes by name; the router in
//! [`crate::create_app`] mounts handlers on the same paths.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteName {
    Home,
    HealthCheck,
    Logout,
    DebugNav,
}

impl RouteName {
    pub const ALL: [RouteName; 4] = [
        RouteName::Home,
        RouteName::HealthCheck,
        RouteName::Logout,
        RouteName::DebugNav,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RouteName::Home => "home",
            RouteName::HealthCheck => "health_check",
            RouteName::Logout => "logout",
            RouteName::DebugNav => "debug_nav",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            RouteName::Home => "/",
            RouteName::HealthCheck => "/health",
            RouteName::Logout => "/logout",
            RouteName::DebugNav => "/debug-nav",
        }
    }
}

/// Resolve a symbolic route name to its path.
pub fn reverse(name: &str) -> Option<&'static str> {
    RouteName::ALL
        .iter()
        .find(|route| route.name() == name)
        .map(|route| route.path())
}

/// `302 Found` pointing at the named route.
pub fn redirect(route: RouteName) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, route.path())]).into_response()
}
