//! Server-side session management.
//!
//! Provides the `SessionBackend` trait for pluggable storage, HMAC-SHA256
//! cookie signing, and an in-memory backend.

pub mod cookie;
pub mod memory;
pub mod middleware;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Session key holding the serialized [`AuthenticatedUser`].
pub const AUTH_USER_KEY: &str = "auth_user";

/// Session data stored server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionData {
    #[serde(flatten)]
    pub data: HashMap<String, serde_json::Value>,
}

impl SessionData {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    pub fn set(&mut self, key: &str, value: serde_json::Value) {
        self.data.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) {
        self.data.remove(key);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The signed-in user, if the session carries a well-formed one.
    pub fn user(&self) -> Option<AuthenticatedUser> {
        self.get(AUTH_USER_KEY)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}

/// Identity bound to a session after sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub username: String,
}

/// Pluggable session storage backend.
///
/// Implementations must be `Send + Sync` for use in Axum's async handlers.
pub trait SessionBackend: Send + Sync {
    /// Load session data by ID. Returns `None` if not found or expired.
    fn load(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Option<SessionData>> + Send;

    /// Save session data.
    fn save(
        &self,
        session_id: &str,
        data: &SessionData,
    ) -> impl std::future::Future<Output = ()> + Send;

    /// Delete a session. Deleting an unknown ID is a no-op.
    fn delete(&self, session_id: &str) -> impl std::future::Future<Output = ()> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_roundtrip_through_session() {
        let user = AuthenticatedUser {
            id: "42".into(),
            username: "ada".into(),
        };
        let mut data = SessionData::new();
        data.set(AUTH_USER_KEY, serde_json::to_value(&user).unwrap());
        assert_eq!(data.user(), Some(user));
    }

    #[test]
    fn test_malformed_user_is_anonymous() {
        let mut data = SessionData::new();
        data.set(AUTH_USER_KEY, json!("not-an-object"));
        assert_eq!(data.user(), None);
    }

    #[test]
    fn test_clear_empties_data() {
        let mut data = SessionData::new();
        data.set("theme", json!("dark"));
        assert!(!data.is_empty());
        data.clear();
        assert!(data.is_empty());
    }
}
