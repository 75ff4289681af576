//! In-memory session backend.
//!
//! Uses `DashMap` for concurrent access without external locks. Sessions
//! expire `max_age` after creation; saving again does not extend them.
//! Expired entries are dropped when loaded and swept on every save.

use dashmap::DashMap;
use std::time::{Duration, Instant};

use super::{SessionBackend, SessionData};

/// In-memory session store. Sessions do not survive a restart.
pub struct InMemoryBackend {
    store: DashMap<String, (SessionData, Instant)>,
    max_age: Duration,
}

impl InMemoryBackend {
    pub fn new(max_age: Duration) -> Self {
        Self {
            store: DashMap::new(),
            max_age,
        }
    }

    /// Number of sessions currently stored (including expired ones not yet purged).
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Drop every expired session, returning how many were removed.
    ///
    /// Runs on each save, so abandoned sessions do not accumulate.
    pub fn purge_expired(&self) -> usize {
        let before = self.store.len();
        self.store
            .retain(|_, (_, created)| !self.is_expired(*created));
        before.saturating_sub(self.store.len())
    }

    fn is_expired(&self, created: Instant) -> bool {
        created.elapsed() > self.max_age
    }
}

impl SessionBackend for InMemoryBackend {
    async fn load(&self, session_id: &str) -> Option<SessionData> {
        let expired = self
            .store
            .remove_if(session_id, |_, (_, created)| self.is_expired(*created));
        if expired.is_some() {
            return None;
        }
        self.store.get(session_id).map(|entry| entry.value().0.clone())
    }

    async fn save(&self, session_id: &str, data: &SessionData) {
        self.purge_expired();
        self.store
            .entry(session_id.to_string())
            .and_modify(|(stored, _)| *stored = data.clone())
            .or_insert_with(|| (data.clone(), Instant::now()));
    }

    async fn delete(&self, session_id: &str) {
        self.store.remove(session_id);
    }
}
