use crate::models::session::{ClientId, Session};
use crate::utils::time::is_expired;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;

/// One session slot per client. Inserting for a client replaces its previous session.
pub struct SessionStore {
    sessions: DashMap<ClientId, Arc<Session>>,
    max_age_secs: i64,
}

impl SessionStore {
    pub fn new(max_age_secs: i64) -> Self {
        Self {
            sessions: DashMap::new(),
            max_age_secs,
        }
    }

    /// Store a session for a client
    /// Returns the session it replaced, if any
    pub fn insert(&self, client: ClientId, session: Session) -> Option<Arc<Session>> {
        self.sessions.insert(client, Arc::new(session))
    }

    /// Remove a client's session
    /// Returns the removed session if it existed
    pub fn remove(&self, client: &ClientId) -> Option<Arc<Session>> {
        self.sessions.remove(client).map(|(_, session)| session)
    }

    /// Get a client's live session. An expired session is evicted and reported as absent.
    pub fn get(&self, client: &ClientId, now: DateTime<Utc>) -> Option<Arc<Session>> {
        let session = self.sessions.get(client).map(|entry| Arc::clone(entry.value()))?;

        if is_expired(session.established_at, self.max_age_secs, now) {
            self.sessions
                .remove_if(client, |_, current| Arc::ptr_eq(current, &session));
            return None;
        }

        Some(session)
    }

    /// Drop every session older than the maximum age
    /// Returns the number of sessions removed
    pub fn cleanup_expired(&self, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        let max_age = self.max_age_secs;
        self.sessions
            .retain(|_, session| !is_expired(session.established_at, max_age, now));
        before.saturating_sub(self.sessions.len())
    }

    pub fn max_age_secs(&self) -> i64 {
        self.max_age_secs
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
