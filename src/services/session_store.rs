use crate::config::DEFAULT_SESSION_TTL_SECONDS;
use crate::models::Session;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use tokio::sync::RwLock;

const SESSION_ID_LENGTH: usize = 16;

/// Keyed storage for OAuth sessions. Lookups are single-key; the store is never enumerated.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn put(&self, id: String, session: Session);

    /// Returns `None` for unknown or expired ids
    async fn get(&self, id: &str) -> Option<Session>;

    async fn expire(&self, id: &str);
}

/// Random printable session id. Good enough to tell sessions apart, not a secret.
pub fn generate_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LENGTH)
        .map(char::from)
        .collect()
}

/// Process-memory session store; everything is lost on restart
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Option<Duration>,
}

impl InMemorySessionStore {
    pub fn new(ttl_seconds: Option<i64>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl: ttl_seconds.map(|secs| {
                Duration::try_seconds(secs)
                    .unwrap_or_else(|| Duration::seconds(DEFAULT_SESSION_TTL_SECONDS))
            }),
        }
    }

    fn is_expired(&self, session: &Session) -> bool {
        match self.ttl {
            Some(ttl) => Utc::now() - session.created_at >= ttl,
            None => false,
        }
    }

    /// Drops every session past its time-to-live. Returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !self.is_expired(session));
        before - sessions.len()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, id: String, session: Session) {
        self.sessions.write().await.insert(id, session);
    }

    async fn get(&self, id: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(id)?;

        if !self.is_expired(session) {
            return Some(session.clone());
        }
        drop(sessions);

        tracing::debug!("Session {} expired", id);
        self.expire(id).await;
        None
    }

    async fn expire(&self, id: &str) {
        self.sessions.write().await.remove(id);
    }
}
