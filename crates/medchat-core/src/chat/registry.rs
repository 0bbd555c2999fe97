//! In-memory registry of live chat sessions.
//!
//! Each session sits behind its own `tokio::sync::Mutex` so that a browser
//! session processes one submission at a time while different sessions run
//! concurrently. Nothing is persisted; sessions idle past the timeout are
//! dropped by [`SessionRegistry::evict_idle`].

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use medchat_types::chat::SessionId;

use super::session::ChatSession;

/// Shared handle to one session.
pub type SharedSession = Arc<Mutex<ChatSession>>;

pub struct SessionRegistry {
    sessions: DashMap<SessionId, SharedSession>,
    idle_timeout: chrono::Duration,
}

impl SessionRegistry {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_timeout: chrono::Duration::from_std(idle_timeout)
                .unwrap_or(chrono::Duration::MAX),
        }
    }

    /// Fetch the session for `id`, creating an empty one if absent.
    pub fn get_or_create(&self, id: SessionId) -> SharedSession {
        self.sessions
            .entry(id)
            .or_insert_with(|| {
                debug!(session_id = %id, "session created");
                Arc::new(Mutex::new(ChatSession::new(id)))
            })
            .clone()
    }

    pub fn get(&self, id: SessionId) -> Option<SharedSession> {
        self.sessions.get(&id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop sessions idle longer than the timeout as of `now`.
    ///
    /// Sessions that are currently locked (a submission in flight) are
    /// never evicted. Returns the number of sessions removed.
    pub fn evict_idle(&self, now: DateTime<Utc>) -> usize {
        let mut evicted = 0;
        self.sessions.retain(|_, session| match session.try_lock() {
            Ok(guard) if guard.is_idle(now, self.idle_timeout) => {
                evicted += 1;
                false
            }
            _ => true,
        });

        if evicted > 0 {
            info!(evicted, remaining = self.sessions.len(), "evicted idle sessions");
        }
        evicted
    }
}

/// Run [`SessionRegistry::evict_idle`] every `every` until the task is aborted.
pub fn spawn_idle_sweeper(registry: Arc<SessionRegistry>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // First tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            registry.evict_idle(Utc::now());
        }
    })
}
