//! In-memory session store.
//!
//! Tokens are opaque 128-bit hex strings. The store keeps only a SHA-256
//! digest of each token, so a leaked store snapshot cannot be replayed as
//! a cookie. Note: sessions are lost on process restart.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::ports::{SessionError, SessionStore};

struct SessionEntry {
    user_id: Uuid,
    expires_at: Instant,
}

/// Session store backed by a HashMap with an async RwLock.
pub struct InMemorySessionStore {
    store: RwLock<HashMap<String, SessionEntry>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    fn digest(token: &str) -> String {
        hex::encode(Sha256::digest(token.as_bytes()))
    }

    fn is_expired(entry: &SessionEntry) -> bool {
        Instant::now() > entry.expires_at
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, user_id: Uuid) -> Result<String, SessionError> {
        let token = Uuid::new_v4().simple().to_string();

        let mut store = self.store.write().await;
        store.insert(
            Self::digest(&token),
            SessionEntry {
                user_id,
                expires_at: Instant::now() + self.ttl,
            },
        );

        Ok(token)
    }

    async fn resolve(&self, token: &str) -> Result<Option<Uuid>, SessionError> {
        let key = Self::digest(token);

        let store = self.store.read().await;
        let Some(entry) = store.get(&key) else {
            return Ok(None);
        };

        if Self::is_expired(entry) {
            drop(store);
            // Clean up the expired entry with a write lock
            let mut store = self.store.write().await;
            store.remove(&key);
            return Ok(None);
        }

        Ok(Some(entry.user_id))
    }

    async fn destroy(&self, token: &str) -> Result<(), SessionError> {
        let mut store = self.store.write().await;
        store.remove(&Self::digest(token));
        Ok(())
    }
}
