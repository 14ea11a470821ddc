//! Session store port.

use async_trait::async_trait;
use uuid::Uuid;

/// Server-side session store.
///
/// A session maps an opaque browser-held token to a user id and nothing
/// else; the id is resolved back to a full `User` on every request.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Open a session for `user_id`, returning the token to hand the browser.
    async fn create(&self, user_id: Uuid) -> Result<String, SessionError>;

    /// Resolve a token to its user id. `None` for unknown or expired tokens.
    async fn resolve(&self, token: &str) -> Result<Option<Uuid>, SessionError>;

    /// Destroy a session. Unknown tokens are a no-op.
    async fn destroy(&self, token: &str) -> Result<(), SessionError>;
}

/// Session store errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session store error: {0}")]
    Store(String),
}
