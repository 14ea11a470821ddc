//! Authentication ports.

use async_trait::async_trait;

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Federated identity provider (OAuth2 authorization-code flow).
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// URL of the provider's consent page to redirect the browser to.
    fn authorize_url(&self) -> String;

    /// Exchange a callback code for the provider's stable subject id.
    async fn fetch_subject(&self, code: &str) -> Result<String, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Identity provider error: {0}")]
    Provider(String),

    #[error("Hashing error: {0}")]
    HashingError(String),
}
