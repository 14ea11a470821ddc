use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - an account that owns journal posts.
///
/// Every account carries at least one credential: a local password hash,
/// a Google subject id, or both. The two constructors are the only way to
/// build one, so that invariant holds by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Argon2 PHC string (salt embedded). `None` for Google-only accounts.
    pub password_hash: Option<String>,
    /// OAuth2 subject id. `None` for accounts registered locally.
    pub google_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a locally registered user with a hashed password.
    pub fn with_password(username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash: Some(password_hash),
            google_id: None,
            created_at: Utc::now(),
        }
    }

    /// Create a user from a federated Google login.
    ///
    /// The subject id doubles as the username since Google's `profile`
    /// scope carries no local handle.
    pub fn with_google(google_id: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: google_id.clone(),
            password_hash: None,
            google_id: Some(google_id),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_user_has_password_credential() {
        let user = User::with_password("ann@example.com".into(), "$argon2id$stub".into());
        assert!(user.password_hash.is_some());
        assert!(user.google_id.is_none());
        assert_eq!(user.username, "ann@example.com");
    }

    #[test]
    fn federated_user_has_subject_credential() {
        let user = User::with_google("108234".into());
        assert!(user.password_hash.is_none());
        assert_eq!(user.google_id.as_deref(), Some("108234"));
    }
}
