//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{
    IdentityProvider, PasswordService, PostRepository, SessionStore, UserRepository,
};
use quill_infra::auth::{Argon2PasswordService, GoogleOAuth};
use quill_infra::database::{InMemoryPostRepository, InMemoryUserRepository};
use quill_infra::session::InMemorySessionStore;

#[cfg(feature = "postgres")]
use quill_infra::database::{PostgresPostRepository, PostgresUserRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub sessions: Arc<dyn SessionStore>,
    pub passwords: Arc<dyn PasswordService>,
    pub google: Option<Arc<dyn IdentityProvider>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let sessions: Arc<dyn SessionStore> =
            Arc::new(InMemorySessionStore::new(config.session_ttl));
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

        let google: Option<Arc<dyn IdentityProvider>> = match &config.google {
            Some(google_config) => Some(Arc::new(GoogleOAuth::new(google_config.clone()))),
            None => {
                tracing::warn!("Google credentials not set. Federated login disabled.");
                None
            }
        };

        #[cfg(feature = "postgres")]
        let (users, posts): (Arc<dyn UserRepository>, Arc<dyn PostRepository>) = {
            if let Some(db_config) = &config.database {
                match quill_infra::database::connect(db_config).await {
                    Ok(conn) => (
                        Arc::new(PostgresUserRepository::new(conn.clone())),
                        Arc::new(PostgresPostRepository::new(conn)),
                    ),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Self::in_memory_repos()
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory_repos()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (users, posts): (Arc<dyn UserRepository>, Arc<dyn PostRepository>) = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Self::in_memory_repos()
        };

        tracing::info!("Application state initialized");

        Self {
            users,
            posts,
            sessions,
            passwords,
            google,
        }
    }

    fn in_memory_repos() -> (Arc<dyn UserRepository>, Arc<dyn PostRepository>) {
        (
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
        )
    }

    /// Fully in-memory state, used by handler tests.
    #[cfg(test)]
    pub fn in_memory(google: Option<Arc<dyn IdentityProvider>>) -> Self {
        let (users, posts) = Self::in_memory_repos();

        Self {
            users,
            posts,
            sessions: Arc::new(InMemorySessionStore::new(std::time::Duration::from_secs(3600))),
            passwords: Arc::new(Argon2PasswordService::new()),
            google,
        }
    }
}
