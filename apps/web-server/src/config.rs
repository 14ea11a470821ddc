//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use quill_infra::GoogleConfig;
use quill_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub google: Option<GoogleConfig>,
    pub session_ttl: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        let session_ttl_hours: u64 = env::var("SESSION_TTL_HOURS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(24);

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database,
            google: Self::parse_google(),
            session_ttl: Duration::from_secs(session_ttl_hours * 3600),
        }
    }

    /// Google credentials are read as a set; a partial set disables
    /// federated login rather than half-configuring it.
    fn parse_google() -> Option<GoogleConfig> {
        let client_id = env::var("GOOGLE_CLIENT_ID").ok()?;
        let client_secret = env::var("GOOGLE_CLIENT_SECRET").ok()?;
        let redirect_uri = env::var("GOOGLE_CALLBACK_URL").ok()?;

        Some(GoogleConfig {
            client_id,
            client_secret,
            redirect_uri,
        })
    }
}
