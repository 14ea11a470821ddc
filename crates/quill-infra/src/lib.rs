//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains database repositories, the session store, password
//! hashing, and the Google OAuth2 client.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory repositories only
//! - `postgres` - PostgreSQL persistence via SeaORM

pub mod auth;
pub mod database;
pub mod session;

// Re-exports - In-Memory
pub use database::{InMemoryPostRepository, InMemoryUserRepository};
pub use session::InMemorySessionStore;

pub use auth::{Argon2PasswordService, GoogleConfig, GoogleOAuth};

#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, PostgresUserRepository};
