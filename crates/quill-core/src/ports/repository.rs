use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific lookups.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their login handle.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Look up a user by Google subject id, creating one on first sight.
    ///
    /// Idempotent: repeated calls with the same subject return the same user.
    async fn find_or_create_by_google_id(&self, google_id: &str) -> Result<User, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts owned by `owner_id`, newest first.
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Post>, RepoError>;
}
