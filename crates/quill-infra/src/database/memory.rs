//! In-memory repositories - used when DATABASE_URL is not configured and
//! as the backing store for handler tests. Data is lost on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Post, User};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository, UserRepository};

/// User repository backed by a HashMap with an async RwLock.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;
        store.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|u| u.username == username).cloned())
    }

    async fn find_or_create_by_google_id(&self, google_id: &str) -> Result<User, RepoError> {
        let mut store = self.store.write().await;

        if let Some(user) = store
            .values()
            .find(|u| u.google_id.as_deref() == Some(google_id))
        {
            return Ok(user.clone());
        }

        let user = User::with_google(google_id.to_string());
        store.insert(user.id, user.clone());
        Ok(user)
    }
}

/// Post repository backed by a HashMap with an async RwLock.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;

        let mut posts: Vec<Post> = store
            .values()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn save_then_find_by_username() {
        let repo = InMemoryUserRepository::new();
        let user = User::with_password("ann@example.com".into(), "$argon2id$stub".into());
        repo.save(user.clone()).await.unwrap();

        let found = repo.find_by_username("ann@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));
        assert!(repo.find_by_username("bob@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_or_create_is_idempotent() {
        let repo = InMemoryUserRepository::new();

        let first = repo.find_or_create_by_google_id("subject-1").await.unwrap();
        let second = repo.find_or_create_by_google_id("subject-1").await.unwrap();
        let other = repo.find_or_create_by_google_id("subject-2").await.unwrap();

        assert_eq!(first.id, second.id);
        assert_ne!(first.id, other.id);
    }

    #[tokio::test]
    async fn listing_is_scoped_to_the_owner_and_newest_first() {
        let repo = InMemoryPostRepository::new();
        let (ann, bob) = (Uuid::new_v4(), Uuid::new_v4());

        let mut older = Post::new(ann, "older".into(), "".into());
        older.created_at = Utc::now() - Duration::hours(1);
        let newer = Post::new(ann, "newer".into(), "".into());
        let foreign = Post::new(bob, "bob's".into(), "".into());

        repo.save(older).await.unwrap();
        repo.save(newer).await.unwrap();
        repo.save(foreign).await.unwrap();

        let posts = repo.find_by_owner(ann).await.unwrap();
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["newer", "older"]);
    }

    #[tokio::test]
    async fn delete_removes_exactly_the_targeted_post() {
        let repo = InMemoryPostRepository::new();
        let owner = Uuid::new_v4();

        let keep = Post::new(owner, "keep".into(), "".into());
        let doomed = Post::new(owner, "doomed".into(), "".into());
        repo.save(keep.clone()).await.unwrap();
        repo.save(doomed.clone()).await.unwrap();

        repo.delete(doomed.id).await.unwrap();

        let posts = repo.find_by_owner(owner).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, keep.id);
    }

    #[tokio::test]
    async fn deleting_a_missing_post_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let result = repo.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }
}
