use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a single journal entry.
///
/// `owner_id` and `created_at` are fixed at creation; edits only ever
/// replace the title and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `owner_id`.
    pub fn new(owner_id: Uuid, title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title,
            content,
            created_at: Utc::now(),
        }
    }

    /// Replace the editable fields, leaving id, owner and timestamp intact.
    pub fn edited(mut self, title: String, content: String) -> Self {
        self.title = title;
        self.content = content;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_preserves_identity_and_timestamp() {
        let owner = Uuid::new_v4();
        let post = Post::new(owner, "Day one".into(), "It rained.".into());
        let (id, created_at) = (post.id, post.created_at);

        let post = post.edited("Day one, amended".into(), "It poured.".into());

        assert_eq!(post.id, id);
        assert_eq!(post.owner_id, owner);
        assert_eq!(post.created_at, created_at);
        assert_eq!(post.title, "Day one, amended");
        assert_eq!(post.content, "It poured.");
    }
}
