use async_trait::async_trait;
use uuid::Uuid;

use crate::{auth::application::domain::entities::UserId, post::application::domain::entities::Post};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePostData {
    pub topic_id: Uuid,
    pub author: UserId,
    pub title: String,
    pub content: String,
}

/// `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePostData {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdatePostData {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Post not found")]
    PostNotFound,
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, data: CreatePostData) -> Result<Post, PostRepositoryError>;

    /// The write is scoped to `current`'s id and topic.
    async fn update_post(
        &self,
        current: &Post,
        data: UpdatePostData,
    ) -> Result<Post, PostRepositoryError>;

    /// Removes the post together with its comments.
    async fn delete_post(&self, post: &Post) -> Result<(), PostRepositoryError>;
}
