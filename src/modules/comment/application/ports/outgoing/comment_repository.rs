use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::domain::entities::Comment,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCommentData {
    pub post_id: Uuid,
    pub author: UserId,
    pub title: String,
    pub content: String,
    pub image_key: Option<String>,
}

/// `None` keeps the stored value; `image_key: Some(None)` clears the image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCommentData {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_key: Option<Option<String>>,
}

impl UpdateCommentData {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.image_key.is_none()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Comment not found")]
    CommentNotFound,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create_comment(&self, data: CreateCommentData)
        -> Result<Comment, CommentRepositoryError>;

    /// The write is scoped to `current`'s id and post.
    async fn update_comment(
        &self,
        current: &Comment,
        data: UpdateCommentData,
    ) -> Result<Comment, CommentRepositoryError>;

    async fn delete_comment(&self, comment: &Comment) -> Result<(), CommentRepositoryError>;
}
