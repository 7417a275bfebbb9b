use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::entities::Comment;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentQuery: Send + Sync {
    /// Comments of one post, newest first.
    async fn list_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, CommentQueryError>;

    async fn find_by_id(&self, comment_id: Uuid) -> Result<Option<Comment>, CommentQueryError>;
}
