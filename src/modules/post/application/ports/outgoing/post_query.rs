use async_trait::async_trait;
use uuid::Uuid;

use crate::post::application::domain::entities::Post;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostQuery: Send + Sync {
    /// Posts of one topic, newest first.
    async fn list_by_topic(&self, topic_id: Uuid) -> Result<Vec<Post>, PostQueryError>;

    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, PostQueryError>;
}
