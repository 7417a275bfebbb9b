use async_trait::async_trait;

use crate::topic::application::domain::entities::Topic;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// Every topic, newest first, with its author embedded.
    async fn list_topics(&self) -> Result<Vec<Topic>, TopicQueryError>;

    async fn find_by_url_name(&self, url_name: &str) -> Result<Option<Topic>, TopicQueryError>;

    /// Existing url names equal to `base` or starting with `base-`.
    async fn url_names_like(&self, base: &str) -> Result<Vec<String>, TopicQueryError>;
}
