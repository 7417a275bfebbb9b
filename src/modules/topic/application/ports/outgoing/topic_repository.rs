use async_trait::async_trait;
use uuid::Uuid;

use crate::{auth::application::domain::entities::UserDetails, topic::application::domain::entities::Topic};

#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub author: UserDetails,
    pub name: String,
    pub url_name: String,
}

/// Only `name` is writable after creation.
#[derive(Debug, Clone, Default)]
pub struct UpdateTopicData {
    pub name: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,

    #[error("Url name already taken")]
    UrlNameTaken,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError>;

    /// Applies `data` to `current`; the author is carried over unchanged.
    async fn update_topic(
        &self,
        current: &Topic,
        data: UpdateTopicData,
    ) -> Result<Topic, TopicRepositoryError>;

    /// Removes the topic together with its posts and their comments.
    async fn delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError>;
}
