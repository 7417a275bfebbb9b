use async_trait::async_trait;
use tracing::info;

use crate::{
    auth::application::domain::entities::UserId,
    shared::{lookup::LookupError, ownership::ensure_owner},
    topic::application::{
        ports::{
            incoming::use_cases::{DeleteTopicError, DeleteTopicUseCase},
            outgoing::{TopicRepository, TopicRepositoryError},
        },
        services::TopicResolver,
    },
};

#[derive(Clone)]
pub struct DeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    topics: TopicResolver,
    repository: R,
}

impl<R> DeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(topics: TopicResolver, repository: R) -> Self {
        Self { topics, repository }
    }
}

#[async_trait]
impl<R> DeleteTopicUseCase for DeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, principal: UserId, url_name: &str) -> Result<(), DeleteTopicError> {
        let topic = self.topics.resolve(url_name).await?;
        ensure_owner(principal, &topic)?;

        self.repository
            .delete_topic(topic.id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => {
                    DeleteTopicError::Lookup(LookupError::TopicNotFound)
                }
                other => DeleteTopicError::RepositoryError(other.to_string()),
            })?;

        info!(topic_id = %topic.id, "Topic deleted");
        Ok(())
    }
}
