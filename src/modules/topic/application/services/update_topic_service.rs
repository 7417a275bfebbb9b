use async_trait::async_trait;
use tracing::info;

use crate::{
    auth::application::domain::entities::UserId,
    shared::{
        lookup::LookupError,
        ownership::ensure_owner,
        validation::{text_for_update, BodyError, UpdateMode},
    },
    topic::application::{
        domain::entities::{Topic, MAX_NAME_LEN},
        ports::{
            incoming::use_cases::{TopicInput, UpdateTopicError, UpdateTopicUseCase},
            outgoing::{TopicRepository, TopicRepositoryError, UpdateTopicData},
        },
        services::TopicResolver,
    },
};

#[derive(Clone)]
pub struct UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    topics: TopicResolver,
    repository: R,
}

impl<R> UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(topics: TopicResolver, repository: R) -> Self {
        Self { topics, repository }
    }
}

#[async_trait]
impl<R> UpdateTopicUseCase for UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        principal: UserId,
        url_name: &str,
        input: Result<TopicInput, BodyError>,
        mode: UpdateMode,
    ) -> Result<Topic, UpdateTopicError> {
        let topic = self.topics.resolve(url_name).await?;
        ensure_owner(principal, &topic)?;
        let input = input?;

        let name = text_for_update("name", input.name, Some(MAX_NAME_LEN), mode)?;
        if name.is_none() {
            return Ok(topic);
        }

        let updated = self
            .repository
            .update_topic(&topic, UpdateTopicData { name })
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => {
                    UpdateTopicError::Lookup(LookupError::TopicNotFound)
                }
                other => UpdateTopicError::RepositoryError(other.to_string()),
            })?;

        info!(topic_id = %updated.id, "Topic updated");
        Ok(updated)
    }
}
