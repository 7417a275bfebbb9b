use async_trait::async_trait;
use tracing::info;

use crate::{
    auth::application::domain::entities::UserDetails,
    shared::validation::required_text,
    topic::application::{
        domain::{
            entities::{Topic, MAX_NAME_LEN},
            url_name::{slugify, unique_url_name},
        },
        ports::{
            incoming::use_cases::{CreateTopicError, CreateTopicUseCase, TopicInput},
            outgoing::{CreateTopicData, TopicQuery, TopicRepository, TopicRepositoryError},
        },
    },
};

#[derive(Debug, Clone)]
pub struct CreateTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateTopicUseCase for CreateTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        author: UserDetails,
        input: TopicInput,
    ) -> Result<Topic, CreateTopicError> {
        let name = required_text("name", input.name, Some(MAX_NAME_LEN))?;

        let base = slugify(&name);
        let taken = self
            .query
            .url_names_like(&base)
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))?;
        let url_name = unique_url_name(&base, &taken);

        let topic = self
            .repository
            .create_topic(CreateTopicData {
                author,
                name,
                url_name,
            })
            .await
            .map_err(|e| match e {
                TopicRepositoryError::UrlNameTaken => CreateTopicError::UrlNameTaken,
                other => CreateTopicError::RepositoryError(other.to_string()),
            })?;

        info!(topic_id = %topic.id, url_name = %topic.url_name, "Topic created");
        Ok(topic)
    }
}
