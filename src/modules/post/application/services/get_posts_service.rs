use async_trait::async_trait;

use crate::{
    post::application::{
        domain::entities::Post,
        ports::{
            incoming::use_cases::{GetPostsError, GetPostsUseCase},
            outgoing::PostQuery,
        },
    },
    topic::application::services::TopicResolver,
};

#[derive(Clone)]
pub struct GetPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    topics: TopicResolver,
    query: Q,
}

impl<Q> GetPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    pub fn new(topics: TopicResolver, query: Q) -> Self {
        Self { topics, query }
    }
}

#[async_trait]
impl<Q> GetPostsUseCase for GetPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, topic_url_name: &str) -> Result<Vec<Post>, GetPostsError> {
        let topic = self.topics.resolve(topic_url_name).await?;

        self.query
            .list_by_topic(topic.id)
            .await
            .map_err(|e| GetPostsError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::{
        post::application::services::test_support::{sample_post, MockPostQuery},
        shared::lookup::LookupError,
        topic::application::services::test_support::{sample_topic, MockTopicQuery},
    };

    #[tokio::test]
    async fn lists_only_posts_of_the_topic() {
        // Arrange
        let rust = sample_topic(Uuid::new_v4(), "rust");
        let go = sample_topic(Uuid::new_v4(), "go");
        let rust_post = sample_post(rust.id, Uuid::new_v4());
        let go_post = sample_post(go.id, Uuid::new_v4());
        let service = GetPostsService::new(
            TopicResolver::new(Arc::new(MockTopicQuery::with_topics(vec![rust, go]))),
            MockPostQuery::with_posts(vec![rust_post.clone(), go_post]),
        );

        // Act
        let posts = service.execute("rust").await.unwrap();

        // Assert
        assert_eq!(posts, vec![rust_post]);
    }

    #[tokio::test]
    async fn topic_without_posts_lists_nothing() {
        // Arrange
        let topic = sample_topic(Uuid::new_v4(), "rust");
        let service = GetPostsService::new(
            TopicResolver::new(Arc::new(MockTopicQuery::with_topics(vec![topic]))),
            MockPostQuery::with_posts(vec![]),
        );

        // Act
        let posts = service.execute("rust").await.unwrap();

        // Assert
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn unknown_topic_is_not_found() {
        // Arrange
        let service = GetPostsService::new(
            TopicResolver::new(Arc::new(MockTopicQuery::with_topics(vec![]))),
            MockPostQuery::with_posts(vec![]),
        );

        // Act
        let result = service.execute("missing").await;

        // Assert
        assert!(matches!(
            result,
            Err(GetPostsError::Lookup(LookupError::TopicNotFound))
        ));
    }

    #[tokio::test]
    async fn query_failure_is_repository_error() {
        // Arrange
        let topic = sample_topic(Uuid::new_v4(), "rust");
        let service = GetPostsService::new(
            TopicResolver::new(Arc::new(MockTopicQuery::with_topics(vec![topic]))),
            MockPostQuery::failing("db down"),
        );

        // Act
        let result = service.execute("rust").await;

        // Assert
        assert!(matches!(result, Err(GetPostsError::RepositoryError(_))));
    }
}
