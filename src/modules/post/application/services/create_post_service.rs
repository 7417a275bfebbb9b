use async_trait::async_trait;
use tracing::info;

use crate::{
    auth::application::domain::entities::UserId,
    post::application::{
        domain::entities::{Post, MAX_TITLE_LEN},
        ports::{
            incoming::use_cases::{CreatePostError, CreatePostUseCase, PostInput},
            outgoing::{CreatePostData, PostRepository},
        },
    },
    shared::validation::required_text,
    topic::application::services::TopicResolver,
};

#[derive(Clone)]
pub struct CreatePostService<R>
where
    R: PostRepository + Send + Sync,
{
    topics: TopicResolver,
    repository: R,
}

impl<R> CreatePostService<R>
where
    R: PostRepository + Send + Sync,
{
    pub fn new(topics: TopicResolver, repository: R) -> Self {
        Self { topics, repository }
    }
}

#[async_trait]
impl<R> CreatePostUseCase for CreatePostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(
        &self,
        author: UserId,
        topic_url_name: &str,
        input: PostInput,
    ) -> Result<Post, CreatePostError> {
        let topic = self.topics.resolve(topic_url_name).await?;

        let title = required_text("title", input.title, Some(MAX_TITLE_LEN))?;
        let content = required_text("content", input.content, None)?;

        let post = self
            .repository
            .create_post(CreatePostData {
                topic_id: topic.id,
                author,
                title,
                content,
            })
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))?;

        info!(post_id = %post.id, topic_id = %topic.id, "Post created");
        Ok(post)
    }
}
