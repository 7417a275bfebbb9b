use async_trait::async_trait;

use crate::comment::application::{
    domain::entities::{CommentPath, CommentView},
    ports::incoming::use_cases::{GetCommentError, GetCommentUseCase},
    services::{CommentImages, CommentResolver},
};

#[derive(Clone)]
pub struct GetCommentService {
    comments: CommentResolver,
    images: CommentImages,
}

impl GetCommentService {
    pub fn new(comments: CommentResolver, images: CommentImages) -> Self {
        Self { comments, images }
    }
}

#[async_trait]
impl GetCommentUseCase for GetCommentService {
    async fn execute(&self, path: &CommentPath) -> Result<CommentView, GetCommentError> {
        let comment = self.comments.resolve(path).await?;
        Ok(self.images.view(comment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::{
        comment::application::services::test_support::{
            images, resolver, sample_comment, InMemoryObjectStorage, MockCommentQuery,
        },
        post::application::services::test_support::sample_post,
        shared::lookup::LookupError,
        topic::application::services::test_support::sample_topic,
    };

    #[tokio::test]
    async fn returns_comment_view() {
        // Arrange
        let topic = sample_topic(Uuid::new_v4(), "rust");
        let post = sample_post(topic.id, Uuid::new_v4());
        let comment = sample_comment(post.id, Uuid::new_v4());
        let storage = InMemoryObjectStorage::default();
        let service = GetCommentService::new(
            resolver(
                topic,
                post.clone(),
                MockCommentQuery::with_comments(vec![comment.clone()]),
            ),
            images(&storage),
        );

        // Act
        let view = service
            .execute(&CommentPath::new("rust", post.id, comment.id))
            .await
            .unwrap();

        // Assert
        assert_eq!(view.comment, comment);
        assert!(view.image_url.is_none());
    }

    #[tokio::test]
    async fn missing_comment_is_not_found() {
        // Arrange
        let topic = sample_topic(Uuid::new_v4(), "rust");
        let post = sample_post(topic.id, Uuid::new_v4());
        let storage = InMemoryObjectStorage::default();
        let service = GetCommentService::new(
            resolver(topic, post.clone(), MockCommentQuery::with_comments(vec![])),
            images(&storage),
        );

        // Act
        let result = service
            .execute(&CommentPath::new("rust", post.id, Uuid::new_v4()))
            .await;

        // Assert
        assert!(matches!(
            result,
            Err(GetCommentError::Lookup(LookupError::CommentNotFound))
        ));
    }
}
