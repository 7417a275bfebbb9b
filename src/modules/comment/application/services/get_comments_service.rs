use async_trait::async_trait;

use crate::{
    comment::application::{
        domain::entities::CommentView,
        ports::{
            incoming::use_cases::{GetCommentsError, GetCommentsUseCase},
            outgoing::CommentQuery,
        },
        services::{CommentImages, CommentResolver},
    },
    post::application::domain::entities::PostPath,
};

#[derive(Clone)]
pub struct GetCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    comments: CommentResolver,
    query: Q,
    images: CommentImages,
}

impl<Q> GetCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    pub fn new(comments: CommentResolver, query: Q, images: CommentImages) -> Self {
        Self {
            comments,
            query,
            images,
        }
    }
}

#[async_trait]
impl<Q> GetCommentsUseCase for GetCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    async fn execute(&self, path: &PostPath) -> Result<Vec<CommentView>, GetCommentsError> {
        let post = self.comments.resolve_post(path).await?;

        let comments = self
            .query
            .list_by_post(post.id)
            .await
            .map_err(|e| GetCommentsError::RepositoryError(e.to_string()))?;

        Ok(comments
            .into_iter()
            .map(|comment| self.images.view(comment))
            .collect())
    }
}
