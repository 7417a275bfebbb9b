use async_trait::async_trait;
use tracing::info;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::{
        domain::entities::CommentPath,
        ports::{
            incoming::use_cases::{DeleteCommentError, DeleteCommentUseCase},
            outgoing::{CommentRepository, CommentRepositoryError},
        },
        services::{CommentImages, CommentResolver},
    },
    shared::{lookup::LookupError, ownership::ensure_owner},
};

#[derive(Clone)]
pub struct DeleteCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    comments: CommentResolver,
    repository: R,
    images: CommentImages,
}

impl<R> DeleteCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    pub fn new(comments: CommentResolver, repository: R, images: CommentImages) -> Self {
        Self {
            comments,
            repository,
            images,
        }
    }
}

#[async_trait]
impl<R> DeleteCommentUseCase for DeleteCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    async fn execute(&self, principal: UserId, path: &CommentPath) -> Result<(), DeleteCommentError> {
        let comment = self.comments.resolve(path).await?;
        ensure_owner(principal, &comment)?;

        self.repository
            .delete_comment(&comment)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::CommentNotFound => {
                    DeleteCommentError::Lookup(LookupError::CommentNotFound)
                }
                other => DeleteCommentError::RepositoryError(other.to_string()),
            })?;

        if let Some(key) = &comment.image_key {
            self.images.discard(key).await;
        }

        info!(comment_id = %comment.id, "Comment deleted");
        Ok(())
    }
}
