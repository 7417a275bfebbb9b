use async_trait::async_trait;
use tracing::info;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::{
        domain::entities::{CommentView, MAX_TITLE_LEN},
        ports::{
            incoming::use_cases::{CommentInput, CreateCommentError, CreateCommentUseCase},
            outgoing::{CommentRepository, CreateCommentData},
        },
        services::{CommentImages, CommentResolver},
    },
    post::application::domain::entities::PostPath,
    shared::{patch_field::PatchField, validation::required_text},
};

#[derive(Clone)]
pub struct CreateCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    comments: CommentResolver,
    repository: R,
    images: CommentImages,
}

impl<R> CreateCommentService<R>
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
impl<R> CreateCommentUseCase for CreateCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        author: UserId,
        path: &PostPath,
        input: CommentInput,
    ) -> Result<CommentView, CreateCommentError> {
        let post = self.comments.resolve_post(path).await?;

        let title = required_text("title", input.title, Some(MAX_TITLE_LEN))?;
        let content = required_text("content", input.content, None)?;

        let image_key = match input.image {
            PatchField::Value(file) => Some(self.images.store(post.id, file).await?),
            PatchField::Unset | PatchField::Null => None,
        };

        let created = self
            .repository
            .create_comment(CreateCommentData {
                post_id: post.id,
                author,
                title,
                content,
                image_key: image_key.clone(),
            })
            .await;

        let comment = match created {
            Ok(comment) => comment,
            Err(e) => {
                if let Some(key) = &image_key {
                    self.images.discard(key).await;
                }
                return Err(CreateCommentError::RepositoryError(e.to_string()));
            }
        };

        info!(comment_id = %comment.id, post_id = %post.id, "Comment created");
        Ok(self.images.view(comment))
    }
}
