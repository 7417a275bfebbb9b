use async_trait::async_trait;
use tracing::info;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::{
        domain::entities::{CommentPath, CommentView, MAX_TITLE_LEN},
        ports::{
            incoming::use_cases::{CommentInput, UpdateCommentError, UpdateCommentUseCase},
            outgoing::{CommentRepository, CommentRepositoryError, UpdateCommentData},
        },
        services::{CommentImages, CommentResolver},
    },
    shared::{
        lookup::LookupError,
        ownership::ensure_owner,
        patch_field::PatchField,
        validation::{text_for_update, BodyError, UpdateMode},
    },
};

#[derive(Clone)]
pub struct UpdateCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    comments: CommentResolver,
    repository: R,
    images: CommentImages,
}

impl<R> UpdateCommentService<R>
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
impl<R> UpdateCommentUseCase for UpdateCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        principal: UserId,
        path: &CommentPath,
        input: Result<CommentInput, BodyError>,
        mode: UpdateMode,
    ) -> Result<CommentView, UpdateCommentError> {
        let comment = self.comments.resolve(path).await?;
        ensure_owner(principal, &comment)?;
        let input = input?;

        let title = text_for_update("title", input.title, Some(MAX_TITLE_LEN), mode)?;
        let content = text_for_update("content", input.content, None, mode)?;

        // An omitted image is kept in both modes.
        let image_key = match input.image {
            PatchField::Unset => None,
            PatchField::Null => Some(None),
            PatchField::Value(file) => {
                Some(Some(self.images.store(comment.post_id, file).await?))
            }
        };

        let data = UpdateCommentData {
            title,
            content,
            image_key,
        };
        if data.is_empty() {
            return Ok(self.images.view(comment));
        }

        let new_key = data.image_key.clone().flatten();
        let image_changed = data.image_key.is_some();

        let updated = match self.repository.update_comment(&comment, data).await {
            Ok(updated) => updated,
            Err(e) => {
                if let Some(key) = &new_key {
                    self.images.discard(key).await;
                }
                return Err(match e {
                    CommentRepositoryError::CommentNotFound => {
                        UpdateCommentError::Lookup(LookupError::CommentNotFound)
                    }
                    other => UpdateCommentError::RepositoryError(other.to_string()),
                });
            }
        };

        if image_changed {
            if let Some(old_key) = &comment.image_key {
                self.images.discard(old_key).await;
            }
        }

        info!(comment_id = %updated.id, "Comment updated");
        Ok(self.images.view(updated))
    }
}
