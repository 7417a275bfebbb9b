use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::{
        domain::entities::{CommentPath, CommentView},
        ports::incoming::use_cases::{CommentImageError, CommentInput},
    },
    shared::{
        lookup::LookupError,
        ownership::NotOwner,
        validation::{BodyError, FieldError, UpdateMode},
    },
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCommentError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Forbidden(#[from] NotOwner),

    #[error("Invalid body: {0}")]
    Body(#[from] BodyError),

    #[error("Invalid input: {0}")]
    Validation(#[from] FieldError),

    #[error(transparent)]
    Image(#[from] CommentImageError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: UserId,
        path: &CommentPath,
        input: Result<CommentInput, BodyError>,
        mode: UpdateMode,
    ) -> Result<CommentView, UpdateCommentError>;
}
