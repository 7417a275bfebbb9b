use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::domain::entities::CommentPath,
    shared::{lookup::LookupError, ownership::NotOwner},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCommentError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Forbidden(#[from] NotOwner),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCommentUseCase: Send + Sync {
    async fn execute(&self, principal: UserId, path: &CommentPath)
        -> Result<(), DeleteCommentError>;
}
