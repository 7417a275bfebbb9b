use async_trait::async_trait;

use crate::{
    comment::application::domain::entities::{CommentPath, CommentView},
    shared::lookup::LookupError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCommentError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

#[async_trait]
pub trait GetCommentUseCase: Send + Sync {
    async fn execute(&self, path: &CommentPath) -> Result<CommentView, GetCommentError>;
}
