use async_trait::async_trait;

use crate::{
    comment::application::domain::entities::CommentView,
    post::application::domain::entities::PostPath, shared::lookup::LookupError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCommentsError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCommentsUseCase: Send + Sync {
    async fn execute(&self, path: &PostPath) -> Result<Vec<CommentView>, GetCommentsError>;
}
