use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    post::application::domain::entities::PostPath,
    shared::{lookup::LookupError, ownership::NotOwner},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePostError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Forbidden(#[from] NotOwner),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeletePostUseCase: Send + Sync {
    async fn execute(&self, principal: UserId, path: &PostPath) -> Result<(), DeletePostError>;
}
