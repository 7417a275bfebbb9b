use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    shared::{lookup::LookupError, ownership::NotOwner},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTopicError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Forbidden(#[from] NotOwner),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteTopicUseCase: Send + Sync {
    async fn execute(&self, principal: UserId, url_name: &str) -> Result<(), DeleteTopicError>;
}
