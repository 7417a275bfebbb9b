use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    shared::{
        lookup::LookupError,
        ownership::NotOwner,
        validation::{BodyError, FieldError, UpdateMode},
    },
    topic::application::{
        domain::entities::Topic, ports::incoming::use_cases::TopicInput,
    },
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTopicError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Forbidden(#[from] NotOwner),

    #[error("Invalid body: {0}")]
    Body(#[from] BodyError),

    #[error("Invalid input: {0}")]
    Validation(#[from] FieldError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: UserId,
        url_name: &str,
        input: Result<TopicInput, BodyError>,
        mode: UpdateMode,
    ) -> Result<Topic, UpdateTopicError>;
}
