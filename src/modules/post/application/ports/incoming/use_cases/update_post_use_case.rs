use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    post::application::{
        domain::entities::{Post, PostPath},
        ports::incoming::use_cases::PostInput,
    },
    shared::{
        lookup::LookupError,
        ownership::NotOwner,
        validation::{BodyError, FieldError, UpdateMode},
    },
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePostError {
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
pub trait UpdatePostUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: UserId,
        path: &PostPath,
        input: Result<PostInput, BodyError>,
        mode: UpdateMode,
    ) -> Result<Post, UpdatePostError>;
}
