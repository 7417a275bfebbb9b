use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserDetails,
    shared::{patch_field::PatchField, validation::FieldError},
    topic::application::domain::entities::Topic,
};

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

/// Client-writable topic fields, unvalidated. Shared by create and update.
#[derive(Debug, Clone, Default)]
pub struct TopicInput {
    pub name: PatchField<String>,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Invalid input: {0}")]
    Validation(#[from] FieldError),

    #[error("Url name already taken")]
    UrlNameTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        author: UserDetails,
        input: TopicInput,
    ) -> Result<Topic, CreateTopicError>;
}
