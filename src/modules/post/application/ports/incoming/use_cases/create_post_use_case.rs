use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    post::application::domain::entities::Post,
    shared::{lookup::LookupError, patch_field::PatchField, validation::FieldError},
};

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

/// Client-writable post fields, unvalidated.
#[derive(Debug, Clone, Default)]
pub struct PostInput {
    pub title: PatchField<String>,
    pub content: PatchField<String>,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Invalid input: {0}")]
    Validation(#[from] FieldError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(
        &self,
        author: UserId,
        topic_url_name: &str,
        input: PostInput,
    ) -> Result<Post, CreatePostError>;
}
