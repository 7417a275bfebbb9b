use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::{
        domain::entities::CommentView, ports::incoming::use_cases::CommentImageError,
    },
    post::application::domain::entities::PostPath,
    shared::{
        api::form_payload::UploadedFile, lookup::LookupError, patch_field::PatchField,
        validation::FieldError,
    },
};

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

/// Client-writable comment fields, unvalidated. `image: Null` clears the
/// stored image on update.
#[derive(Debug, Clone, Default)]
pub struct CommentInput {
    pub title: PatchField<String>,
    pub content: PatchField<String>,
    pub image: PatchField<UploadedFile>,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCommentError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Invalid input: {0}")]
    Validation(#[from] FieldError),

    #[error(transparent)]
    Image(#[from] CommentImageError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        author: UserId,
        path: &PostPath,
        input: CommentInput,
    ) -> Result<CommentView, CreateCommentError>;
}
