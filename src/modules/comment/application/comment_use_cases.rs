use std::sync::Arc;

use crate::comment::application::ports::incoming::use_cases::{
    CreateCommentUseCase, DeleteCommentUseCase, GetCommentUseCase, GetCommentsUseCase,
    UpdateCommentUseCase,
};

#[derive(Clone)]
pub struct CommentUseCases {
    pub list: Arc<dyn GetCommentsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateCommentUseCase + Send + Sync>,
    pub get: Arc<dyn GetCommentUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCommentUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCommentUseCase + Send + Sync>,
    /// Upper bound for an uploaded image part, enforced while streaming.
    pub max_image_bytes: usize,
}
