use async_trait::async_trait;

use crate::{post::application::domain::entities::Post, shared::lookup::LookupError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostsError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPostsUseCase: Send + Sync {
    async fn execute(&self, topic_url_name: &str) -> Result<Vec<Post>, GetPostsError>;
}
