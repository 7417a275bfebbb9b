use async_trait::async_trait;

use crate::{
    post::application::domain::entities::{Post, PostPath},
    shared::lookup::LookupError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

#[async_trait]
pub trait GetPostUseCase: Send + Sync {
    async fn execute(&self, path: &PostPath) -> Result<Post, GetPostError>;
}
