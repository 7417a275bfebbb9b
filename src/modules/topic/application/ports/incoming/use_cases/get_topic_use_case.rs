use async_trait::async_trait;

use crate::{shared::lookup::LookupError, topic::application::domain::entities::Topic};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

#[async_trait]
pub trait GetTopicUseCase: Send + Sync {
    async fn execute(&self, url_name: &str) -> Result<Topic, GetTopicError>;
}
