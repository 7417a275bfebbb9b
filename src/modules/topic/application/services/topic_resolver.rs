use std::sync::Arc;

use crate::{
    shared::lookup::LookupError,
    topic::application::{domain::entities::Topic, ports::outgoing::TopicQuery},
};

/// First link of the `Topic → Post → Comment` chain.
#[derive(Clone)]
pub struct TopicResolver {
    query: Arc<dyn TopicQuery + Send + Sync>,
}

impl TopicResolver {
    pub fn new(query: Arc<dyn TopicQuery + Send + Sync>) -> Self {
        Self { query }
    }

    pub async fn resolve(&self, url_name: &str) -> Result<Topic, LookupError> {
        self.query
            .find_by_url_name(url_name)
            .await
            .map_err(|e| LookupError::QueryFailed(e.to_string()))?
            .ok_or(LookupError::TopicNotFound)
    }
}
