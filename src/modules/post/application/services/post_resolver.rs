use std::sync::Arc;

use crate::{
    post::application::{
        domain::entities::{Post, PostPath},
        ports::outgoing::PostQuery,
    },
    shared::lookup::LookupError,
    topic::application::services::TopicResolver,
};

/// Second link of the chain: the post must belong to the topic in the path.
#[derive(Clone)]
pub struct PostResolver {
    topics: TopicResolver,
    query: Arc<dyn PostQuery + Send + Sync>,
}

impl PostResolver {
    pub fn new(topics: TopicResolver, query: Arc<dyn PostQuery + Send + Sync>) -> Self {
        Self { topics, query }
    }

    pub async fn resolve(&self, path: &PostPath) -> Result<Post, LookupError> {
        let topic = self.topics.resolve(&path.topic_url_name).await?;

        self.query
            .find_by_id(path.post_id)
            .await
            .map_err(|e| LookupError::QueryFailed(e.to_string()))?
            .filter(|post| post.topic_id == topic.id)
            .ok_or(LookupError::PostNotFound)
    }
}
