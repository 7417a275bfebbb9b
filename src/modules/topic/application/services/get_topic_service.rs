use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::Topic,
    ports::incoming::use_cases::{GetTopicError, GetTopicUseCase},
    services::TopicResolver,
};

#[derive(Clone)]
pub struct GetTopicService {
    topics: TopicResolver,
}

impl GetTopicService {
    pub fn new(topics: TopicResolver) -> Self {
        Self { topics }
    }
}

#[async_trait]
impl GetTopicUseCase for GetTopicService {
    async fn execute(&self, url_name: &str) -> Result<Topic, GetTopicError> {
        Ok(self.topics.resolve(url_name).await?)
    }
}
