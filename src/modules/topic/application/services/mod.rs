mod create_topic_service;
mod delete_topic_service;
mod get_topic_service;
mod get_topics_service;
mod topic_resolver;
mod update_topic_service;

pub use create_topic_service::CreateTopicService;
pub use delete_topic_service::DeleteTopicService;
pub use get_topic_service::GetTopicService;
pub use get_topics_service::GetTopicsService;
pub use topic_resolver::TopicResolver;
pub use update_topic_service::UpdateTopicService;

#[cfg(test)]
pub(crate) mod test_support;
