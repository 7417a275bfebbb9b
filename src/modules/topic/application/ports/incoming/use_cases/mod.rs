mod create_topic_use_case;
mod delete_topic_use_case;
mod get_topic_use_case;
mod get_topics_use_case;
mod update_topic_use_case;

pub use create_topic_use_case::{CreateTopicError, CreateTopicUseCase, TopicInput};
pub use delete_topic_use_case::{DeleteTopicError, DeleteTopicUseCase};
pub use get_topic_use_case::{GetTopicError, GetTopicUseCase};
pub use get_topics_use_case::{GetTopicsError, GetTopicsUseCase};
pub use update_topic_use_case::{UpdateTopicError, UpdateTopicUseCase};
