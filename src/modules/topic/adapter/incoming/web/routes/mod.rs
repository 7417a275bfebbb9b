mod create_topic;
mod delete_topic;
mod dto;
mod get_topic;
mod get_topics;
mod update_topic;

pub use create_topic::*;
pub use delete_topic::*;
pub use dto::{AuthorResponse, TopicRequest, TopicResponse};
pub use get_topic::*;
pub use get_topics::*;
pub use update_topic::*;
