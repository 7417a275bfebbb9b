use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{auth::application::domain::entities::UserId, shared::ownership::Owned};

pub const MAX_TITLE_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub author: UserId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owned for Post {
    fn owner_id(&self) -> UserId {
        self.author
    }
}

/// `/topics/{topic_url_name}/posts/{post_id}` as it arrives in a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPath {
    pub topic_url_name: String,
    pub post_id: Uuid,
}

impl PostPath {
    pub fn new(topic_url_name: impl Into<String>, post_id: Uuid) -> Self {
        Self {
            topic_url_name: topic_url_name.into(),
            post_id,
        }
    }
}
