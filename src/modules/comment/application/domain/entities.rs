use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId, post::application::domain::entities::PostPath,
    shared::ownership::Owned,
};

pub const MAX_TITLE_LEN: usize = 255;

/// Object-storage prefix under which comment images are kept.
pub const IMAGE_SCOPE: &str = "comments";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author: UserId,
    pub title: String,
    pub content: String,
    /// Object-storage key, never a URL.
    pub image_key: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owned for Comment {
    fn owner_id(&self) -> UserId {
        self.author
    }
}

/// A comment as returned to clients, with the image key turned into a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub comment: Comment,
    pub image_url: Option<String>,
}

/// `/topics/{topic_url_name}/posts/{post_id}/comments/{comment_id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentPath {
    pub post: PostPath,
    pub comment_id: Uuid,
}

impl CommentPath {
    pub fn new(topic_url_name: impl Into<String>, post_id: Uuid, comment_id: Uuid) -> Self {
        Self {
            post: PostPath::new(topic_url_name, post_id),
            comment_id,
        }
    }
}
