use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    post::application::{domain::entities::Post, ports::incoming::use_cases::PostInput},
    shared::patch_field::PatchField,
};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PostRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Borrowing rules")]
    pub title: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "One mutable or many shared references.")]
    pub content: PatchField<String>,
}

impl From<PostRequest> for PostInput {
    fn from(req: PostRequest) -> Self {
        PostInput {
            title: req.title,
            content: req.content,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    pub id: Uuid,
    /// Id of the parent topic
    pub topic: Uuid,
    /// Id of the author
    pub author: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            topic: post.topic_id,
            author: post.author.value(),
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
