use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserDetails,
    shared::patch_field::PatchField,
    topic::application::{domain::entities::Topic, ports::incoming::use_cases::TopicInput},
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Writable topic fields. Anything else in the body (`author`, `url_name`,
/// timestamps) is ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TopicRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Rust Programming")]
    pub name: PatchField<String>,
}

impl From<TopicRequest> for TopicInput {
    fn from(req: TopicRequest) -> Self {
        TopicInput { name: req.name }
    }
}

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorResponse {
    pub id: Uuid,
    #[schema(example = "johndoe")]
    pub username: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    #[schema(example = "John Doe")]
    pub full_name: String,
}

impl From<UserDetails> for AuthorResponse {
    fn from(user: UserDetails) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopicResponse {
    pub id: Uuid,
    #[schema(example = "rust-programming")]
    pub url_name: String,
    #[schema(example = "Rust Programming")]
    pub name: String,
    pub author: AuthorResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Topic> for TopicResponse {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id,
            url_name: topic.url_name,
            name: topic.name,
            author: topic.author.into(),
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        }
    }
}
