use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::comment::adapter::incoming::web::routes::{CommentForm, CommentResponse};
use crate::post::adapter::incoming::web::routes::{PostRequest, PostResponse};
use crate::topic::adapter::incoming::web::routes::{AuthorResponse, TopicRequest, TopicResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forum API",
        version = "1.0.0",
        description = "Topics, posts and comments with image attachments"
    ),
    paths(
        // Topic endpoints
        crate::topic::adapter::incoming::web::routes::get_topics_handler,
        crate::topic::adapter::incoming::web::routes::create_topic_handler,
        crate::topic::adapter::incoming::web::routes::get_topic_handler,
        crate::topic::adapter::incoming::web::routes::update_topic_handler,
        crate::topic::adapter::incoming::web::routes::patch_topic_handler,
        crate::topic::adapter::incoming::web::routes::delete_topic_handler,

        // Post endpoints
        crate::post::adapter::incoming::web::routes::get_posts_handler,
        crate::post::adapter::incoming::web::routes::create_post_handler,
        crate::post::adapter::incoming::web::routes::get_post_handler,
        crate::post::adapter::incoming::web::routes::update_post_handler,
        crate::post::adapter::incoming::web::routes::patch_post_handler,
        crate::post::adapter::incoming::web::routes::delete_post_handler,

        // Comment endpoints
        crate::comment::adapter::incoming::web::routes::get_comments_handler,
        crate::comment::adapter::incoming::web::routes::create_comment_handler,
        crate::comment::adapter::incoming::web::routes::get_comment_handler,
        crate::comment::adapter::incoming::web::routes::update_comment_handler,
        crate::comment::adapter::incoming::web::routes::patch_comment_handler,
        crate::comment::adapter::incoming::web::routes::delete_comment_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Topic DTOs
            TopicRequest,
            TopicResponse,
            AuthorResponse,

            // Post DTOs
            PostRequest,
            PostResponse,

            // Comment DTOs
            CommentForm,
            CommentResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "topics", description = "Topic management endpoints"),
        (name = "posts", description = "Posts within a topic"),
        (name = "comments", description = "Comments on a post, with optional image"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token_auth",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "Authorization",
                    "API token in the form `Token <key>`",
                ))),
            )
        }
    }
}
