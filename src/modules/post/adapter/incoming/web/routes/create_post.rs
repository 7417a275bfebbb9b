use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    post::{
        adapter::incoming::web::routes::{PostRequest, PostResponse},
        application::ports::incoming::use_cases::CreatePostError,
    },
    shared::api::{
        errors::{field_error_response, lookup_error_response},
        ApiResponse,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create a post in a topic
///
/// The caller becomes the author; the topic comes from the path.
#[utoipa::path(
    post,
    path = "/api/v1/topics/{topic_url_name}/posts",
    tag = "posts",
    security(("token_auth" = [])),
    params(("topic_url_name" = String, Path, description = "Topic url name")),
    request_body = PostRequest,
    responses(
        (status = 201, description = "Post created", body = inline(SuccessResponse<PostResponse>)),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse)
    )
)]
#[post("/api/v1/topics/{topic_url_name}/posts")]
pub async fn create_post_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<PostRequest>,
) -> impl Responder {
    match data
        .post
        .create
        .execute(user.user_id(), &path.into_inner(), payload.into_inner().into())
        .await
    {
        Ok(post) => ApiResponse::created(PostResponse::from(post)),
        Err(err) => map_create_post_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_post_error(err: CreatePostError) -> HttpResponse {
    match err {
        CreatePostError::Lookup(e) => lookup_error_response(&e),
        CreatePostError::Validation(e) => field_error_response(&e),
        CreatePostError::RepositoryError(e) => {
            error!("Failed to create post: {}", e);
            ApiResponse::internal_error()
        }
    }
}
