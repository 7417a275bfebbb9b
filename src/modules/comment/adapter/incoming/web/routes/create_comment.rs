use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    comment::{
        adapter::incoming::web::routes::{
            dto::{image_error_response, read_comment_input},
            CommentForm, CommentResponse,
        },
        application::ports::incoming::use_cases::CreateCommentError,
    },
    post::application::domain::entities::PostPath,
    shared::api::{
        errors::{body_error_response, field_error_response, lookup_error_response},
        ApiResponse,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Comment on a post
///
/// The caller becomes the author. Send `multipart/form-data` to attach an image.
#[utoipa::path(
    post,
    path = "/api/v1/topics/{topic_url_name}/posts/{post_id}/comments",
    tag = "comments",
    security(("token_auth" = [])),
    params(
        ("topic_url_name" = String, Path, description = "Topic url name"),
        ("post_id" = Uuid, Path, description = "Post id")
    ),
    request_body(content = CommentForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Comment created", body = inline(SuccessResponse<CommentResponse>)),
        (status = 400, description = "Invalid payload or image", body = ErrorResponse),
        (status = 404, description = "Topic or post not found", body = ErrorResponse)
    )
)]
#[post("/api/v1/topics/{topic_url_name}/posts/{post_id}/comments")]
pub async fn create_comment_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<(String, Uuid)>,
    req: HttpRequest,
    payload: web::Payload,
) -> impl Responder {
    let (topic_url_name, post_id) = path.into_inner();

    let input = match read_comment_input(&req, payload, data.comment.max_image_bytes).await {
        Ok(input) => input,
        Err(err) => return body_error_response(&err),
    };

    match data
        .comment
        .create
        .execute(user.user_id(), &PostPath::new(topic_url_name, post_id), input)
        .await
    {
        Ok(view) => ApiResponse::created(CommentResponse::from(view)),
        Err(err) => map_create_comment_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_comment_error(err: CreateCommentError) -> HttpResponse {
    match err {
        CreateCommentError::Lookup(e) => lookup_error_response(&e),
        CreateCommentError::Validation(e) => field_error_response(&e),
        CreateCommentError::Image(e) => image_error_response(&e),
        CreateCommentError::RepositoryError(e) => {
            error!("Failed to create comment: {}", e);
            ApiResponse::internal_error()
        }
    }
}
