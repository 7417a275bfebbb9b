use actix_web::{patch, put, web, HttpRequest, HttpResponse, Responder};
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
        application::{
            domain::entities::CommentPath, ports::incoming::use_cases::UpdateCommentError,
        },
    },
    shared::{
        api::{
            errors::{
                body_error_response, field_error_response, forbidden_response,
                lookup_error_response,
            },
            ApiResponse,
        },
        validation::UpdateMode,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Replace a comment
///
/// Only the author may update. `title` and `content` are required; an omitted
/// image keeps the stored one.
#[utoipa::path(
    put,
    path = "/api/v1/topics/{topic_url_name}/posts/{post_id}/comments/{comment_id}",
    tag = "comments",
    security(("token_auth" = [])),
    params(
        ("topic_url_name" = String, Path, description = "Topic url name"),
        ("post_id" = Uuid, Path, description = "Post id"),
        ("comment_id" = Uuid, Path, description = "Comment id")
    ),
    request_body(content = CommentForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Comment updated", body = inline(SuccessResponse<CommentResponse>)),
        (status = 400, description = "Invalid payload or image", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Topic, post or comment not found", body = ErrorResponse)
    )
)]
#[put("/api/v1/topics/{topic_url_name}/posts/{post_id}/comments/{comment_id}")]
pub async fn update_comment_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<(String, Uuid, Uuid)>,
    req: HttpRequest,
    payload: web::Payload,
) -> impl Responder {
    update_comment(user, data, path.into_inner(), req, payload, UpdateMode::Full).await
}

/// Partially update a comment
///
/// Only the author may update. Omitted fields are kept; `"image": null` clears
/// the image.
#[utoipa::path(
    patch,
    path = "/api/v1/topics/{topic_url_name}/posts/{post_id}/comments/{comment_id}",
    tag = "comments",
    security(("token_auth" = [])),
    params(
        ("topic_url_name" = String, Path, description = "Topic url name"),
        ("post_id" = Uuid, Path, description = "Post id"),
        ("comment_id" = Uuid, Path, description = "Comment id")
    ),
    request_body(content = CommentForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Comment updated", body = inline(SuccessResponse<CommentResponse>)),
        (status = 400, description = "Invalid payload or image", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Topic, post or comment not found", body = ErrorResponse)
    )
)]
#[patch("/api/v1/topics/{topic_url_name}/posts/{post_id}/comments/{comment_id}")]
pub async fn patch_comment_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<(String, Uuid, Uuid)>,
    req: HttpRequest,
    payload: web::Payload,
) -> impl Responder {
    update_comment(user, data, path.into_inner(), req, payload, UpdateMode::Partial).await
}

async fn update_comment(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    (topic_url_name, post_id, comment_id): (String, Uuid, Uuid),
    req: HttpRequest,
    payload: web::Payload,
    mode: UpdateMode,
) -> HttpResponse {
    let input = read_comment_input(&req, payload, data.comment.max_image_bytes).await;

    match data
        .comment
        .update
        .execute(
            user.user_id(),
            &CommentPath::new(topic_url_name, post_id, comment_id),
            input,
            mode,
        )
        .await
    {
        Ok(view) => ApiResponse::success(CommentResponse::from(view)),
        Err(err) => map_update_comment_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_update_comment_error(err: UpdateCommentError) -> HttpResponse {
    match err {
        UpdateCommentError::Lookup(e) => lookup_error_response(&e),
        UpdateCommentError::Forbidden(e) => forbidden_response(&e),
        UpdateCommentError::Body(e) => body_error_response(&e),
        UpdateCommentError::Validation(e) => field_error_response(&e),
        UpdateCommentError::Image(e) => image_error_response(&e),
        UpdateCommentError::RepositoryError(e) => {
            error!("Failed to update comment: {}", e);
            ApiResponse::internal_error()
        }
    }
}
