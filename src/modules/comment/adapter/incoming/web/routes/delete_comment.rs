use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    comment::application::{
        domain::entities::CommentPath, ports::incoming::use_cases::DeleteCommentError,
    },
    shared::api::{
        errors::{forbidden_response, lookup_error_response},
        ApiResponse,
    },
    AppState,
};

/// Delete a comment
///
/// Only the author may delete. The attached image is removed as well.
#[utoipa::path(
    delete,
    path = "/api/v1/topics/{topic_url_name}/posts/{post_id}/comments/{comment_id}",
    tag = "comments",
    security(("token_auth" = [])),
    params(
        ("topic_url_name" = String, Path, description = "Topic url name"),
        ("post_id" = Uuid, Path, description = "Post id"),
        ("comment_id" = Uuid, Path, description = "Comment id")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Topic, post or comment not found", body = ErrorResponse)
    )
)]
#[delete("/api/v1/topics/{topic_url_name}/posts/{post_id}/comments/{comment_id}")]
pub async fn delete_comment_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<(String, Uuid, Uuid)>,
) -> impl Responder {
    let (topic_url_name, post_id, comment_id) = path.into_inner();

    match data
        .comment
        .delete
        .execute(
            user.user_id(),
            &CommentPath::new(topic_url_name, post_id, comment_id),
        )
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_comment_error(err),
    }
}

fn map_delete_comment_error(err: DeleteCommentError) -> HttpResponse {
    match err {
        DeleteCommentError::Lookup(e) => lookup_error_response(&e),
        DeleteCommentError::Forbidden(e) => forbidden_response(&e),
        DeleteCommentError::RepositoryError(e) => {
            error!("Failed to delete comment: {}", e);
            ApiResponse::internal_error()
        }
    }
}
