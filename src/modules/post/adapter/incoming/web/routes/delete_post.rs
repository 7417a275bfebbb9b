use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    post::application::{
        domain::entities::PostPath, ports::incoming::use_cases::DeletePostError,
    },
    shared::api::{
        errors::{forbidden_response, lookup_error_response},
        ApiResponse,
    },
    AppState,
};

/// Delete a post
///
/// Only the author may delete. Comments of the post are removed too.
#[utoipa::path(
    delete,
    path = "/api/v1/topics/{topic_url_name}/posts/{post_id}",
    tag = "posts",
    security(("token_auth" = [])),
    params(
        ("topic_url_name" = String, Path, description = "Topic url name"),
        ("post_id" = Uuid, Path, description = "Post id")
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Topic or post not found", body = ErrorResponse)
    )
)]
#[delete("/api/v1/topics/{topic_url_name}/posts/{post_id}")]
pub async fn delete_post_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<(String, Uuid)>,
) -> impl Responder {
    let (topic_url_name, post_id) = path.into_inner();

    match data
        .post
        .delete
        .execute(user.user_id(), &PostPath::new(topic_url_name, post_id))
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_post_error(err),
    }
}

fn map_delete_post_error(err: DeletePostError) -> HttpResponse {
    match err {
        DeletePostError::Lookup(e) => lookup_error_response(&e),
        DeletePostError::Forbidden(e) => forbidden_response(&e),
        DeletePostError::RepositoryError(e) => {
            error!("Failed to delete post: {}", e);
            ApiResponse::internal_error()
        }
    }
}
