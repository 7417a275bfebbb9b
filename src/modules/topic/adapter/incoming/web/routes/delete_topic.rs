use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::{
        errors::{forbidden_response, lookup_error_response},
        ApiResponse,
    },
    topic::application::ports::incoming::use_cases::DeleteTopicError,
    AppState,
};

/// Delete a topic
///
/// Only the author may delete. Posts and comments of the topic are removed too.
#[utoipa::path(
    delete,
    path = "/api/v1/topics/{url_name}",
    tag = "topics",
    security(("token_auth" = [])),
    params(("url_name" = String, Path, description = "Topic url name")),
    responses(
        (status = 204, description = "Topic deleted"),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse)
    )
)]
#[delete("/api/v1/topics/{url_name}")]
pub async fn delete_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.topic.delete.execute(user.user_id(), &path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_topic_error(err),
    }
}

fn map_delete_topic_error(err: DeleteTopicError) -> HttpResponse {
    match err {
        DeleteTopicError::Lookup(e) => lookup_error_response(&e),
        DeleteTopicError::Forbidden(e) => forbidden_response(&e),
        DeleteTopicError::RepositoryError(e) => {
            error!("Failed to delete topic: {}", e);
            ApiResponse::internal_error()
        }
    }
}
