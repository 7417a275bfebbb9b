use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    comment::{
        adapter::incoming::web::routes::CommentResponse,
        application::ports::incoming::use_cases::GetCommentsError,
    },
    post::application::domain::entities::PostPath,
    shared::api::{errors::lookup_error_response, ApiResponse},
    AppState,
};

/// List the comments of a post
#[utoipa::path(
    get,
    path = "/api/v1/topics/{topic_url_name}/posts/{post_id}/comments",
    tag = "comments",
    security(("token_auth" = [])),
    params(
        ("topic_url_name" = String, Path, description = "Topic url name"),
        ("post_id" = Uuid, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Comments, newest first", body = inline(SuccessResponse<Vec<CommentResponse>>)),
        (status = 404, description = "Topic or post not found", body = ErrorResponse)
    )
)]
#[get("/api/v1/topics/{topic_url_name}/posts/{post_id}/comments")]
pub async fn get_comments_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<(String, Uuid)>,
) -> impl Responder {
    let (topic_url_name, post_id) = path.into_inner();

    match data
        .comment
        .list
        .execute(&PostPath::new(topic_url_name, post_id))
        .await
    {
        Ok(comments) => ApiResponse::success(
            comments
                .into_iter()
                .map(CommentResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(GetCommentsError::Lookup(e)) => lookup_error_response(&e),
        Err(GetCommentsError::RepositoryError(e)) => {
            error!("Failed to list comments: {}", e);
            ApiResponse::internal_error()
        }
    }
}
