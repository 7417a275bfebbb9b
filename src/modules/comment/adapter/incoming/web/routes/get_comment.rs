use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    comment::{
        adapter::incoming::web::routes::CommentResponse,
        application::{
            domain::entities::CommentPath, ports::incoming::use_cases::GetCommentError,
        },
    },
    shared::api::{errors::lookup_error_response, ApiResponse},
    AppState,
};

/// Get a single comment
#[utoipa::path(
    get,
    path = "/api/v1/topics/{topic_url_name}/posts/{post_id}/comments/{comment_id}",
    tag = "comments",
    security(("token_auth" = [])),
    params(
        ("topic_url_name" = String, Path, description = "Topic url name"),
        ("post_id" = Uuid, Path, description = "Post id"),
        ("comment_id" = Uuid, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment found", body = inline(SuccessResponse<CommentResponse>)),
        (status = 404, description = "Topic, post or comment not found", body = ErrorResponse)
    )
)]
#[get("/api/v1/topics/{topic_url_name}/posts/{post_id}/comments/{comment_id}")]
pub async fn get_comment_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<(String, Uuid, Uuid)>,
) -> impl Responder {
    let (topic_url_name, post_id, comment_id) = path.into_inner();

    match data
        .comment
        .get
        .execute(&CommentPath::new(topic_url_name, post_id, comment_id))
        .await
    {
        Ok(view) => ApiResponse::success(CommentResponse::from(view)),
        Err(GetCommentError::Lookup(e)) => lookup_error_response(&e),
    }
}
