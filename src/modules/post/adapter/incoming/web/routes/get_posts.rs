use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    post::{
        adapter::incoming::web::routes::PostResponse,
        application::ports::incoming::use_cases::GetPostsError,
    },
    shared::api::{errors::lookup_error_response, ApiResponse},
    AppState,
};

/// List the posts of a topic
#[utoipa::path(
    get,
    path = "/api/v1/topics/{topic_url_name}/posts",
    tag = "posts",
    security(("token_auth" = [])),
    params(("topic_url_name" = String, Path, description = "Topic url name")),
    responses(
        (status = 200, description = "Posts, newest first", body = inline(SuccessResponse<Vec<PostResponse>>)),
        (status = 404, description = "Topic not found", body = ErrorResponse)
    )
)]
#[get("/api/v1/topics/{topic_url_name}/posts")]
pub async fn get_posts_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.post.list.execute(&path.into_inner()).await {
        Ok(posts) => ApiResponse::success(
            posts
                .into_iter()
                .map(PostResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(GetPostsError::Lookup(e)) => lookup_error_response(&e),
        Err(GetPostsError::RepositoryError(e)) => {
            error!("Failed to list posts: {}", e);
            ApiResponse::internal_error()
        }
    }
}
