use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    post::{
        adapter::incoming::web::routes::PostResponse,
        application::{
            domain::entities::PostPath, ports::incoming::use_cases::GetPostError,
        },
    },
    shared::api::{errors::lookup_error_response, ApiResponse},
    AppState,
};

/// Retrieve a post of a topic
#[utoipa::path(
    get,
    path = "/api/v1/topics/{topic_url_name}/posts/{post_id}",
    tag = "posts",
    security(("token_auth" = [])),
    params(
        ("topic_url_name" = String, Path, description = "Topic url name"),
        ("post_id" = Uuid, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post", body = inline(SuccessResponse<PostResponse>)),
        (status = 404, description = "Topic or post not found", body = ErrorResponse)
    )
)]
#[get("/api/v1/topics/{topic_url_name}/posts/{post_id}")]
pub async fn get_post_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<(String, Uuid)>,
) -> impl Responder {
    let (topic_url_name, post_id) = path.into_inner();

    match data
        .post
        .get
        .execute(&PostPath::new(topic_url_name, post_id))
        .await
    {
        Ok(post) => ApiResponse::success(PostResponse::from(post)),
        Err(GetPostError::Lookup(e)) => lookup_error_response(&e),
    }
}
