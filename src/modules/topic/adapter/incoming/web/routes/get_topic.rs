use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::{errors::lookup_error_response, ApiResponse},
    topic::{
        adapter::incoming::web::routes::TopicResponse,
        application::ports::incoming::use_cases::GetTopicError,
    },
    AppState,
};

/// Retrieve a topic by its url name
#[utoipa::path(
    get,
    path = "/api/v1/topics/{url_name}",
    tag = "topics",
    security(("token_auth" = [])),
    params(("url_name" = String, Path, description = "Topic url name")),
    responses(
        (status = 200, description = "Topic", body = inline(SuccessResponse<TopicResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse)
    )
)]
#[get("/api/v1/topics/{url_name}")]
pub async fn get_topic_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.topic.get.execute(&path.into_inner()).await {
        Ok(topic) => ApiResponse::success(TopicResponse::from(topic)),
        Err(GetTopicError::Lookup(e)) => lookup_error_response(&e),
    }
}
