use actix_web::{patch, put, web, HttpRequest, HttpResponse, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::{
        api::{
            errors::{
                body_error_response, field_error_response, forbidden_response,
                lookup_error_response,
            },
            form_payload::read_json_body,
            ApiResponse,
        },
        validation::{BodyError, UpdateMode},
    },
    topic::{
        adapter::incoming::web::routes::{TopicRequest, TopicResponse},
        application::ports::incoming::use_cases::{TopicInput, UpdateTopicError},
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Replace a topic
///
/// Only the author may update. `name` is required.
#[utoipa::path(
    put,
    path = "/api/v1/topics/{url_name}",
    tag = "topics",
    security(("token_auth" = [])),
    params(("url_name" = String, Path, description = "Topic url name")),
    request_body = TopicRequest,
    responses(
        (status = 200, description = "Topic updated", body = inline(SuccessResponse<TopicResponse>)),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse)
    )
)]
#[put("/api/v1/topics/{url_name}")]
pub async fn update_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
    payload: web::Payload,
) -> impl Responder {
    update_topic(user, data, path.into_inner(), req, payload, UpdateMode::Full).await
}

/// Partially update a topic
///
/// Only the author may update. Omitted fields are kept.
#[utoipa::path(
    patch,
    path = "/api/v1/topics/{url_name}",
    tag = "topics",
    security(("token_auth" = [])),
    params(("url_name" = String, Path, description = "Topic url name")),
    request_body = TopicRequest,
    responses(
        (status = 200, description = "Topic updated", body = inline(SuccessResponse<TopicResponse>)),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse)
    )
)]
#[patch("/api/v1/topics/{url_name}")]
pub async fn patch_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
    payload: web::Payload,
) -> impl Responder {
    update_topic(user, data, path.into_inner(), req, payload, UpdateMode::Partial).await
}

async fn update_topic(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    url_name: String,
    req: HttpRequest,
    payload: web::Payload,
    mode: UpdateMode,
) -> HttpResponse {
    let input = read_json_body::<TopicRequest>(&req, payload)
        .await
        .map(TopicInput::from)
        .map_err(BodyError::from);

    match data
        .topic
        .update
        .execute(user.user_id(), &url_name, input, mode)
        .await
    {
        Ok(topic) => ApiResponse::success(TopicResponse::from(topic)),
        Err(err) => map_update_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_update_topic_error(err: UpdateTopicError) -> HttpResponse {
    match err {
        UpdateTopicError::Lookup(e) => lookup_error_response(&e),
        UpdateTopicError::Forbidden(e) => forbidden_response(&e),
        UpdateTopicError::Body(e) => body_error_response(&e),
        UpdateTopicError::Validation(e) => field_error_response(&e),
        UpdateTopicError::RepositoryError(e) => {
            error!("Failed to update topic: {}", e);
            ApiResponse::internal_error()
        }
    }
}
