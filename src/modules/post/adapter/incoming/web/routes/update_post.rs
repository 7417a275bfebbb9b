use actix_web::{patch, put, web, HttpRequest, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    post::{
        adapter::incoming::web::routes::{PostRequest, PostResponse},
        application::{
            domain::entities::PostPath,
            ports::incoming::use_cases::{PostInput, UpdatePostError},
        },
    },
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
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Replace a post
///
/// Only the author may update. `title` and `content` are required.
#[utoipa::path(
    put,
    path = "/api/v1/topics/{topic_url_name}/posts/{post_id}",
    tag = "posts",
    security(("token_auth" = [])),
    params(
        ("topic_url_name" = String, Path, description = "Topic url name"),
        ("post_id" = Uuid, Path, description = "Post id")
    ),
    request_body = PostRequest,
    responses(
        (status = 200, description = "Post updated", body = inline(SuccessResponse<PostResponse>)),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Topic or post not found", body = ErrorResponse)
    )
)]
#[put("/api/v1/topics/{topic_url_name}/posts/{post_id}")]
pub async fn update_post_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<(String, Uuid)>,
    req: HttpRequest,
    payload: web::Payload,
) -> impl Responder {
    let (topic_url_name, post_id) = path.into_inner();
    update_post(
        user,
        data,
        PostPath::new(topic_url_name, post_id),
        req,
        payload,
        UpdateMode::Full,
    )
    .await
}

/// Partially update a post
///
/// Only the author may update. Omitted fields are kept.
#[utoipa::path(
    patch,
    path = "/api/v1/topics/{topic_url_name}/posts/{post_id}",
    tag = "posts",
    security(("token_auth" = [])),
    params(
        ("topic_url_name" = String, Path, description = "Topic url name"),
        ("post_id" = Uuid, Path, description = "Post id")
    ),
    request_body = PostRequest,
    responses(
        (status = 200, description = "Post updated", body = inline(SuccessResponse<PostResponse>)),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Topic or post not found", body = ErrorResponse)
    )
)]
#[patch("/api/v1/topics/{topic_url_name}/posts/{post_id}")]
pub async fn patch_post_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<(String, Uuid)>,
    req: HttpRequest,
    payload: web::Payload,
) -> impl Responder {
    let (topic_url_name, post_id) = path.into_inner();
    update_post(
        user,
        data,
        PostPath::new(topic_url_name, post_id),
        req,
        payload,
        UpdateMode::Partial,
    )
    .await
}

async fn update_post(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: PostPath,
    req: HttpRequest,
    payload: web::Payload,
    mode: UpdateMode,
) -> HttpResponse {
    let input = read_json_body::<PostRequest>(&req, payload)
        .await
        .map(PostInput::from)
        .map_err(BodyError::from);

    match data
        .post
        .update
        .execute(user.user_id(), &path, input, mode)
        .await
    {
        Ok(post) => ApiResponse::success(PostResponse::from(post)),
        Err(err) => map_update_post_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_update_post_error(err: UpdatePostError) -> HttpResponse {
    match err {
        UpdatePostError::Lookup(e) => lookup_error_response(&e),
        UpdatePostError::Forbidden(e) => forbidden_response(&e),
        UpdatePostError::Body(e) => body_error_response(&e),
        UpdatePostError::Validation(e) => field_error_response(&e),
        UpdatePostError::RepositoryError(e) => {
            error!("Failed to update post: {}", e);
            ApiResponse::internal_error()
        }
    }
}
