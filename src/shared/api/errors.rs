// src/shared/api/errors.rs
use actix_web::HttpResponse;

use crate::shared::{
    api::ApiResponse,
    lookup::LookupError,
    ownership::NotOwner,
    validation::{BodyError, FieldError},
};

pub fn lookup_error_response(err: &LookupError) -> HttpResponse {
    match err {
        LookupError::TopicNotFound => ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found"),
        LookupError::PostNotFound => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        LookupError::CommentNotFound => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        LookupError::QueryFailed(msg) => {
            tracing::error!("Lookup query failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

pub fn forbidden_response(err: &NotOwner) -> HttpResponse {
    ApiResponse::forbidden("FORBIDDEN", &err.to_string())
}

pub fn field_error_response(err: &FieldError) -> HttpResponse {
    ApiResponse::bad_request(&err.code(), &err.to_string())
}

/// An oversized file is reported as an image problem; anything else about
/// the body is a generic validation error.
pub fn body_error_response(err: &BodyError) -> HttpResponse {
    match err {
        BodyError::FileTooLarge(msg) => ApiResponse::bad_request("INVALID_IMAGE", msg),
        BodyError::Malformed(msg) => ApiResponse::bad_request("VALIDATION_ERROR", msg),
    }
}
