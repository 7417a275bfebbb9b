// src/shared/api/path_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::PathConfig;

/// A path segment that does not parse into the handler's identifier type
/// names a resource that cannot exist, so it is reported as 404.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::not_found("NOT_FOUND", "Resource not found"),
        )
        .into()
    })
}
