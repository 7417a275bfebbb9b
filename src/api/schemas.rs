// Documentation-only mirrors of the response envelope in `shared::api::response`.
use serde::Serialize;
use utoipa::ToSchema;

/// `{"success": true, "data": ...}`
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// `{"success": false, "error": {"code": ..., "message": ...}}`
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

/// Stable machine-readable code plus a message meant for people.
///
/// Field errors use `MISSING_<FIELD>`, `EMPTY_<FIELD>` and `<FIELD>_TOO_LONG`.
/// Other codes: `MISSING_AUTH_HEADER`, `INVALID_TOKEN`, `FORBIDDEN`,
/// `VALIDATION_ERROR`, `INVALID_IMAGE`, `TOPIC_NOT_FOUND`, `POST_NOT_FOUND`,
/// `COMMENT_NOT_FOUND`, `TOPIC_URL_NAME_TAKEN`, `NOT_FOUND`, `INTERNAL_ERROR`.
#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    #[schema(example = "POST_NOT_FOUND")]
    pub code: String,

    #[schema(example = "Post not found")]
    pub message: String,
}
