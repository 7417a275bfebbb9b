use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    comment::application::{
        domain::entities::CommentView,
        ports::incoming::use_cases::{CommentImageError, CommentInput},
    },
    shared::{
        api::{
            form_payload::{read_form_payload, FormPayload, FormPayloadError},
            ApiResponse,
        },
        validation::BodyError,
    },
};

/// Comment body. Sent as `multipart/form-data` when it carries an image,
/// otherwise as JSON.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct CommentForm {
    #[schema(example = "Great write-up")]
    pub title: Option<String>,

    #[schema(example = "The section on lifetimes helped a lot.")]
    pub content: Option<String>,

    /// Image file (jpeg, png, gif or webp). An empty value or JSON `null` clears it.
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    pub id: Uuid,
    /// Id of the parent post
    pub post: Uuid,
    /// Id of the author
    pub author: Uuid,
    pub title: String,
    pub content: String,
    /// Public URL of the attached image
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CommentView> for CommentResponse {
    fn from(view: CommentView) -> Self {
        let comment = view.comment;
        Self {
            id: comment.id,
            post: comment.post_id,
            author: comment.author.value(),
            title: comment.title,
            content: comment.content,
            image: view.image_url,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

/// Reads a JSON or multipart comment body into use-case input.
pub(super) async fn read_comment_input(
    req: &HttpRequest,
    payload: web::Payload,
    max_image_bytes: usize,
) -> Result<CommentInput, BodyError> {
    let mut form = read_form_payload(req, payload, max_image_bytes).await?;

    Ok(comment_input(&mut form)?)
}

fn comment_input(form: &mut FormPayload) -> Result<CommentInput, FormPayloadError> {
    Ok(CommentInput {
        title: form.text("title")?,
        content: form.text("content")?,
        image: form.take_file("image")?,
    })
}

pub(super) fn image_error_response(err: &CommentImageError) -> HttpResponse {
    match err {
        CommentImageError::Rejected(e) => ApiResponse::bad_request("INVALID_IMAGE", &e.to_string()),
        CommentImageError::Storage(e) => {
            error!("Failed to store comment image: {}", e);
            ApiResponse::internal_error()
        }
    }
}
