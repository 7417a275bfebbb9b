// src/shared/api/form_payload.rs
use std::collections::HashMap;

use actix_multipart::Multipart;
use actix_web::{
    http::header::CONTENT_TYPE,
    web::{self, BytesMut},
    HttpRequest,
};
use futures::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::shared::{patch_field::PatchField, validation::BodyError};

/// Largest accepted JSON body or multipart text part.
pub const MAX_TEXT_BYTES: usize = 256 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum FormPayloadError {
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("Malformed JSON body: {0}")]
    MalformedJson(String),

    #[error("JSON body must be an object")]
    NotAnObject,

    #[error("Malformed multipart body: {0}")]
    MalformedMultipart(String),

    #[error("Field '{0}' has an invalid value")]
    InvalidField(String),

    #[error("Field '{0}' is too large")]
    TextTooLarge(String),

    #[error("File '{field}' exceeds {limit} bytes")]
    FileTooLarge { field: String, limit: usize },
}

impl From<FormPayloadError> for BodyError {
    fn from(err: FormPayloadError) -> Self {
        match err {
            FormPayloadError::FileTooLarge { .. } => BodyError::FileTooLarge(err.to_string()),
            other => BodyError::Malformed(other.to_string()),
        }
    }
}

/// Request body of a create/update call that may carry files.
/// Text values keep JSON semantics (absent, null, value) so PATCH can tell
/// "not provided" apart from "clear".
#[derive(Debug, Default)]
pub struct FormPayload {
    fields: Map<String, Value>,
    files: HashMap<String, UploadedFile>,
}

impl FormPayload {
    pub fn text(&self, name: &str) -> Result<PatchField<String>, FormPayloadError> {
        match self.fields.get(name) {
            None => Ok(PatchField::Unset),
            Some(Value::Null) => Ok(PatchField::Null),
            Some(Value::String(s)) => Ok(PatchField::Value(s.clone())),
            Some(_) => Err(FormPayloadError::InvalidField(name.to_string())),
        }
    }

    /// A file part wins; otherwise a null JSON value or an empty multipart
    /// text part means "clear".
    pub fn take_file(&mut self, name: &str) -> Result<PatchField<UploadedFile>, FormPayloadError> {
        if let Some(file) = self.files.remove(name) {
            return Ok(PatchField::Value(file));
        }

        match self.fields.get(name) {
            None => Ok(PatchField::Unset),
            Some(Value::Null) => Ok(PatchField::Null),
            Some(Value::String(s)) if s.is_empty() => Ok(PatchField::Null),
            Some(_) => Err(FormPayloadError::InvalidField(name.to_string())),
        }
    }
}

fn content_type_of(req: &HttpRequest) -> String {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// Reads either an `application/json` or a `multipart/form-data` body.
pub async fn read_form_payload(
    req: &HttpRequest,
    payload: web::Payload,
    max_file_bytes: usize,
) -> Result<FormPayload, FormPayloadError> {
    let content_type = content_type_of(req);

    if content_type.starts_with("multipart/form-data") {
        read_multipart(req, payload, max_file_bytes).await
    } else if content_type.is_empty() || content_type.starts_with("application/json") {
        read_json(payload).await
    } else {
        Err(FormPayloadError::UnsupportedContentType(content_type))
    }
}

/// Reads a JSON object body into `T`. An empty body reads as `{}`.
pub async fn read_json_body<T: DeserializeOwned>(
    req: &HttpRequest,
    payload: web::Payload,
) -> Result<T, FormPayloadError> {
    let content_type = content_type_of(req);
    if !content_type.is_empty() && !content_type.starts_with("application/json") {
        return Err(FormPayloadError::UnsupportedContentType(content_type));
    }

    let body = collect_body(payload).await?;
    let body: &[u8] = if body.is_empty() { b"{}" } else { &body };

    let value: Value =
        serde_json::from_slice(body).map_err(|e| FormPayloadError::MalformedJson(e.to_string()))?;
    if !value.is_object() {
        return Err(FormPayloadError::NotAnObject);
    }

    serde_json::from_value(value).map_err(|e| FormPayloadError::MalformedJson(e.to_string()))
}

async fn collect_body(mut payload: web::Payload) -> Result<BytesMut, FormPayloadError> {
    let mut body = BytesMut::new();

    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| FormPayloadError::MalformedJson(e.to_string()))?;
        if body.len() + chunk.len() > MAX_TEXT_BYTES {
            return Err(FormPayloadError::TextTooLarge("body".to_string()));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

async fn read_json(payload: web::Payload) -> Result<FormPayload, FormPayloadError> {
    let body = collect_body(payload).await?;

    if body.is_empty() {
        return Ok(FormPayload::default());
    }

    let value: Value =
        serde_json::from_slice(&body).map_err(|e| FormPayloadError::MalformedJson(e.to_string()))?;

    match value {
        Value::Object(fields) => Ok(FormPayload {
            fields,
            files: HashMap::new(),
        }),
        _ => Err(FormPayloadError::NotAnObject),
    }
}

async fn read_multipart(
    req: &HttpRequest,
    payload: web::Payload,
    max_file_bytes: usize,
) -> Result<FormPayload, FormPayloadError> {
    let mut multipart = Multipart::new(req.headers(), payload);
    let mut form = FormPayload::default();

    while let Some(field) = multipart.next().await {
        let mut field = field.map_err(|e| FormPayloadError::MalformedMultipart(e.to_string()))?;

        let disposition = field.content_disposition();
        let name = disposition.get_name().unwrap_or_default().to_string();
        let file_name = disposition.get_filename().map(str::to_string);
        let content_type = field.content_type().map(|m| m.essence_str().to_string());

        let limit = if file_name.is_some() {
            max_file_bytes
        } else {
            MAX_TEXT_BYTES
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| FormPayloadError::MalformedMultipart(e.to_string()))?;
            if bytes.len() + chunk.len() > limit {
                return Err(match file_name {
                    Some(_) => FormPayloadError::FileTooLarge { field: name, limit },
                    None => FormPayloadError::TextTooLarge(name),
                });
            }
            bytes.extend_from_slice(&chunk);
        }

        // An empty file input in an HTML form arrives as a nameless, empty part.
        if file_name.as_deref() == Some("") && bytes.is_empty() {
            continue;
        }

        if file_name.is_some() {
            form.files.insert(
                name,
                UploadedFile {
                    file_name,
                    content_type,
                    bytes,
                },
            );
        } else {
            let text = String::from_utf8(bytes)
                .map_err(|_| FormPayloadError::InvalidField(name.clone()))?;
            form.fields.insert(name, Value::String(text));
        }
    }

    Ok(form)
}
