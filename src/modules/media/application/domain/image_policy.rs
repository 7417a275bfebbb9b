use uuid::Uuid;

use crate::shared::{
    api::form_payload::UploadedFile,
    config::{parsed_var_or, ConfigError},
};

#[derive(Debug, Clone)]
pub struct ImagePolicy {
    pub max_file_size_bytes: usize,
    pub allowed_mime_types: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageRejected {
    #[error("Image file is empty")]
    Empty,

    #[error("Image must not exceed {max} bytes")]
    TooLarge { max: usize },

    #[error("Unsupported image type: {0}")]
    UnsupportedType(String),
}

/// An image that passed the policy, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    bytes: Vec<u8>,
    content_type: &'static str,
}

impl ImagePolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 5 * 1024 * 1024; // 5MB
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/gif", "image/webp"];

    /// Defaults with an optional `IMAGE_MAX_BYTES` override.
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_file_size_bytes =
            parsed_var_or("IMAGE_MAX_BYTES", Self::DEFAULT_MAX_FILE_SIZE_BYTES)?;

        Ok(Self {
            max_file_size_bytes,
            ..Self::default()
        })
    }

    /// The declared part type is trusted unless it is missing or generic,
    /// in which case the type is guessed from the file name.
    pub fn check(&self, file: UploadedFile) -> Result<ImageUpload, ImageRejected> {
        if file.bytes.is_empty() {
            return Err(ImageRejected::Empty);
        }

        if file.bytes.len() > self.max_file_size_bytes {
            return Err(ImageRejected::TooLarge {
                max: self.max_file_size_bytes,
            });
        }

        let declared = file
            .content_type
            .as_deref()
            .map(|ct| ct.trim().to_ascii_lowercase())
            .filter(|ct| !ct.is_empty() && ct != "application/octet-stream");

        let mime = match declared {
            Some(ct) => ct,
            None => file
                .file_name
                .as_deref()
                .and_then(|name| mime_guess::from_path(name).first())
                .map(|m| m.essence_str().to_string())
                .unwrap_or_default(),
        };

        let content_type = self
            .allowed_mime_types
            .iter()
            .copied()
            .find(|allowed| *allowed == mime)
            .ok_or_else(|| ImageRejected::UnsupportedType(mime.clone()))?;

        Ok(ImageUpload {
            bytes: file.bytes,
            content_type,
        })
    }
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }
}

impl ImageUpload {
    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    pub fn extension(&self) -> &'static str {
        match self.content_type {
            "image/jpeg" => "jpg",
            "image/png" => "png",
            "image/gif" => "gif",
            "image/webp" => "webp",
            _ => "bin",
        }
    }

    /// Fresh key of the form `{scope}/{parent_id}/{uuid}.{ext}`.
    pub fn object_key(&self, scope: &str, parent_id: Uuid) -> String {
        format!("{}/{}/{}.{}", scope, parent_id, Uuid::new_v4(), self.extension())
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
