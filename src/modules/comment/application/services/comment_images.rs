use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::{
    comment::application::{
        domain::entities::{Comment, CommentView, IMAGE_SCOPE},
        ports::incoming::use_cases::CommentImageError,
    },
    media::application::{domain::ImagePolicy, ports::outgoing::ObjectStorage},
    shared::api::form_payload::UploadedFile,
};

/// Image side of the comment resource: validation, upload, cleanup and
/// key-to-URL mapping.
#[derive(Clone)]
pub struct CommentImages {
    storage: Arc<dyn ObjectStorage + Send + Sync>,
    policy: ImagePolicy,
}

impl CommentImages {
    pub fn new(storage: Arc<dyn ObjectStorage + Send + Sync>, policy: ImagePolicy) -> Self {
        Self { storage, policy }
    }

    /// Validates and uploads `file`, returning the new object key.
    pub async fn store(&self, post_id: Uuid, file: UploadedFile) -> Result<String, CommentImageError> {
        let image = self.policy.check(file)?;
        let key = image.object_key(IMAGE_SCOPE, post_id);
        let content_type = image.content_type();

        self.storage
            .put(&key, image.into_bytes(), content_type)
            .await
            .map_err(|e| CommentImageError::Storage(e.to_string()))?;

        Ok(key)
    }

    /// Best effort: a failed delete leaves an orphan object, never a failed request.
    pub async fn discard(&self, key: &str) {
        if let Err(e) = self.storage.delete(key).await {
            warn!(key = %key, error = %e, "Failed to delete comment image");
        }
    }

    pub fn view(&self, comment: Comment) -> CommentView {
        let image_url = comment
            .image_key
            .as_deref()
            .map(|key| self.storage.public_url(key));

        CommentView { comment, image_url }
    }
}
