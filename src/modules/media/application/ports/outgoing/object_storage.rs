use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ObjectStorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),
}

/// Blob store holding comment images. Keys are relative; the adapter owns
/// bucket naming, key prefixing and the public URL scheme.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ObjectStorageError>;

    async fn delete(&self, key: &str) -> Result<(), ObjectStorageError>;

    fn public_url(&self, key: &str) -> String;
}
