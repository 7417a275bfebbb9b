use async_trait::async_trait;
use aws_sdk_s3::{primitives::ByteStream, Client};
use std::sync::Arc;

use super::S3Config;
use crate::media::application::ports::outgoing::{ObjectStorage, ObjectStorageError};

/// Internal seam so the adapter can be tested without the AWS SDK's
/// request/response types.
#[async_trait]
trait S3Client: Send + Sync {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), String>;

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), String>;
}

struct RealS3Client {
    client: Client,
}

#[async_trait]
impl S3Client for RealS3Client {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), String> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| aws_sdk_s3::error::DisplayErrorContext(e).to_string())
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), String> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| aws_sdk_s3::error::DisplayErrorContext(e).to_string())
    }
}

/// Production adapter: implements the ObjectStorage port on S3.
#[derive(Clone)]
pub struct S3ObjectStorage {
    client: Arc<dyn S3Client>,
    config: S3Config,
}

impl S3ObjectStorage {
    /// Loads region and credentials from the default AWS provider chain.
    pub async fn new(config: S3Config) -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: Arc::new(RealS3Client {
                client: Client::new(&sdk_config),
            }),
            config,
        }
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn S3Client>, config: S3Config) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ObjectStorage for S3ObjectStorage {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ObjectStorageError> {
        let full_key = self.config.full_key(key);
        let size = bytes.len();

        self.client
            .put_object(&self.config.bucket, &full_key, bytes, content_type)
            .await
            .map_err(ObjectStorageError::UploadFailed)?;

        tracing::info!(bucket = %self.config.bucket, key = %full_key, size, "Object stored");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), ObjectStorageError> {
        let full_key = self.config.full_key(key);

        self.client
            .delete_object(&self.config.bucket, &full_key)
            .await
            .map_err(ObjectStorageError::DeleteFailed)?;

        tracing::info!(bucket = %self.config.bucket, key = %full_key, "Object deleted");
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.config.public_base_url, self.config.full_key(key))
    }
}
