mod s3_config;
mod s3_object_storage;

pub use s3_config::S3Config;
pub use s3_object_storage::S3ObjectStorage;
