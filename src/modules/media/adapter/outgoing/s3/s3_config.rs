use crate::shared::config::{required_var, ConfigError};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Config {
    pub bucket: String,
    /// Base of public object URLs, without a trailing slash.
    pub public_base_url: String,
    /// Prepended to every key, e.g. `media/`.
    pub key_prefix: String,
}

impl S3Config {
    /// Load storage configuration from environment variables.
    /// Credentials and region come from the standard AWS provider chain.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bucket = required_var("S3_BUCKET")?;
        let public_base_url = env::var("S3_PUBLIC_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let key_prefix = env::var("S3_KEY_PREFIX").unwrap_or_default();

        Ok(Self::new(bucket, public_base_url, key_prefix))
    }

    pub fn new(bucket: String, public_base_url: Option<String>, key_prefix: String) -> Self {
        let public_base_url = public_base_url
            .unwrap_or_else(|| format!("https://{}.s3.amazonaws.com", bucket))
            .trim_end_matches('/')
            .to_string();

        Self {
            bucket,
            public_base_url,
            key_prefix,
        }
    }

    pub fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}
