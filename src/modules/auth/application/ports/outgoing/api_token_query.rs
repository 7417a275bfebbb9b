use async_trait::async_trait;

use crate::auth::application::domain::entities::Principal;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiTokenQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Resolves the SHA-256 digest of an API key to the user it was issued to.
/// Tokens of deleted users resolve to `None`.
#[async_trait]
pub trait ApiTokenQuery: Send + Sync {
    async fn find_principal(
        &self,
        token_hash: &str,
    ) -> Result<Option<Principal>, ApiTokenQueryError>;
}
