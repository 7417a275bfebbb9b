use crate::media::application::domain::ImageRejected;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentImageError {
    #[error(transparent)]
    Rejected(#[from] ImageRejected),

    #[error("Storage error: {0}")]
    Storage(String),
}
