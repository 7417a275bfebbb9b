/// Failure to resolve a `Topic → Post → Comment` path. The first missing or
/// mismatched link wins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Post not found")]
    PostNotFound,

    #[error("Comment not found")]
    CommentNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}
