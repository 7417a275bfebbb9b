use std::sync::Arc;

use crate::{
    comment::application::{
        domain::entities::{Comment, CommentPath},
        ports::outgoing::CommentQuery,
    },
    post::application::{domain::entities::{Post, PostPath}, services::PostResolver},
    shared::lookup::LookupError,
};

/// Last link of the chain: the comment must belong to the post in the path,
/// which in turn must belong to the topic in the path.
#[derive(Clone)]
pub struct CommentResolver {
    posts: PostResolver,
    query: Arc<dyn CommentQuery + Send + Sync>,
}

impl CommentResolver {
    pub fn new(posts: PostResolver, query: Arc<dyn CommentQuery + Send + Sync>) -> Self {
        Self { posts, query }
    }

    pub async fn resolve_post(&self, path: &PostPath) -> Result<Post, LookupError> {
        self.posts.resolve(path).await
    }

    pub async fn resolve(&self, path: &CommentPath) -> Result<Comment, LookupError> {
        let post = self.posts.resolve(&path.post).await?;

        self.query
            .find_by_id(path.comment_id)
            .await
            .map_err(|e| LookupError::QueryFailed(e.to_string()))?
            .filter(|comment| comment.post_id == post.id)
            .ok_or(LookupError::CommentNotFound)
    }
}
