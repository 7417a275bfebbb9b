use async_trait::async_trait;
use tracing::info;

use crate::{
    auth::application::domain::entities::UserId,
    post::application::{
        domain::entities::PostPath,
        ports::{
            incoming::use_cases::{DeletePostError, DeletePostUseCase},
            outgoing::{PostRepository, PostRepositoryError},
        },
        services::PostResolver,
    },
    shared::{lookup::LookupError, ownership::ensure_owner},
};

#[derive(Clone)]
pub struct DeletePostService<R>
where
    R: PostRepository + Send + Sync,
{
    posts: PostResolver,
    repository: R,
}

impl<R> DeletePostService<R>
where
    R: PostRepository + Send + Sync,
{
    pub fn new(posts: PostResolver, repository: R) -> Self {
        Self { posts, repository }
    }
}

#[async_trait]
impl<R> DeletePostUseCase for DeletePostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, principal: UserId, path: &PostPath) -> Result<(), DeletePostError> {
        let post = self.posts.resolve(path).await?;
        ensure_owner(principal, &post)?;

        self.repository
            .delete_post(&post)
            .await
            .map_err(|e| match e {
                PostRepositoryError::PostNotFound => {
                    DeletePostError::Lookup(LookupError::PostNotFound)
                }
                other => DeletePostError::RepositoryError(other.to_string()),
            })?;

        info!(post_id = %post.id, "Post deleted");
        Ok(())
    }
}
