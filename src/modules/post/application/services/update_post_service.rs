use async_trait::async_trait;
use tracing::info;

use crate::{
    auth::application::domain::entities::UserId,
    post::application::{
        domain::entities::{Post, PostPath, MAX_TITLE_LEN},
        ports::{
            incoming::use_cases::{PostInput, UpdatePostError, UpdatePostUseCase},
            outgoing::{PostRepository, PostRepositoryError, UpdatePostData},
        },
        services::PostResolver,
    },
    shared::{
        lookup::LookupError,
        ownership::ensure_owner,
        validation::{text_for_update, BodyError, UpdateMode},
    },
};

#[derive(Clone)]
pub struct UpdatePostService<R>
where
    R: PostRepository + Send + Sync,
{
    posts: PostResolver,
    repository: R,
}

impl<R> UpdatePostService<R>
where
    R: PostRepository + Send + Sync,
{
    pub fn new(posts: PostResolver, repository: R) -> Self {
        Self { posts, repository }
    }
}

#[async_trait]
impl<R> UpdatePostUseCase for UpdatePostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(
        &self,
        principal: UserId,
        path: &PostPath,
        input: Result<PostInput, BodyError>,
        mode: UpdateMode,
    ) -> Result<Post, UpdatePostError> {
        let post = self.posts.resolve(path).await?;
        ensure_owner(principal, &post)?;
        let input = input?;

        let data = UpdatePostData {
            title: text_for_update("title", input.title, Some(MAX_TITLE_LEN), mode)?,
            content: text_for_update("content", input.content, None, mode)?,
        };
        if data.is_empty() {
            return Ok(post);
        }

        let updated = self
            .repository
            .update_post(&post, data)
            .await
            .map_err(|e| match e {
                PostRepositoryError::PostNotFound => {
                    UpdatePostError::Lookup(LookupError::PostNotFound)
                }
                other => UpdatePostError::RepositoryError(other.to_string()),
            })?;

        info!(post_id = %updated.id, "Post updated");
        Ok(updated)
    }
}
