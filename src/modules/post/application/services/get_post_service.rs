use async_trait::async_trait;

use crate::post::application::{
    domain::entities::{Post, PostPath},
    ports::incoming::use_cases::{GetPostError, GetPostUseCase},
    services::PostResolver,
};

#[derive(Clone)]
pub struct GetPostService {
    posts: PostResolver,
}

impl GetPostService {
    pub fn new(posts: PostResolver) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl GetPostUseCase for GetPostService {
    async fn execute(&self, path: &PostPath) -> Result<Post, GetPostError> {
        Ok(self.posts.resolve(path).await?)
    }
}
