use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::{UserDetails, UserId},
    comment::application::{
        domain::entities::{CommentPath, CommentView},
        ports::incoming::use_cases::{
            CommentInput, CreateCommentError, CreateCommentUseCase, DeleteCommentError,
            DeleteCommentUseCase, GetCommentError, GetCommentUseCase, GetCommentsError,
            GetCommentsUseCase, UpdateCommentError, UpdateCommentUseCase,
        },
    },
    post::application::{
        domain::entities::{Post, PostPath},
        ports::incoming::use_cases::{
            CreatePostError, CreatePostUseCase, DeletePostError, DeletePostUseCase, GetPostError,
            GetPostUseCase, GetPostsError, GetPostsUseCase, PostInput, UpdatePostError,
            UpdatePostUseCase,
        },
    },
    shared::validation::{BodyError, UpdateMode},
    topic::application::{
        domain::entities::Topic,
        ports::incoming::use_cases::{
            CreateTopicError, CreateTopicUseCase, DeleteTopicError, DeleteTopicUseCase,
            GetTopicError, GetTopicUseCase, GetTopicsError, GetTopicsUseCase, TopicInput,
            UpdateTopicError, UpdateTopicUseCase,
        },
    },
};

//
// ──────────────────────────────────────────────────────────
// Topic
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubTopicUseCase;

#[async_trait]
impl GetTopicsUseCase for StubTopicUseCase {
    async fn execute(&self) -> Result<Vec<Topic>, GetTopicsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CreateTopicUseCase for StubTopicUseCase {
    async fn execute(
        &self,
        _author: UserDetails,
        _input: TopicInput,
    ) -> Result<Topic, CreateTopicError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetTopicUseCase for StubTopicUseCase {
    async fn execute(&self, _url_name: &str) -> Result<Topic, GetTopicError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateTopicUseCase for StubTopicUseCase {
    async fn execute(
        &self,
        _principal: UserId,
        _url_name: &str,
        _input: Result<TopicInput, BodyError>,
        _mode: UpdateMode,
    ) -> Result<Topic, UpdateTopicError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteTopicUseCase for StubTopicUseCase {
    async fn execute(&self, _principal: UserId, _url_name: &str) -> Result<(), DeleteTopicError> {
        unimplemented!("Not used in this test")
    }
}

//
// ──────────────────────────────────────────────────────────
// Post
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubPostUseCase;

#[async_trait]
impl GetPostsUseCase for StubPostUseCase {
    async fn execute(&self, _topic_url_name: &str) -> Result<Vec<Post>, GetPostsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CreatePostUseCase for StubPostUseCase {
    async fn execute(
        &self,
        _author: UserId,
        _topic_url_name: &str,
        _input: PostInput,
    ) -> Result<Post, CreatePostError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetPostUseCase for StubPostUseCase {
    async fn execute(&self, _path: &PostPath) -> Result<Post, GetPostError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdatePostUseCase for StubPostUseCase {
    async fn execute(
        &self,
        _principal: UserId,
        _path: &PostPath,
        _input: Result<PostInput, BodyError>,
        _mode: UpdateMode,
    ) -> Result<Post, UpdatePostError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeletePostUseCase for StubPostUseCase {
    async fn execute(&self, _principal: UserId, _path: &PostPath) -> Result<(), DeletePostError> {
        unimplemented!("Not used in this test")
    }
}

//
// ──────────────────────────────────────────────────────────
// Comment
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubCommentUseCase;

#[async_trait]
impl GetCommentsUseCase for StubCommentUseCase {
    async fn execute(&self, _path: &PostPath) -> Result<Vec<CommentView>, GetCommentsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CreateCommentUseCase for StubCommentUseCase {
    async fn execute(
        &self,
        _author: UserId,
        _path: &PostPath,
        _input: CommentInput,
    ) -> Result<CommentView, CreateCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetCommentUseCase for StubCommentUseCase {
    async fn execute(&self, _path: &CommentPath) -> Result<CommentView, GetCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateCommentUseCase for StubCommentUseCase {
    async fn execute(
        &self,
        _principal: UserId,
        _path: &CommentPath,
        _input: Result<CommentInput, BodyError>,
        _mode: UpdateMode,
    ) -> Result<CommentView, UpdateCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteCommentUseCase for StubCommentUseCase {
    async fn execute(
        &self,
        _principal: UserId,
        _path: &CommentPath,
    ) -> Result<(), DeleteCommentError> {
        unimplemented!("Not used in this test")
    }
}
