use actix_web::web;
use std::sync::Arc;

use crate::{
    comment::application::{
        comment_use_cases::CommentUseCases,
        ports::incoming::use_cases::{
            CreateCommentUseCase, DeleteCommentUseCase, GetCommentUseCase, GetCommentsUseCase,
            UpdateCommentUseCase,
        },
    },
    media::application::domain::ImagePolicy,
    post::application::{
        ports::incoming::use_cases::{
            CreatePostUseCase, DeletePostUseCase, GetPostUseCase, GetPostsUseCase,
            UpdatePostUseCase,
        },
        post_use_cases::PostUseCases,
    },
    tests::support::stubs::{StubCommentUseCase, StubPostUseCase, StubTopicUseCase},
    topic::application::{
        ports::incoming::use_cases::{
            CreateTopicUseCase, DeleteTopicUseCase, GetTopicUseCase, GetTopicsUseCase,
            UpdateTopicUseCase,
        },
        topic_use_cases::TopicUseCases,
    },
    AppState,
};

/// App state whose use cases all panic unless replaced with `with_*`.
pub struct TestAppStateBuilder {
    topic: TopicUseCases,
    post: PostUseCases,
    comment: CommentUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            topic: TopicUseCases {
                list: Arc::new(StubTopicUseCase),
                create: Arc::new(StubTopicUseCase),
                get: Arc::new(StubTopicUseCase),
                update: Arc::new(StubTopicUseCase),
                delete: Arc::new(StubTopicUseCase),
            },
            post: PostUseCases {
                list: Arc::new(StubPostUseCase),
                create: Arc::new(StubPostUseCase),
                get: Arc::new(StubPostUseCase),
                update: Arc::new(StubPostUseCase),
                delete: Arc::new(StubPostUseCase),
            },
            comment: CommentUseCases {
                list: Arc::new(StubCommentUseCase),
                create: Arc::new(StubCommentUseCase),
                get: Arc::new(StubCommentUseCase),
                update: Arc::new(StubCommentUseCase),
                delete: Arc::new(StubCommentUseCase),
                max_image_bytes: ImagePolicy::DEFAULT_MAX_FILE_SIZE_BYTES,
            },
        }
    }
}

impl TestAppStateBuilder {
    // Topic

    pub fn with_get_topics(mut self, uc: impl GetTopicsUseCase + Send + Sync + 'static) -> Self {
        self.topic.list = Arc::new(uc);
        self
    }

    pub fn with_create_topic(
        mut self,
        uc: impl CreateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.create = Arc::new(uc);
        self
    }

    pub fn with_get_topic(mut self, uc: impl GetTopicUseCase + Send + Sync + 'static) -> Self {
        self.topic.get = Arc::new(uc);
        self
    }

    pub fn with_update_topic(
        mut self,
        uc: impl UpdateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.update = Arc::new(uc);
        self
    }

    pub fn with_delete_topic(
        mut self,
        uc: impl DeleteTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.delete = Arc::new(uc);
        self
    }

    // Post

    pub fn with_get_posts(mut self, uc: impl GetPostsUseCase + Send + Sync + 'static) -> Self {
        self.post.list = Arc::new(uc);
        self
    }

    pub fn with_create_post(mut self, uc: impl CreatePostUseCase + Send + Sync + 'static) -> Self {
        self.post.create = Arc::new(uc);
        self
    }

    pub fn with_get_post(mut self, uc: impl GetPostUseCase + Send + Sync + 'static) -> Self {
        self.post.get = Arc::new(uc);
        self
    }

    pub fn with_update_post(mut self, uc: impl UpdatePostUseCase + Send + Sync + 'static) -> Self {
        self.post.update = Arc::new(uc);
        self
    }

    pub fn with_delete_post(mut self, uc: impl DeletePostUseCase + Send + Sync + 'static) -> Self {
        self.post.delete = Arc::new(uc);
        self
    }

    // Comment

    pub fn with_get_comments(
        mut self,
        uc: impl GetCommentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comment.list = Arc::new(uc);
        self
    }

    pub fn with_create_comment(
        mut self,
        uc: impl CreateCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comment.create = Arc::new(uc);
        self
    }

    pub fn with_get_comment(mut self, uc: impl GetCommentUseCase + Send + Sync + 'static) -> Self {
        self.comment.get = Arc::new(uc);
        self
    }

    pub fn with_update_comment(
        mut self,
        uc: impl UpdateCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comment.update = Arc::new(uc);
        self
    }

    pub fn with_delete_comment(
        mut self,
        uc: impl DeleteCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comment.delete = Arc::new(uc);
        self
    }

    pub fn with_max_image_bytes(mut self, max: usize) -> Self {
        self.comment.max_image_bytes = max;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            topic: self.topic,
            post: self.post,
            comment: self.comment,
        })
    }
}
