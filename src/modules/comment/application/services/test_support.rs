use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::{
        domain::entities::Comment,
        ports::outgoing::{
            CommentQuery, CommentQueryError, CommentRepository, CommentRepositoryError,
            CreateCommentData, UpdateCommentData,
        },
        services::{CommentImages, CommentResolver},
    },
    media::application::{
        domain::ImagePolicy,
        ports::outgoing::{ObjectStorage, ObjectStorageError},
    },
    post::application::{
        domain::entities::Post,
        services::{test_support::MockPostQuery, PostResolver},
    },
    shared::api::form_payload::UploadedFile,
    topic::application::{
        domain::entities::Topic,
        services::{test_support::MockTopicQuery, TopicResolver},
    },
};

// ──────────────────────────────────────────────────────────
// Fixtures
// ──────────────────────────────────────────────────────────

pub fn sample_comment(post_id: Uuid, author_id: Uuid) -> Comment {
    let now = Utc::now();
    Comment {
        id: Uuid::new_v4(),
        post_id,
        author: UserId::from(author_id),
        title: "Nice post".to_string(),
        content: "Thanks for sharing.".to_string(),
        image_key: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn png_file() -> UploadedFile {
    UploadedFile {
        file_name: Some("cat.png".to_string()),
        content_type: Some("image/png".to_string()),
        bytes: vec![0x89, b'P', b'N', b'G'],
    }
}

pub fn text_file() -> UploadedFile {
    UploadedFile {
        file_name: Some("notes.txt".to_string()),
        content_type: Some("text/plain".to_string()),
        bytes: b"hello".to_vec(),
    }
}

/// Resolver over a single topic/post pair plus the given comments.
pub fn resolver(topic: Topic, post: Post, comments: MockCommentQuery) -> CommentResolver {
    CommentResolver::new(
        PostResolver::new(
            TopicResolver::new(Arc::new(MockTopicQuery::with_topics(vec![topic]))),
            Arc::new(MockPostQuery::with_posts(vec![post])),
        ),
        Arc::new(comments),
    )
}

pub fn images(storage: &InMemoryObjectStorage) -> CommentImages {
    CommentImages::new(Arc::new(storage.clone()), ImagePolicy::default())
}

// ──────────────────────────────────────────────────────────
// Mock CommentQuery
// ──────────────────────────────────────────────────────────

pub struct MockCommentQuery {
    comments: Vec<Comment>,
    error: Option<String>,
}

impl MockCommentQuery {
    pub fn with_comments(comments: Vec<Comment>) -> Self {
        Self {
            comments,
            error: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            comments: vec![],
            error: Some(msg.to_string()),
        }
    }

    fn check(&self) -> Result<(), CommentQueryError> {
        match &self.error {
            Some(msg) => Err(CommentQueryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CommentQuery for MockCommentQuery {
    async fn list_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, CommentQueryError> {
        self.check()?;
        Ok(self
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, comment_id: Uuid) -> Result<Option<Comment>, CommentQueryError> {
        self.check()?;
        Ok(self.comments.iter().find(|c| c.id == comment_id).cloned())
    }
}

// ──────────────────────────────────────────────────────────
// Mock CommentRepository (records what it was asked to do)
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockCommentRepository {
    pub error: Option<CommentRepositoryError>,
    pub created: Arc<Mutex<Vec<CreateCommentData>>>,
    pub updated: Arc<Mutex<Vec<UpdateCommentData>>>,
    pub deleted: Arc<Mutex<Vec<Uuid>>>,
}

impl MockCommentRepository {
    pub fn failing(error: CommentRepositoryError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }
}

#[async_trait]
impl CommentRepository for MockCommentRepository {
    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<Comment, CommentRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        self.created.lock().unwrap().push(data.clone());

        let now = Utc::now();
        Ok(Comment {
            id: Uuid::new_v4(),
            post_id: data.post_id,
            author: data.author,
            title: data.title,
            content: data.content,
            image_key: data.image_key,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update_comment(
        &self,
        current: &Comment,
        data: UpdateCommentData,
    ) -> Result<Comment, CommentRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        self.updated.lock().unwrap().push(data.clone());

        let mut comment = current.clone();
        if let Some(title) = data.title {
            comment.title = title;
        }
        if let Some(content) = data.content {
            comment.content = content;
        }
        if let Some(image_key) = data.image_key {
            comment.image_key = image_key;
        }
        Ok(comment)
    }

    async fn delete_comment(&self, comment: &Comment) -> Result<(), CommentRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        self.deleted.lock().unwrap().push(comment.id);
        Ok(())
    }
}

// ──────────────────────────────────────────────────────────
// In-memory ObjectStorage
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryObjectStorage {
    pub fail_puts: bool,
    pub puts: Arc<Mutex<Vec<(String, String)>>>,
    pub deletes: Arc<Mutex<Vec<String>>>,
}

impl InMemoryObjectStorage {
    pub fn failing_puts() -> Self {
        Self {
            fail_puts: true,
            ..Default::default()
        }
    }

    pub fn put_keys(&self) -> Vec<String> {
        self.puts.lock().unwrap().iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn deleted_keys(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStorage for InMemoryObjectStorage {
    async fn put(
        &self,
        key: &str,
        _bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ObjectStorageError> {
        if self.fail_puts {
            return Err(ObjectStorageError::UploadFailed("bucket unavailable".to_string()));
        }
        self.puts
            .lock()
            .unwrap()
            .push((key.to_string(), content_type.to_string()));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), ObjectStorageError> {
        self.deletes.lock().unwrap().push(key.to_string());
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://cdn.test/{key}")
    }
}
