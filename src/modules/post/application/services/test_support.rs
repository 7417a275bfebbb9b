use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    post::application::{
        domain::entities::Post,
        ports::outgoing::{
            CreatePostData, PostQuery, PostQueryError, PostRepository, PostRepositoryError,
            UpdatePostData,
        },
    },
};

// ──────────────────────────────────────────────────────────
// Fixtures
// ──────────────────────────────────────────────────────────

pub fn sample_post(topic_id: Uuid, author_id: Uuid) -> Post {
    let now = Utc::now();
    Post {
        id: Uuid::new_v4(),
        topic_id,
        author: UserId::from(author_id),
        title: "Ownership explained".to_string(),
        content: "Every value has a single owner.".to_string(),
        created_at: now,
        updated_at: now,
    }
}

// ──────────────────────────────────────────────────────────
// Mock PostQuery
// ──────────────────────────────────────────────────────────

pub struct MockPostQuery {
    posts: Vec<Post>,
    error: Option<String>,
}

impl MockPostQuery {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self { posts, error: None }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            posts: vec![],
            error: Some(msg.to_string()),
        }
    }

    fn check(&self) -> Result<(), PostQueryError> {
        match &self.error {
            Some(msg) => Err(PostQueryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PostQuery for MockPostQuery {
    async fn list_by_topic(&self, topic_id: Uuid) -> Result<Vec<Post>, PostQueryError> {
        self.check()?;
        Ok(self
            .posts
            .iter()
            .filter(|p| p.topic_id == topic_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, PostQueryError> {
        self.check()?;
        Ok(self.posts.iter().find(|p| p.id == post_id).cloned())
    }
}

// ──────────────────────────────────────────────────────────
// Mock PostRepository (records what it was asked to do)
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockPostRepository {
    pub error: Option<PostRepositoryError>,
    pub created: Arc<Mutex<Vec<CreatePostData>>>,
    pub updated: Arc<Mutex<Vec<UpdatePostData>>>,
    pub deleted: Arc<Mutex<Vec<Uuid>>>,
}

impl MockPostRepository {
    pub fn failing(error: PostRepositoryError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }
}

#[async_trait]
impl PostRepository for MockPostRepository {
    async fn create_post(&self, data: CreatePostData) -> Result<Post, PostRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        self.created.lock().unwrap().push(data.clone());

        let now = Utc::now();
        Ok(Post {
            id: Uuid::new_v4(),
            topic_id: data.topic_id,
            author: data.author,
            title: data.title,
            content: data.content,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update_post(
        &self,
        current: &Post,
        data: UpdatePostData,
    ) -> Result<Post, PostRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        self.updated.lock().unwrap().push(data.clone());

        let mut post = current.clone();
        if let Some(title) = data.title {
            post.title = title;
        }
        if let Some(content) = data.content {
            post.content = content;
        }
        Ok(post)
    }

    async fn delete_post(&self, post: &Post) -> Result<(), PostRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        self.deleted.lock().unwrap().push(post.id);
        Ok(())
    }
}
