use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserDetails,
    topic::application::{
        domain::entities::Topic,
        ports::outgoing::{
            CreateTopicData, TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError,
            UpdateTopicData,
        },
    },
};

// ──────────────────────────────────────────────────────────
// Fixtures
// ──────────────────────────────────────────────────────────

pub fn author(id: Uuid) -> UserDetails {
    UserDetails {
        id,
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        full_name: "Alice Doe".to_string(),
    }
}

pub fn sample_topic(author_id: Uuid, url_name: &str) -> Topic {
    let now = Utc::now();
    Topic {
        id: Uuid::new_v4(),
        url_name: url_name.to_string(),
        name: url_name.to_string(),
        author: author(author_id),
        created_at: now,
        updated_at: now,
    }
}

// ──────────────────────────────────────────────────────────
// Mock TopicQuery
// ──────────────────────────────────────────────────────────

pub struct MockTopicQuery {
    topics: Vec<Topic>,
    error: Option<String>,
}

impl MockTopicQuery {
    pub fn with_topics(topics: Vec<Topic>) -> Self {
        Self {
            topics,
            error: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            topics: vec![],
            error: Some(msg.to_string()),
        }
    }

    fn check(&self) -> Result<(), TopicQueryError> {
        match &self.error {
            Some(msg) => Err(TopicQueryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TopicQuery for MockTopicQuery {
    async fn list_topics(&self) -> Result<Vec<Topic>, TopicQueryError> {
        self.check()?;
        Ok(self.topics.clone())
    }

    async fn find_by_url_name(&self, url_name: &str) -> Result<Option<Topic>, TopicQueryError> {
        self.check()?;
        Ok(self.topics.iter().find(|t| t.url_name == url_name).cloned())
    }

    async fn url_names_like(&self, base: &str) -> Result<Vec<String>, TopicQueryError> {
        self.check()?;
        Ok(self
            .topics
            .iter()
            .filter(|t| t.url_name == base || t.url_name.starts_with(&format!("{base}-")))
            .map(|t| t.url_name.clone())
            .collect())
    }
}

// ──────────────────────────────────────────────────────────
// Mock TopicRepository (records what it was asked to do)
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockTopicRepository {
    pub error: Option<TopicRepositoryError>,
    pub created: Arc<Mutex<Vec<CreateTopicData>>>,
    pub updated: Arc<Mutex<Vec<UpdateTopicData>>>,
    pub deleted: Arc<Mutex<Vec<Uuid>>>,
}

impl MockTopicRepository {
    pub fn failing(error: TopicRepositoryError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }
}

#[async_trait]
impl TopicRepository for MockTopicRepository {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        self.created.lock().unwrap().push(data.clone());

        let now = Utc::now();
        Ok(Topic {
            id: Uuid::new_v4(),
            url_name: data.url_name,
            name: data.name,
            author: data.author,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update_topic(
        &self,
        current: &Topic,
        data: UpdateTopicData,
    ) -> Result<Topic, TopicRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        self.updated.lock().unwrap().push(data.clone());

        let mut topic = current.clone();
        if let Some(name) = data.name {
            topic.name = name;
        }
        Ok(topic)
    }

    async fn delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        self.deleted.lock().unwrap().push(topic_id);
        Ok(())
    }
}
