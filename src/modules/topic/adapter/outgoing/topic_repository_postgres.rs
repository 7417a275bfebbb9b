use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::topic::application::{
    domain::entities::Topic,
    ports::outgoing::{CreateTopicData, TopicRepository, TopicRepositoryError, UpdateTopicData},
};

// SeaORM entity imports
use super::sea_orm_entity::{ActiveModel as TopicActiveModel, Column as TopicColumn, Entity as TopicEntity};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError> {
        let now = Utc::now().fixed_offset();

        let active = TopicActiveModel {
            id: Set(Uuid::new_v4()),
            url_name: Set(data.url_name),
            name: Set(data.name),
            author_id: Set(data.author.id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_url_name_error)?;

        Ok(inserted.to_topic(data.author))
    }

    async fn update_topic(
        &self,
        current: &Topic,
        data: UpdateTopicData,
    ) -> Result<Topic, TopicRepositoryError> {
        let mut model = <TopicActiveModel as Default>::default();

        if let Some(name) = data.name {
            model.name = Set(name);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = TopicEntity::update_many()
            .set(model)
            .filter(TopicColumn::Id.eq(current.id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let updated = results
            .into_iter()
            .next()
            .ok_or(TopicRepositoryError::TopicNotFound)?;

        Ok(updated.to_topic(current.author.clone()))
    }

    async fn delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        let result = TopicEntity::delete_many()
            .filter(TopicColumn::Id.eq(topic_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TopicRepositoryError::TopicNotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_url_name_error(e: DbErr) -> TopicRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("url_name")
    {
        TopicRepositoryError::UrlNameTaken
    } else {
        TopicRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> TopicRepositoryError {
    TopicRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
