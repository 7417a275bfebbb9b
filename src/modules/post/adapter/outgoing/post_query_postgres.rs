use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::post::application::{
    domain::entities::Post,
    ports::outgoing::{PostQuery, PostQueryError},
};

use super::sea_orm_entity::{Column as PostColumn, Entity as PostEntity};

#[derive(Debug, Clone)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn list_by_topic(&self, topic_id: Uuid) -> Result<Vec<Post>, PostQueryError> {
        let models = PostEntity::find()
            .filter(PostColumn::TopicId.eq(topic_id))
            .order_by_desc(PostColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_post()).collect())
    }

    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, PostQueryError> {
        let model = PostEntity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_post()))
    }
}
