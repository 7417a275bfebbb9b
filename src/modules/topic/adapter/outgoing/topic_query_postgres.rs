use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::{collections::HashMap, sync::Arc};
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::auth::application::domain::entities::UserDetails;
use crate::modules::topic::application::{
    domain::entities::Topic,
    ports::outgoing::{TopicQuery, TopicQueryError},
};

// SeaORM entity
use super::sea_orm_entity::{Column as TopicColumn, Entity as TopicEntity, Model as TopicModel};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Authors are fetched in one batch and joined in memory.
    async fn attach_authors(&self, models: Vec<TopicModel>) -> Result<Vec<Topic>, TopicQueryError> {
        if models.is_empty() {
            return Ok(vec![]);
        }

        let mut author_ids: Vec<Uuid> = models.iter().map(|m| m.author_id).collect();
        author_ids.sort();
        author_ids.dedup();

        let authors: HashMap<Uuid, UserDetails> = UserEntity::find()
            .filter(UserColumn::Id.is_in(author_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|u| (u.id, u.to_user_details()))
            .collect();

        models
            .into_iter()
            .map(|m| {
                let author = authors.get(&m.author_id).cloned().ok_or_else(|| {
                    TopicQueryError::DatabaseError(format!(
                        "author {} of topic {} not found",
                        m.author_id, m.id
                    ))
                })?;
                Ok(m.to_topic(author))
            })
            .collect()
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn list_topics(&self) -> Result<Vec<Topic>, TopicQueryError> {
        let models = TopicEntity::find()
            .order_by_desc(TopicColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.attach_authors(models).await
    }

    async fn find_by_url_name(&self, url_name: &str) -> Result<Option<Topic>, TopicQueryError> {
        let model = TopicEntity::find()
            .filter(TopicColumn::UrlName.eq(url_name))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        match model {
            Some(model) => Ok(self.attach_authors(vec![model]).await?.into_iter().next()),
            None => Ok(None),
        }
    }

    async fn url_names_like(&self, base: &str) -> Result<Vec<String>, TopicQueryError> {
        let models = TopicEntity::find()
            .filter(
                Condition::any()
                    .add(TopicColumn::UrlName.eq(base))
                    .add(TopicColumn::UrlName.starts_with(format!("{base}-"))),
            )
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(|m| m.url_name).collect())
    }
}

fn map_db_err(e: sea_orm::DbErr) -> TopicQueryError {
    TopicQueryError::DatabaseError(e.to_string())
}
