use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::post::application::{
    domain::entities::Post,
    ports::outgoing::{CreatePostData, PostRepository, PostRepositoryError, UpdatePostData},
};

use super::sea_orm_entity::{ActiveModel as PostActiveModel, Column as PostColumn, Entity as PostEntity};

#[derive(Debug, Clone)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create_post(&self, data: CreatePostData) -> Result<Post, PostRepositoryError> {
        let now = Utc::now().fixed_offset();

        let active = PostActiveModel {
            id: Set(Uuid::new_v4()),
            topic_id: Set(data.topic_id),
            author_id: Set(data.author.value()),
            title: Set(data.title),
            content: Set(data.content),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_post())
    }

    async fn update_post(
        &self,
        current: &Post,
        data: UpdatePostData,
    ) -> Result<Post, PostRepositoryError> {
        let mut model = <PostActiveModel as Default>::default();

        if let Some(title) = data.title {
            model.title = Set(title);
        }
        if let Some(content) = data.content {
            model.content = Set(content);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = PostEntity::update_many()
            .set(model)
            .filter(PostColumn::Id.eq(current.id))
            .filter(PostColumn::TopicId.eq(current.topic_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(|m| m.to_post())
            .ok_or(PostRepositoryError::PostNotFound)
    }

    async fn delete_post(&self, post: &Post) -> Result<(), PostRepositoryError> {
        let result = PostEntity::delete_many()
            .filter(PostColumn::Id.eq(post.id))
            .filter(PostColumn::TopicId.eq(post.topic_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PostRepositoryError::PostNotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> PostRepositoryError {
    PostRepositoryError::DatabaseError(e.to_string())
}
