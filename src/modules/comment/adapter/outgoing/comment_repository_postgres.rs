use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::comment::application::{
    domain::entities::Comment,
    ports::outgoing::{
        CommentRepository, CommentRepositoryError, CreateCommentData, UpdateCommentData,
    },
};

use super::sea_orm_entity::{
    ActiveModel as CommentActiveModel, Column as CommentColumn, Entity as CommentEntity,
};

#[derive(Debug, Clone)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<Comment, CommentRepositoryError> {
        let now = Utc::now().fixed_offset();

        let active = CommentActiveModel {
            id: Set(Uuid::new_v4()),
            post_id: Set(data.post_id),
            author_id: Set(data.author.value()),
            title: Set(data.title),
            content: Set(data.content),
            image_key: Set(data.image_key),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_comment())
    }

    async fn update_comment(
        &self,
        current: &Comment,
        data: UpdateCommentData,
    ) -> Result<Comment, CommentRepositoryError> {
        let mut model = <CommentActiveModel as Default>::default();

        if let Some(title) = data.title {
            model.title = Set(title);
        }
        if let Some(content) = data.content {
            model.content = Set(content);
        }
        if let Some(image_key) = data.image_key {
            model.image_key = Set(image_key);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = CommentEntity::update_many()
            .set(model)
            .filter(CommentColumn::Id.eq(current.id))
            .filter(CommentColumn::PostId.eq(current.post_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(|m| m.to_comment())
            .ok_or(CommentRepositoryError::CommentNotFound)
    }

    async fn delete_comment(&self, comment: &Comment) -> Result<(), CommentRepositoryError> {
        let result = CommentEntity::delete_many()
            .filter(CommentColumn::Id.eq(comment.id))
            .filter(CommentColumn::PostId.eq(comment.post_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CommentRepositoryError::CommentNotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> CommentRepositoryError {
    CommentRepositoryError::DatabaseError(e.to_string())
}
