use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use super::sea_orm_entity::{
    auth_tokens::Entity as AuthTokenEntity,
    users::{Column as UserColumn, Entity as UserEntity},
};
use crate::auth::application::{
    domain::entities::Principal,
    ports::outgoing::{ApiTokenQuery, ApiTokenQueryError},
};

#[derive(Clone, Debug)]
pub struct ApiTokenQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ApiTokenQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ApiTokenQuery for ApiTokenQueryPostgres {
    async fn find_principal(
        &self,
        token_hash: &str,
    ) -> Result<Option<Principal>, ApiTokenQueryError> {
        let token = AuthTokenEntity::find_by_id(token_hash.to_string())
            .one(&*self.db)
            .await
            .map_err(|e| ApiTokenQueryError::DatabaseError(e.to_string()))?;

        let Some(token) = token else {
            return Ok(None);
        };

        let user = UserEntity::find_by_id(token.user_id)
            .filter(UserColumn::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(|e| ApiTokenQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|u| Principal::new(u.to_user_details())))
    }
}
