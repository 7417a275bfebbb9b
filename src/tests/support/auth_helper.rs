use actix_web::web;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::{Principal, UserDetails},
    ports::outgoing::{ApiTokenQuery, ApiTokenQueryError},
};

pub const TEST_TOKEN: &str = "test-key";

pub fn test_user(id: Uuid) -> UserDetails {
    UserDetails {
        id,
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        full_name: "Alice Doe".to_string(),
    }
}

/// Every token resolves to `user`.
struct FixedPrincipalQuery {
    principal: Principal,
}

#[async_trait]
impl ApiTokenQuery for FixedPrincipalQuery {
    async fn find_principal(
        &self,
        _token_hash: &str,
    ) -> Result<Option<Principal>, ApiTokenQueryError> {
        Ok(Some(self.principal.clone()))
    }
}

pub fn authenticated_as(user: UserDetails) -> web::Data<Arc<dyn ApiTokenQuery + Send + Sync>> {
    let query: Arc<dyn ApiTokenQuery + Send + Sync> = Arc::new(FixedPrincipalQuery {
        principal: Principal::new(user),
    });
    web::Data::new(query)
}

pub fn token_header() -> (&'static str, String) {
    ("Authorization", format!("Token {TEST_TOKEN}"))
}
