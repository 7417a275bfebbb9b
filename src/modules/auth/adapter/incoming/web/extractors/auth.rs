use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::{Principal, UserDetails, UserId},
    ports::outgoing::ApiTokenQuery,
    services::hash::hash_token,
};
use crate::shared::api::ApiResponse;

/// Caller authenticated by an `Authorization: Token <key>` header.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub principal: Principal,
}

impl AuthenticatedUser {
    pub fn user_id(&self) -> UserId {
        self.principal.id()
    }

    pub fn details(&self) -> &UserDetails {
        self.principal.details()
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let tokens = req
            .app_data::<web::Data<Arc<dyn ApiTokenQuery + Send + Sync>>>()
            .cloned();
        let key = extract_token_from_header(req);

        Box::pin(async move {
            let Some(tokens) = tokens else {
                tracing::error!("ApiTokenQuery is not registered as app data");
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            let Some(key) = key else {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                )));
            };

            match tokens.find_principal(&hash_token(&key)).await {
                Ok(Some(principal)) => Ok(AuthenticatedUser { principal }),
                Ok(None) => Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid token",
                ))),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to resolve API token");
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Token ")
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::ApiTokenQueryError;
    use actix_web::{get, http::StatusCode, test, App, HttpResponse, Responder};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct StubApiTokenQuery {
        expected_hash: String,
        result: Result<Option<Principal>, ApiTokenQueryError>,
    }

    #[async_trait]
    impl ApiTokenQuery for StubApiTokenQuery {
        async fn find_principal(
            &self,
            token_hash: &str,
        ) -> Result<Option<Principal>, ApiTokenQueryError> {
            if token_hash != self.expected_hash {
                return Ok(None);
            }
            self.result.clone()
        }
    }

    #[get("/whoami")]
    async fn whoami(user: AuthenticatedUser) -> impl Responder {
        HttpResponse::Ok().body(user.details().username.clone())
    }

    fn alice() -> Principal {
        Principal::new(UserDetails {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            full_name: "Alice Doe".to_string(),
        })
    }

    fn token_query(
        result: Result<Option<Principal>, ApiTokenQueryError>,
    ) -> web::Data<Arc<dyn ApiTokenQuery + Send + Sync>> {
        let query: Arc<dyn ApiTokenQuery + Send + Sync> = Arc::new(StubApiTokenQuery {
            expected_hash: hash_token("good-key"),
            result,
        });
        web::Data::new(query)
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn valid_token_yields_principal() {
        // Arrange
        let app = test::init_service(
            App::new()
                .app_data(token_query(Ok(Some(alice()))))
                .service(whoami),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Token good-key"))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "alice");
    }

    #[actix_web::test]
    async fn missing_header_returns_unauthorized() {
        // Arrange
        let app = test::init_service(
            App::new()
                .app_data(token_query(Ok(Some(alice()))))
                .service(whoami),
        )
        .await;
        let req = test::TestRequest::get().uri("/whoami").to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn bearer_scheme_is_not_accepted() {
        // Arrange
        let app = test::init_service(
            App::new()
                .app_data(token_query(Ok(Some(alice()))))
                .service(whoami),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer good-key"))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn unknown_token_returns_invalid_token() {
        // Arrange
        let app = test::init_service(
            App::new()
                .app_data(token_query(Ok(Some(alice()))))
                .service(whoami),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Token wrong-key"))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "INVALID_TOKEN");
    }

    #[actix_web::test]
    async fn lookup_failure_returns_internal_error() {
        // Arrange
        let app = test::init_service(
            App::new()
                .app_data(token_query(Err(ApiTokenQueryError::DatabaseError(
                    "db down".to_string(),
                ))))
                .service(whoami),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Token good-key"))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
