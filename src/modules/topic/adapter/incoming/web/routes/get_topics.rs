use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::{
        adapter::incoming::web::routes::TopicResponse,
        application::ports::incoming::use_cases::GetTopicsError,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// List topics
///
/// Every topic, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/topics",
    tag = "topics",
    security(("token_auth" = [])),
    responses(
        (status = 200, description = "Topics", body = inline(SuccessResponse<Vec<TopicResponse>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/v1/topics")]
pub async fn get_topics_handler(_user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.topic.list.execute().await {
        Ok(topics) => ApiResponse::success(
            topics
                .into_iter()
                .map(TopicResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(GetTopicsError::RepositoryError(e)) => {
            error!("Failed to list topics: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::{
        tests::support::{
            app_state_builder::TestAppStateBuilder,
            auth_helper::{authenticated_as, test_user, token_header},
            read_json,
        },
        topic::application::{
            domain::entities::Topic, ports::incoming::use_cases::GetTopicsUseCase,
            services::test_support::sample_topic,
        },
    };

    struct MockGetTopicsUseCase {
        result: Result<Vec<Topic>, GetTopicsError>,
    }

    #[async_trait]
    impl GetTopicsUseCase for MockGetTopicsUseCase {
        async fn execute(&self) -> Result<Vec<Topic>, GetTopicsError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn lists_topics_with_embedded_author() {
        // Arrange
        let owner = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_get_topics(MockGetTopicsUseCase {
                result: Ok(vec![sample_topic(owner, "rust"), sample_topic(owner, "go")]),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(authenticated_as(test_user(Uuid::new_v4())))
                .service(get_topics_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/topics")
            .insert_header(token_header())
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
        assert_eq!(json["data"][0]["url_name"], "rust");
        assert_eq!(json["data"][0]["author"]["id"], owner.to_string());
    }

    #[actix_web::test]
    async fn missing_token_returns_unauthorized() {
        // Arrange
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(authenticated_as(test_user(Uuid::new_v4())))
                .service(get_topics_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/topics").to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn repository_error_returns_internal_error() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_get_topics(MockGetTopicsUseCase {
                result: Err(GetTopicsError::RepositoryError("db down".to_string())),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(authenticated_as(test_user(Uuid::new_v4())))
                .service(get_topics_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/topics")
            .insert_header(token_header())
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }
}
