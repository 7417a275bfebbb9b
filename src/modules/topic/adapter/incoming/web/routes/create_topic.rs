use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::{errors::field_error_response, ApiResponse},
    topic::{
        adapter::incoming::web::routes::{TopicRequest, TopicResponse},
        application::ports::incoming::use_cases::CreateTopicError,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create a topic
///
/// The caller becomes the author. `url_name` is derived from `name`.
#[utoipa::path(
    post,
    path = "/api/v1/topics",
    tag = "topics",
    security(("token_auth" = [])),
    request_body = TopicRequest,
    responses(
        (status = 201, description = "Topic created", body = inline(SuccessResponse<TopicResponse>)),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 409, description = "Url name collision", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/v1/topics")]
pub async fn create_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<TopicRequest>,
) -> impl Responder {
    match data
        .topic
        .create
        .execute(user.details().clone(), payload.into_inner().into())
        .await
    {
        Ok(topic) => ApiResponse::created(TopicResponse::from(topic)),
        Err(err) => map_create_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_topic_error(err: CreateTopicError) -> HttpResponse {
    match err {
        CreateTopicError::Validation(e) => field_error_response(&e),
        CreateTopicError::UrlNameTaken => ApiResponse::conflict(
            "TOPIC_URL_NAME_TAKEN",
            "A topic with a similar name was created concurrently, please retry",
        ),
        CreateTopicError::RepositoryError(e) => {
            error!("Failed to create topic: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::{
        auth::application::domain::entities::UserDetails,
        shared::{patch_field::PatchField, validation::FieldError},
        tests::support::{
            app_state_builder::TestAppStateBuilder,
            auth_helper::{authenticated_as, test_user, token_header},
            read_json,
        },
        topic::application::{
            domain::entities::Topic,
            ports::incoming::use_cases::{CreateTopicUseCase, TopicInput},
            services::test_support::sample_topic,
        },
    };

    #[derive(Clone)]
    struct MockCreateTopicUseCase {
        result: Result<Topic, CreateTopicError>,
        calls: Arc<Mutex<Vec<(UserDetails, TopicInput)>>>,
    }

    impl MockCreateTopicUseCase {
        fn returning(result: Result<Topic, CreateTopicError>) -> Self {
            Self {
                result,
                calls: Arc::new(Mutex::new(vec![])),
            }
        }
    }

    #[async_trait]
    impl CreateTopicUseCase for MockCreateTopicUseCase {
        async fn execute(
            &self,
            author: UserDetails,
            input: TopicInput,
        ) -> Result<Topic, CreateTopicError> {
            self.calls.lock().unwrap().push((author, input));
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn create_topic_success_returns_created_with_caller_as_author() {
        // Arrange
        let user = test_user(Uuid::new_v4());
        let mock = MockCreateTopicUseCase::returning(Ok(sample_topic(user.id, "rust")));
        let calls = mock.calls.clone();
        let state = TestAppStateBuilder::default().with_create_topic(mock).build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(authenticated_as(user.clone()))
                .service(create_topic_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/topics")
            .insert_header(token_header())
            .set_json(serde_json::json!({ "name": "Rust", "author": Uuid::new_v4() }))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::CREATED);
        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["url_name"], "rust");

        let calls = calls.lock().unwrap();
        assert_eq!(calls[0].0, user);
        assert_eq!(calls[0].1.name, PatchField::Value("Rust".to_string()));
    }

    #[actix_web::test]
    async fn create_topic_empty_name_returns_bad_request() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_create_topic(MockCreateTopicUseCase::returning(Err(
                CreateTopicError::Validation(FieldError::Empty("name")),
            )))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(authenticated_as(test_user(Uuid::new_v4())))
                .service(create_topic_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/topics")
            .insert_header(token_header())
            .set_json(serde_json::json!({ "name": "  " }))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = read_json(resp).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "EMPTY_NAME");
    }

    #[actix_web::test]
    async fn create_topic_url_name_race_returns_conflict() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_create_topic(MockCreateTopicUseCase::returning(Err(
                CreateTopicError::UrlNameTaken,
            )))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(authenticated_as(test_user(Uuid::new_v4())))
                .service(create_topic_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/topics")
            .insert_header(token_header())
            .set_json(serde_json::json!({ "name": "Rust" }))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "TOPIC_URL_NAME_TAKEN");
    }

    #[actix_web::test]
    async fn create_topic_repository_error_returns_internal_error() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_create_topic(MockCreateTopicUseCase::returning(Err(
                CreateTopicError::RepositoryError("db down".to_string()),
            )))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(authenticated_as(test_user(Uuid::new_v4())))
                .service(create_topic_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/topics")
            .insert_header(token_header())
            .set_json(serde_json::json!({ "name": "Rust" }))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }
}
