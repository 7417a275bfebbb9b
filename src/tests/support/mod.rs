use actix_web::{dev::ServiceResponse, test};

pub mod app_state_builder;
pub mod auth_helper;
pub mod multipart;
pub mod stubs;

pub async fn read_json(resp: ServiceResponse) -> serde_json::Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("response body is not JSON")
}
