pub mod errors;
pub mod form_payload;
pub mod json_config;
pub mod path_config;
pub mod response;

pub use response::ApiResponse;
