pub mod api_token_query;

pub use api_token_query::{ApiTokenQuery, ApiTokenQueryError};
