mod api_token_query_postgres;
pub mod sea_orm_entity;

pub use api_token_query_postgres::ApiTokenQueryPostgres;
