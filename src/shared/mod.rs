pub mod api;
pub mod config;
pub mod lookup;
pub mod ownership;
pub mod patch_field;
pub mod validation;
