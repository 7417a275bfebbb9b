pub mod auth;
pub mod comment;
pub mod media;
pub mod post;
pub mod topic;
