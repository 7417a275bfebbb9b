mod create_post;
mod delete_post;
mod dto;
mod get_post;
mod get_posts;
mod update_post;

pub use create_post::*;
pub use delete_post::*;
pub use dto::{PostRequest, PostResponse};
pub use get_post::*;
pub use get_posts::*;
pub use update_post::*;
