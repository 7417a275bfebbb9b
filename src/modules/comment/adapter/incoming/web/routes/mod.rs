mod create_comment;
mod delete_comment;
mod dto;
mod get_comment;
mod get_comments;
mod update_comment;

pub use create_comment::*;
pub use delete_comment::*;
pub use dto::{CommentForm, CommentResponse};
pub use get_comment::*;
pub use get_comments::*;
pub use update_comment::*;
