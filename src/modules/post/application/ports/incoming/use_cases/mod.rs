mod create_post_use_case;
mod delete_post_use_case;
mod get_post_use_case;
mod get_posts_use_case;
mod update_post_use_case;

pub use create_post_use_case::{CreatePostError, CreatePostUseCase, PostInput};
pub use delete_post_use_case::{DeletePostError, DeletePostUseCase};
pub use get_post_use_case::{GetPostError, GetPostUseCase};
pub use get_posts_use_case::{GetPostsError, GetPostsUseCase};
pub use update_post_use_case::{UpdatePostError, UpdatePostUseCase};
