mod create_post_service;
mod delete_post_service;
mod get_post_service;
mod get_posts_service;
mod post_resolver;
mod update_post_service;

pub use create_post_service::CreatePostService;
pub use delete_post_service::DeletePostService;
pub use get_post_service::GetPostService;
pub use get_posts_service::GetPostsService;
pub use post_resolver::PostResolver;
pub use update_post_service::UpdatePostService;

#[cfg(test)]
pub(crate) mod test_support;
