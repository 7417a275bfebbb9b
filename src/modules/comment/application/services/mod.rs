mod comment_images;
mod comment_resolver;
mod create_comment_service;
mod delete_comment_service;
mod get_comment_service;
mod get_comments_service;
mod update_comment_service;

pub use comment_images::CommentImages;
pub use comment_resolver::CommentResolver;
pub use create_comment_service::CreateCommentService;
pub use delete_comment_service::DeleteCommentService;
pub use get_comment_service::GetCommentService;
pub use get_comments_service::GetCommentsService;
pub use update_comment_service::UpdateCommentService;

#[cfg(test)]
pub(crate) mod test_support;
