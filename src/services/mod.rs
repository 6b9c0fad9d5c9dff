pub mod auth_service;
pub mod comment_service;
pub mod post_service;
pub mod subreddit_service;
pub mod vote_service;

// Re-export services for convenience
pub use auth_service::AuthService;
pub use comment_service::CommentService;
pub use post_service::PostService;
pub use subreddit_service::SubredditService;
pub use vote_service::VoteService;
