pub mod comment;
pub mod membership;
pub mod post;
pub mod user;
pub mod vote;

// Re-export models for convenience
pub use comment::Comment;
pub use membership::SubredditMember;
pub use post::{CreatePostRequest, Post};
pub use user::{AuthData, Profile, Session, User};
pub use vote::Vote;
