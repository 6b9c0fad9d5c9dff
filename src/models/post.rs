use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::comment::Comment;
use crate::models::user::Profile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub subreddit: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Author profile, present when fetched with relational expansion.
    pub profiles: Option<Profile>,
    /// Nested comments, present when fetched with relational expansion.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub subreddit: String,
}

// Insert payload; the caller's user id is attached by the service.
#[derive(Debug, Serialize)]
pub(crate) struct NewPostRow<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub subreddit: &'a str,
    pub user_id: Uuid,
}
