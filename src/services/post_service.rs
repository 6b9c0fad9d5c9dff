use std::sync::Arc;

use crate::client::SupabaseClient;
use crate::models::post::NewPostRow;
use crate::models::{CreatePostRequest, Post};
use crate::Result;

// Every post column, the author's username, and the post's comments with
// their authors' usernames, in one relational select.
const FEED_COLUMNS: &str = "*,profiles:user_id(username),comments(*,profiles:user_id(username))";

pub struct PostService {
    client: Arc<SupabaseClient>,
}

impl PostService {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    /// Fetch the post feed, newest first, with authors and nested comments
    /// expanded. Works without a signed-in user.
    pub async fn get_posts(&self) -> Result<Vec<Post>> {
        self.client
            .select("posts", FEED_COLUMNS, Some("created_at.desc"))
            .await
    }

    /// Insert a post authored by the signed-in user and return the stored
    /// row exactly as the database created it.
    pub async fn create_post(&self, request: CreatePostRequest) -> Result<Post> {
        let user = self.client.auth_current_user().await?;
        tracing::debug!(user_id = %user.id, subreddit = %request.subreddit, "creating post");
        let row = NewPostRow {
            title: &request.title,
            content: &request.content,
            subreddit: &request.subreddit,
            user_id: user.id,
        };
        self.client.insert_one("posts", &row).await
    }
}
