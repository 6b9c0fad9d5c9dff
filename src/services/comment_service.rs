use std::sync::Arc;

use uuid::Uuid;

use crate::client::SupabaseClient;
use crate::models::comment::NewCommentRow;
use crate::models::Comment;
use crate::Result;

pub struct CommentService {
    client: Arc<SupabaseClient>,
}

impl CommentService {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    /// Comment on an existing post as the signed-in user. Existence of the
    /// post is enforced by the database foreign key; commenting on a missing
    /// post surfaces that constraint violation unchanged.
    pub async fn create_comment(&self, post_id: Uuid, content: &str) -> Result<Comment> {
        let user = self.client.auth_current_user().await?;
        tracing::debug!(user_id = %user.id, %post_id, "creating comment");
        let row = NewCommentRow {
            post_id,
            user_id: user.id,
            content,
        };
        self.client.insert_one("comments", &row).await
    }
}
