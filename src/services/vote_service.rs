use std::sync::Arc;

use uuid::Uuid;

use crate::client::SupabaseClient;
use crate::models::vote::NewVoteRow;
use crate::models::Vote;
use crate::Result;

pub struct VoteService {
    client: Arc<SupabaseClient>,
}

impl VoteService {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    /// Cast or change the signed-in user's vote on a post. Upsert keyed on
    /// (post_id, user_id): a later call overwrites the stored value.
    pub async fn vote_post(&self, post_id: Uuid, value: i32) -> Result<Vote> {
        let user = self.client.auth_current_user().await?;
        tracing::debug!(user_id = %user.id, %post_id, value, "voting on post");
        let row = NewVoteRow {
            post_id,
            user_id: user.id,
            value,
        };
        self.client.upsert_one("votes", "post_id,user_id", &row).await
    }
}
