use std::sync::Arc;

use crate::client::SupabaseClient;
use crate::models::membership::NewMemberRow;
use crate::models::SubredditMember;
use crate::Result;

pub struct SubredditService {
    client: Arc<SupabaseClient>,
}

impl SubredditService {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    /// Join a subreddit as the signed-in user. Joining twice violates the
    /// (subreddit, user_id) unique constraint and surfaces that error.
    pub async fn join_subreddit(&self, subreddit: &str) -> Result<SubredditMember> {
        let user = self.client.auth_current_user().await?;
        tracing::debug!(user_id = %user.id, subreddit, "joining subreddit");
        let row = NewMemberRow {
            subreddit,
            user_id: user.id,
        };
        self.client.insert_one("subreddit_members", &row).await
    }
}
