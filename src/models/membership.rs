use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubredditMember {
    pub id: Uuid,
    pub subreddit: String,
    pub user_id: Uuid,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewMemberRow<'a> {
    pub subreddit: &'a str,
    pub user_id: Uuid,
}
