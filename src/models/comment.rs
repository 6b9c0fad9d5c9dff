use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::Profile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Author profile, present when fetched with relational expansion.
    pub profiles: Option<Profile>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewCommentRow<'a> {
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub content: &'a str,
}
