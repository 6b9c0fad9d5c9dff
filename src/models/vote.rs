use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One vote per (post, user) pair; repeated votes overwrite the value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vote {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub value: i32,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewVoteRow {
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub value: i32,
}
