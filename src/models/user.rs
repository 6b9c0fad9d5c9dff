use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Result;

/// GoTrue user record. Profiles referencing this id live in the `profiles`
/// table and are filled in by the database on sign-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: Option<u64>,
    pub refresh_token: Option<String>,
    pub user: User,
}

/// What sign-up and sign-in hand back. Sign-up with email confirmation
/// enabled yields a user but no session yet.
#[derive(Debug, Clone)]
pub struct AuthData {
    pub user: Option<User>,
    pub session: Option<Session>,
}

impl AuthData {
    pub(crate) fn from_auth_payload(value: serde_json::Value) -> Result<Self> {
        if value.get("access_token").is_some() {
            let session: Session = serde_json::from_value(value)?;
            Ok(Self {
                user: Some(session.user.clone()),
                session: Some(session),
            })
        } else {
            let user: User = serde_json::from_value(value)?;
            Ok(Self {
                user: Some(user),
                session: None,
            })
        }
    }
}

/// Row shape of the relational expansion `profiles:user_id(username)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_payload_with_access_token_is_a_session() {
        let payload = serde_json::json!({
            "access_token": "token",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh",
            "user": { "id": "550e8400-e29b-41d4-a716-446655440001", "email": "a@b.c" }
        });
        let data = AuthData::from_auth_payload(payload).unwrap();
        assert!(data.session.is_some());
        assert_eq!(data.user.unwrap().email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn auth_payload_without_token_is_a_pending_user() {
        let payload = serde_json::json!({
            "id": "550e8400-e29b-41d4-a716-446655440001",
            "email": "a@b.c",
            "created_at": "2026-01-01T00:00:00Z"
        });
        let data = AuthData::from_auth_payload(payload).unwrap();
        assert!(data.session.is_none());
        assert!(data.user.is_some());
    }
}
