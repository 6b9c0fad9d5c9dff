use std::sync::Arc;

use crate::client::SupabaseClient;
use crate::models::{AuthData, User};
use crate::Result;

/// Authentication operations, delegated to GoTrue.
pub struct AuthService {
    client: Arc<SupabaseClient>,
}

impl AuthService {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthData> {
        tracing::debug!(email, "signing up");
        self.client.auth_sign_up(email, password).await
    }

    /// Password sign-in. On success the session is remembered by the shared
    /// client handle and used for subsequent data requests.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthData> {
        tracing::debug!(email, "signing in");
        self.client.auth_sign_in(email, password).await
    }

    /// Revoke the current session. A no-op when nobody is signed in.
    pub async fn sign_out(&self) -> Result<()> {
        self.client.auth_sign_out().await
    }

    /// The currently signed-in user, validated against the service.
    pub async fn current_user(&self) -> Result<User> {
        self.client.auth_current_user().await
    }
}
