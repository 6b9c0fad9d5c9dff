use std::sync::RwLock;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::config::AppConfig;
use crate::models::{AuthData, Session, User};
use crate::{AppError, Result};

// PostgREST media type that makes a write return the affected row as a single
// JSON object instead of a one-element array.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Shared handle to the Supabase backend. Wraps one `reqwest::Client` plus
/// the GoTrue session established by the last successful sign-in. Created
/// once at startup and shared across all services via `Arc`.
pub struct SupabaseClient {
    http: reqwest::Client,
    auth_url: String,
    rest_url: String,
    anon_key: String,
    session: RwLock<Option<Session>>,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let base = config.supabase_url.trim_end_matches('/');

        // Every request to the project carries the anon key; Authorization
        // varies per request depending on whether a user is signed in.
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.supabase_anon_key)
            .map_err(|e| AppError::Config(format!("Invalid SUPABASE_ANON_KEY: {}", e)))?;
        headers.insert("apikey", api_key);

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            auth_url: format!("{}/auth/v1", base),
            rest_url: format!("{}/rest/v1", base),
            anon_key: config.supabase_anon_key.clone(),
            session: RwLock::new(None),
        })
    }

    /// Session from the last successful sign-in, if any.
    pub fn session(&self) -> Option<Session> {
        // A poisoned lock still holds the last stored session; keep serving it.
        self.session
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn set_session(&self, session: Option<Session>) {
        *self.session.write().unwrap_or_else(|e| e.into_inner()) = session;
    }

    // Requests to the data API run as the signed-in user when there is one,
    // otherwise as the anonymous role.
    fn bearer_token(&self) -> String {
        match self.session() {
            Some(session) => session.access_token,
            None => self.anon_key.clone(),
        }
    }

    // ---- GoTrue (authentication) -------------------------------------

    pub(crate) async fn auth_sign_up(&self, email: &str, password: &str) -> Result<AuthData> {
        let response = self
            .http
            .post(format!("{}/signup", self.auth_url))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        let body: serde_json::Value = Self::decode(response).await?;

        // GoTrue answers with a full session when email confirmation is off,
        // and with just the pending user when it is on.
        let data = AuthData::from_auth_payload(body)?;
        if data.session.is_some() {
            self.set_session(data.session.clone());
        }
        Ok(data)
    }

    pub(crate) async fn auth_sign_in(&self, email: &str, password: &str) -> Result<AuthData> {
        let response = self
            .http
            .post(format!("{}/token", self.auth_url))
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        let session: Session = Self::decode(response).await?;
        self.set_session(Some(session.clone()));
        Ok(AuthData {
            user: Some(session.user.clone()),
            session: Some(session),
        })
    }

    pub(crate) async fn auth_sign_out(&self) -> Result<()> {
        // Nothing to revoke when nobody is signed in.
        let Some(session) = self.session() else {
            return Ok(());
        };

        let response = self
            .http
            .post(format!("{}/logout", self.auth_url))
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::service_error(
                status.as_u16(),
                response.text().await.unwrap_or_default(),
            ));
        }
        self.set_session(None);
        Ok(())
    }

    /// Resolve the currently signed-in user against GoTrue. Fails with
    /// `Unauthenticated` when there is no session or the token is rejected.
    pub(crate) async fn auth_current_user(&self) -> Result<User> {
        let Some(session) = self.session() else {
            return Err(AppError::Unauthenticated);
        };

        let response = self
            .http
            .get(format!("{}/user", self.auth_url))
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AppError::Unauthenticated);
        }
        Self::decode(response).await
    }

    // ---- PostgREST (data API) ----------------------------------------

    pub(crate) async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
        order: Option<&str>,
    ) -> Result<Vec<T>> {
        tracing::debug!(table, "select");
        let mut request = self
            .http
            .get(format!("{}/{}", self.rest_url, table))
            .bearer_auth(self.bearer_token())
            .query(&[("select", columns)]);
        if let Some(order) = order {
            request = request.query(&[("order", order)]);
        }
        Self::decode(request.send().await?).await
    }

    pub(crate) async fn insert_one<T, B>(&self, table: &str, row: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        tracing::debug!(table, "insert");
        let response = self
            .http
            .post(format!("{}/{}", self.rest_url, table))
            .bearer_auth(self.bearer_token())
            .header("Prefer", "return=representation")
            .header(ACCEPT, SINGLE_OBJECT)
            .json(row)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Insert-or-update keyed by the `on_conflict` column list.
    pub(crate) async fn upsert_one<T, B>(&self, table: &str, on_conflict: &str, row: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        tracing::debug!(table, on_conflict, "upsert");
        let response = self
            .http
            .post(format!("{}/{}", self.rest_url, table))
            .bearer_auth(self.bearer_token())
            .query(&[("on_conflict", on_conflict)])
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .header(ACCEPT, SINGLE_OBJECT)
            .json(row)
            .send()
            .await?;
        Self::decode(response).await
    }

    // ---- Response handling -------------------------------------------

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            Err(Self::service_error(
                status.as_u16(),
                response.text().await.unwrap_or_default(),
            ))
        }
    }

    // Surfaces the upstream error verbatim. PostgREST bodies look like
    // {"message", "code", "details", "hint"}; GoTrue uses {"msg"} or
    // {"error", "error_description"} depending on the endpoint.
    fn service_error(status: u16, body: String) -> AppError {
        let parsed: Option<serde_json::Value> = serde_json::from_str(&body).ok();
        let field = |name: &str| {
            parsed
                .as_ref()
                .and_then(|v| v.get(name))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };
        let message = field("message")
            .or_else(|| field("msg"))
            .or_else(|| field("error_description"))
            .or_else(|| field("error"))
            .unwrap_or(body);
        let code = field("code").or_else(|| field("error_code"));
        AppError::Service {
            status,
            code,
            message,
        }
    }
}
