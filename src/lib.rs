// Data-access layer for a Reddit-style social app backed by Supabase.
// Authentication goes through GoTrue, table access through PostgREST; this
// crate is a thin facade over both, one request per operation.
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use client::SupabaseClient;
pub use config::AppConfig;
pub use error::{AppError, Result};

use std::sync::Arc;

// Shared handle bundling the facade services around one Supabase client
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub client: Arc<SupabaseClient>,
    pub auth: Arc<services::AuthService>,
    pub posts: Arc<services::PostService>,
    pub comments: Arc<services::CommentService>,
    pub votes: Arc<services::VoteService>,
    pub subreddits: Arc<services::SubredditService>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Arc::new(SupabaseClient::new(&config)?);

        Ok(Self {
            auth: Arc::new(services::AuthService::new(client.clone())),
            posts: Arc::new(services::PostService::new(client.clone())),
            comments: Arc::new(services::CommentService::new(client.clone())),
            votes: Arc::new(services::VoteService::new(client.clone())),
            subreddits: Arc::new(services::SubredditService::new(client.clone())),
            client,
            config,
        })
    }

    /// Build the state from `SUPABASE_URL` and `SUPABASE_ANON_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::new(AppConfig::from_env()?)
    }
}
