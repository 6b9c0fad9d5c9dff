use std::env;

use crate::{AppError, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl AppConfig {
    /// Read the Supabase project URL and anon key from the environment.
    /// Startup fails immediately if either is missing.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            supabase_url: required_var("SUPABASE_URL")?,
            supabase_anon_key: required_var("SUPABASE_ANON_KEY")?,
        })
    }

    pub fn new(supabase_url: impl Into<String>, supabase_anon_key: impl Into<String>) -> Self {
        Self {
            supabase_url: supabase_url.into(),
            supabase_anon_key: supabase_anon_key.into(),
        }
    }
}

fn required_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::Config(format!(
            "Missing required environment variable: {}",
            name
        ))),
    }
}
