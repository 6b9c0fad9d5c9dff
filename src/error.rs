use std::fmt;

// Application-wide error type
#[derive(Debug)]
pub enum AppError {
    /// Startup configuration problem (missing environment variable, bad key).
    Config(String),
    /// A mutating operation was attempted without a signed-in user.
    Unauthenticated,
    /// Error body returned by Supabase, surfaced verbatim. `code` carries the
    /// Postgres error code (e.g. "23505") or the GoTrue error code when one
    /// is present.
    Service {
        status: u16,
        code: Option<String>,
        message: String,
    },
    /// Transport-level failure before any response was received.
    Request(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Unauthenticated => write!(f, "Not authenticated"),
            AppError::Service {
                status,
                code,
                message,
            } => match code {
                Some(code) => write!(f, "Service error {} ({}): {}", status, code, message),
                None => write!(f, "Service error {}: {}", status, message),
            },
            AppError::Request(msg) => write!(f, "Request error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Request(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Request(format!("invalid response body: {}", err))
    }
}

// Convenient Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_service_status_and_code() {
        let err = AppError::Service {
            status: 409,
            code: Some("23505".to_string()),
            message: "duplicate key value violates unique constraint".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("409"));
        assert!(rendered.contains("23505"));
        assert!(rendered.contains("duplicate key"));
    }

    #[test]
    fn display_for_unauthenticated() {
        assert_eq!(AppError::Unauthenticated.to_string(), "Not authenticated");
    }
}
