//! Error types shared by the dashboard crates.

use thiserror::Error;

/// Failure talking to one of the external collaborators (identity, linking,
/// accounts). Cloneable so it can live inside UI state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    /// The third-party widget (e.g. the linking session) reported an error
    #[error("Provider error: {0}")]
    Provider(String),
}

impl ServiceError {
    /// Whether retrying the same request could reasonably succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ServiceError::Network(_) | ServiceError::Provider(_) => true,
            ServiceError::Http { status, .. } => *status >= 500,
            ServiceError::Decode(_) | ServiceError::Serialize(_) => false,
        }
    }
}

/// Errors raised while loading [`crate::config::DashboardConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dashboard config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid dashboard config: {0}")]
    Invalid(String),
}
