//! Error Types

use thiserror::Error;

/// Manifest fetch or parse failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    /// `fetch` rejected or the body could not be read
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Body is not valid JSON
    #[error("invalid manifest JSON: {0}")]
    Parse(String),
}

impl LoadError {
    /// Message shown in the gallery error state
    pub fn user_message(&self) -> &'static str {
        "Unable to load photos."
    }
}

/// Invalid inline gallery configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
