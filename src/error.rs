// file: src/error.rs
// version: 1.0.0
// guid: 3f9c1b2a-8d4e-4f6a-9b0c-2e7d5a1c8f3b

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, DavitError>;

/// Error types for the davit CLI
#[derive(Error, Debug)]
pub enum DavitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Daemon error: {0}")]
    Daemon(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl DavitError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new daemon error carrying the daemon's own message
    pub fn daemon(msg: impl Into<String>) -> Self {
        Self::Daemon(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
