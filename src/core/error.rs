//! Custom error types for Wayfarer
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Main error type for Wayfarer operations
#[derive(Error, Debug)]
pub enum WayfarerError {
    /// LLM provider connection or API errors
    #[error("Provider error: {0}")]
    Provider(String),

    /// Model not available on the provider
    #[error("Model '{0}' is not available on the configured provider")]
    ModelNotFound(String),

    /// A tool was called with missing or malformed arguments
    #[error("Invalid arguments for '{tool}': {reason}")]
    InvalidArguments { tool: String, reason: String },

    /// The agent loop ran out of turns before producing a final answer
    #[error("Max turns ({0}) exceeded")]
    MaxTurnsExceeded(usize),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for Wayfarer operations
pub type Result<T> = std::result::Result<T, WayfarerError>;

impl WayfarerError {
    /// Create a provider error
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create an invalid-arguments error
    pub fn invalid_arguments(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
