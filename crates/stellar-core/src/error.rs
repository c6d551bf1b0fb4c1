// Error types for the calendar pipeline

use thiserror::Error;

/// Result type alias for calendar operations
pub type Result<T> = std::result::Result<T, StellarError>;

/// Errors that can occur between the gateway and the controller
#[derive(Debug, Error)]
pub enum StellarError {
    /// Transport or non-success response from the generative service
    #[error("upstream service error: {0}")]
    Upstream(String),

    /// Payload parsed as JSON but violates the declared event schema
    #[error("malformed upstream data: {0}")]
    MalformedUpstreamData(String),

    /// Configuration error (missing credential, bad endpoint)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl StellarError {
    /// Create an upstream service error
    pub fn upstream(msg: impl Into<String>) -> Self {
        StellarError::Upstream(msg.into())
    }

    /// Create a malformed upstream data error
    pub fn malformed(msg: impl Into<String>) -> Self {
        StellarError::MalformedUpstreamData(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        StellarError::Configuration(msg.into())
    }
}
