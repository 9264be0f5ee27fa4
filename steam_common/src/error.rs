//! Upstream error type shared by every Steam call

use thiserror::Error;

/// Failure talking to a Steam endpoint
#[derive(Debug, Error)]
pub enum SteamError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Endpoint answered but flagged the request as failed
    #[error("Steam reported failure: {0}")]
    Unsuccessful(String),
}

/// Result alias for Steam operations
pub type Result<T> = std::result::Result<T, SteamError>;
