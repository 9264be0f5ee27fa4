//! Error types for tf2_backpack

use steam_common::{SteamError, SteamId};
use thiserror::Error;

use crate::normalize::NormalizeError;

/// Message returned when a handle does not resolve to a Steam account
pub const MSG_NO_USER: &str = "no user found with that URL";
/// Message returned when playtime data is missing
pub const MSG_PRIVATE: &str = "user has never played TF2, or profile is private";
/// Message returned for upstream or internal failures
pub const MSG_UPSTREAM: &str = "failed to fetch backpack from Steam, try again later";

/// Unified error type for backpack operations
#[derive(Debug, Error)]
pub enum BackpackError {
    /// Handle does not resolve to a SteamID64
    #[error("No Steam user found for handle: {0}")]
    IdentityNotFound(String),
    /// Owned-games response had no TF2 entry
    #[error("User {0} has never played TF2 or profile is private")]
    ProfilePrivateOrNoPlaytime(SteamId),
    /// An inventory record could not be normalized
    #[error("Malformed inventory record: {0}")]
    MalformedUpstreamRecord(#[from] NormalizeError),
    /// Network, HTTP status or parse failure on a Steam call
    #[error("Steam unavailable: {0}")]
    UpstreamUnavailable(#[from] SteamError),
    /// Local cache read/write failure
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
    /// Startup configuration problem
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BackpackError {
    /// Whether the failure is about the requested user rather than the service
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            BackpackError::IdentityNotFound(_) | BackpackError::ProfilePrivateOrNoPlaytime(_)
        )
    }

    /// Text for the `msg` field of a failure response
    pub fn user_message(&self) -> &'static str {
        match self {
            BackpackError::IdentityNotFound(_) => MSG_NO_USER,
            BackpackError::ProfilePrivateOrNoPlaytime(_) => MSG_PRIVATE,
            _ => MSG_UPSTREAM,
        }
    }
}

/// Cache persistence failure
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias for backpack operations
pub type Result<T> = std::result::Result<T, BackpackError>;
