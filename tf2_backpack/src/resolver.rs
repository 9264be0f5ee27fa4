//! Handle → SteamID64 resolution

use steam_common::SteamId;

use crate::error::{BackpackError, Result};
use crate::steam::SteamClient;

/// Resolve a user-supplied handle.
///
/// A handle that already is a SteamID64 is returned without any upstream
/// call; anything else is looked up as a vanity URL.
pub async fn resolve(client: &SteamClient, handle: &str) -> Result<SteamId> {
    if let Ok(id) = handle.parse::<SteamId>() {
        return Ok(id);
    }

    log::debug!("Resolving vanity URL: {}", handle);
    let resolution = client.resolve_vanity(handle).await?;

    if !resolution.is_success() {
        log::info!("No Steam user found with URL: {}", handle);
        return Err(BackpackError::IdentityNotFound(handle.to_string()));
    }

    resolution
        .steamid
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| {
            log::warn!("Vanity URL {} resolved without a valid steamid", handle);
            BackpackError::IdentityNotFound(handle.to_string())
        })
}
