//! Backpack aggregation
//!
//! handle → SteamID64 → fresh cache hit, or a full refresh from Steam
//! (profile + playtime, then inventory) that is normalized, fingerprinted
//! and written back to the cache.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use steam_common::{SteamId, TF2_APP_ID};

use crate::cache::CacheStore;
use crate::error::{BackpackError, Result};
use crate::fingerprint::fingerprint;
use crate::models::{Backpack, Profile};
use crate::normalize::normalize_all;
use crate::resolver::resolve;
use crate::steam::SteamClient;

/// Current Unix time in seconds
pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Minutes to whole hours, halves rounded to even
pub fn minutes_to_hours(minutes: u64) -> u64 {
    (minutes as f64 / 60.0).round_ties_even() as u64
}

/// Serves backpacks from the cache, refreshing from Steam when needed
pub struct BackpackService {
    client: SteamClient,
    cache: CacheStore,
    /// One refresh at a time per user
    in_flight: Mutex<HashMap<SteamId, Arc<tokio::sync::Mutex<()>>>>,
}

impl BackpackService {
    pub fn new(client: SteamClient, cache: CacheStore) -> Self {
        Self {
            client,
            cache,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Backpack for a vanity name or SteamID64
    pub async fn get_backpack(&self, handle: &str) -> Result<Backpack> {
        let id = resolve(&self.client, handle).await?;

        if let Some(backpack) = self.cache.load(&id, unix_now()) {
            return Ok(backpack);
        }

        let lock = self.refresh_lock(&id);
        let guard = lock.lock().await;

        // a concurrent request may have refreshed while we waited
        let result = match self.cache.load(&id, unix_now()) {
            Some(backpack) => Ok(backpack),
            None => self.refresh(handle, &id).await,
        };

        drop(guard);
        self.release_lock(&id, &lock);
        result
    }

    fn refresh_lock(&self, id: &SteamId) -> Arc<tokio::sync::Mutex<()>> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        Arc::clone(in_flight.entry(id.clone()).or_default())
    }

    fn release_lock(&self, id: &SteamId, lock: &Arc<tokio::sync::Mutex<()>>) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        // the map and this caller hold the only references
        if Arc::strong_count(lock) <= 2 {
            in_flight.remove(id);
        }
    }

    async fn refresh(&self, handle: &str, id: &SteamId) -> Result<Backpack> {
        log::info!("Refreshing backpack for {} ({})", id, handle);

        let (profile, playtime_hours) =
            tokio::try_join!(self.fetch_profile(id), self.fetch_playtime(id))?;

        let inventory = self.client.fetch_inventory(id).await?;
        let items = normalize_all(&inventory.items)?;
        let hash = fingerprint(&items)?;

        match self.cache.load_any(id) {
            Some(previous) if previous.hash == hash => {
                log::info!("Inventory for {} unchanged since last snapshot", id)
            }
            Some(_) => log::info!("Inventory for {} changed since last snapshot", id),
            None => {}
        }

        let backpack = Backpack {
            steam_id: id.clone(),
            user_url: handle.to_string(),
            username: profile.username,
            avatar: profile.avatar_url,
            playtime_hours,
            hash,
            last_updated: unix_now(),
            item_count: inventory.total_count,
            items,
            success: true,
        };

        if let Err(e) = self.cache.save(id, &backpack) {
            log::warn!("Failed to cache backpack for {}: {}", id, e);
        }

        log::info!(
            "Fetched backpack for {}: {} items, {}h played",
            id,
            backpack.items.len(),
            backpack.playtime_hours
        );
        Ok(backpack)
    }

    async fn fetch_profile(&self, id: &SteamId) -> Result<Profile> {
        let summary = self
            .client
            .fetch_player_summary(id)
            .await?
            .ok_or_else(|| BackpackError::IdentityNotFound(id.to_string()))?;

        Ok(Profile {
            steam_id: id.clone(),
            username: summary.personaname,
            avatar_url: summary.avatarfull,
        })
    }

    /// Hours of TF2 played; missing data means never played or private
    async fn fetch_playtime(&self, id: &SteamId) -> Result<u64> {
        let games = self.client.fetch_owned_games(id).await?;

        match games.minutes_played(TF2_APP_ID) {
            Some(minutes) => Ok(minutes_to_hours(minutes)),
            None => {
                log::info!("User {} has never played TF2 or profile is private", id);
                Err(BackpackError::ProfilePrivateOrNoPlaytime(id.clone()))
            }
        }
    }
}

#[cfg(test)]
#[path = "backpack_tests.rs"]
mod tests;
