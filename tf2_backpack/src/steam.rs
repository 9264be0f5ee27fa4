//! Steam Web API / Steam Community client
//!
//! One shared async `reqwest::Client` with a request timeout. Any transport
//! error, non-success status or unparseable body is returned as a
//! [`SteamError`]; nothing is retried.

use serde::de::DeserializeOwned;
use steam_common::inventory::{InventoryItem, InventoryResponse, LegacyInventoryResponse, LegacyItem};
use steam_common::web_api::{ApiEnvelope, OwnedGames, PlayerSummaries, PlayerSummary, VanityResolution};
use steam_common::{SteamError, SteamId, TF2_APP_ID, TF2_CONTEXT_ID};

use crate::config::{ApiKey, SteamConfig};

const USER_AGENT: &str = "tf2_backpack/0.1";

/// Raw inventory page for one user
#[derive(Debug)]
pub struct RawInventory {
    pub items: Vec<InventoryItem>,
    /// Total as reported upstream
    pub total_count: u64,
}

/// Async client for the Steam endpoints the backpack needs
#[derive(Clone)]
pub struct SteamClient {
    client: reqwest::Client,
    api_key: ApiKey,
    api_base: String,
    community_base: String,
}

impl SteamClient {
    pub fn new(config: &SteamConfig) -> Result<Self, SteamError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
            community_base: config.community_base.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SteamError> {
        log::debug!("GET {}", url);

        let response = self.client.get(url).query(query).send().await?;

        if !response.status().is_success() {
            log::warn!("{} returned {}", url, response.status());
            return Err(SteamError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// ISteamUser/ResolveVanityURL for a custom profile URL
    pub async fn resolve_vanity(&self, vanity: &str) -> Result<VanityResolution, SteamError> {
        let url = format!("{}/ISteamUser/ResolveVanityURL/v0001/", self.api_base);
        let envelope: ApiEnvelope<VanityResolution> = self
            .get_json(&url, &[("key", self.api_key.as_str()), ("vanityurl", vanity)])
            .await?;
        Ok(envelope.response)
    }

    /// ISteamUser/GetPlayerSummaries for one user, `None` if no player came back
    pub async fn fetch_player_summary(
        &self,
        id: &SteamId,
    ) -> Result<Option<PlayerSummary>, SteamError> {
        let url = format!("{}/ISteamUser/GetPlayerSummaries/v0002/", self.api_base);
        let envelope: ApiEnvelope<PlayerSummaries> = self
            .get_json(&url, &[("key", self.api_key.as_str()), ("steamids", id.as_str())])
            .await?;
        Ok(envelope.response.players.into_iter().next())
    }

    /// IPlayerService/GetOwnedGames filtered to TF2
    pub async fn fetch_owned_games(&self, id: &SteamId) -> Result<OwnedGames, SteamError> {
        let url = format!("{}/IPlayerService/GetOwnedGames/v1/", self.api_base);
        let app_id = TF2_APP_ID.to_string();
        let envelope: ApiEnvelope<OwnedGames> = self
            .get_json(
                &url,
                &[
                    ("key", self.api_key.as_str()),
                    ("steamid", id.as_str()),
                    ("include_played_free_games", "1"),
                    ("appids_filter[0]", app_id.as_str()),
                ],
            )
            .await?;
        Ok(envelope.response)
    }

    /// TF2 backpack by SteamID64
    pub async fn fetch_inventory(&self, id: &SteamId) -> Result<RawInventory, SteamError> {
        let url = format!(
            "{}/inventory/{}/{}/{}",
            self.community_base, id, TF2_APP_ID, TF2_CONTEXT_ID
        );
        let response: InventoryResponse = self.get_json(&url, &[]).await?;

        log::debug!(
            "Inventory for {}: {} descriptions, {} total",
            id,
            response.descriptions.len(),
            response.total_inventory_count
        );

        Ok(RawInventory {
            items: response.descriptions,
            total_count: response.total_inventory_count,
        })
    }

    /// TF2 backpack through the legacy profile-URL endpoint
    pub async fn fetch_legacy_inventory(&self, vanity: &str) -> Result<Vec<LegacyItem>, SteamError> {
        let url = format!(
            "{}/id/{}/inventory/json/{}/{}",
            self.community_base,
            urlencoding::encode(vanity),
            TF2_APP_ID,
            TF2_CONTEXT_ID
        );
        let response: LegacyInventoryResponse = self.get_json(&url, &[]).await?;
        if !response.success {
            return Err(SteamError::Unsuccessful(format!(
                "legacy inventory for {}",
                vanity
            )));
        }
        Ok(response.rg_descriptions.into_values().collect())
    }
}

#[cfg(test)]
#[path = "steam_tests.rs"]
mod tests;
