//! Steam Web API response envelopes
//!
//! Every `api.steampowered.com` endpoint wraps its payload in a top-level
//! `response` object.

use serde::Deserialize;

/// `{ "response": T }`
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub response: T,
}

/// ISteamUser/ResolveVanityURL
#[derive(Debug, Deserialize)]
pub struct VanityResolution {
    /// 1 on success, 42 when no match was found
    pub success: i64,
    #[serde(default)]
    pub steamid: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl VanityResolution {
    pub fn is_success(&self) -> bool {
        self.success == 1
    }
}

/// ISteamUser/GetPlayerSummaries
#[derive(Debug, Deserialize)]
pub struct PlayerSummaries {
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlayerSummary {
    pub steamid: String,
    pub personaname: String,
    pub avatarfull: String,
}

/// IPlayerService/GetOwnedGames
///
/// `games` is absent when the profile is private or the filtered app was
/// never played.
#[derive(Debug, Deserialize)]
pub struct OwnedGames {
    #[serde(default)]
    pub game_count: Option<u32>,
    #[serde(default)]
    pub games: Option<Vec<OwnedGame>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OwnedGame {
    pub appid: u32,
    /// Total playtime in minutes
    #[serde(default)]
    pub playtime_forever: u64,
}

impl OwnedGames {
    /// Minutes played for `appid`, or `None` when the game is not listed
    pub fn minutes_played(&self, appid: u32) -> Option<u64> {
        self.games
            .as_ref()?
            .iter()
            .find(|g| g.appid == appid)
            .map(|g| g.playtime_forever)
    }
}
