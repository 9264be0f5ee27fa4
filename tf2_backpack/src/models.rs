//! Normalized records served to the frontend and stored in the cache

use serde::{Deserialize, Serialize};
use steam_common::inventory::DescriptionLine;
use steam_common::SteamId;

/// A TF2 item in the shape the frontend renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalItem {
    pub id: String,
    pub name: String,
    /// Name/border colour, six hex digits without `#`
    pub color_hex: String,
    pub quality: String,
    pub item_type: String,
    pub image_url: String,
    /// Weapon slot, cosmetic, tool, ...
    pub category: String,
    pub description: Vec<DescriptionLine>,
    /// Classes that can equip the item, empty when not class-restricted
    pub classes: Vec<String>,
}

/// Player summary used to decorate a backpack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub steam_id: SteamId,
    pub username: String,
    pub avatar_url: String,
}

/// Cached snapshot of a user's profile, playtime and inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backpack {
    pub steam_id: SteamId,
    /// Handle exactly as it was requested
    pub user_url: String,
    pub username: String,
    pub avatar: String,
    pub playtime_hours: u64,
    /// SHA-256 of the normalized item list
    pub hash: String,
    /// Unix seconds
    pub last_updated: i64,
    pub item_count: u64,
    pub items: Vec<CanonicalItem>,
    pub success: bool,
}

impl Backpack {
    /// Seconds elapsed since the snapshot was taken
    pub fn age(&self, now: i64) -> i64 {
        now - self.last_updated
    }
}

/// Body returned when a backpack cannot be produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub success: bool,
    pub msg: String,
}

impl Failure {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            msg: msg.into(),
        }
    }
}
