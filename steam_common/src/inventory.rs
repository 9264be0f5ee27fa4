//! Raw item payloads from the Steam Community inventory endpoints
//!
//! Two schemas exist for the same TF2 items:
//! - `/inventory/{steamid}/440/2` returns a `descriptions` array whose tags
//!   carry the stable `internal_name` and whose id is the `classid`.
//! - `/id/{vanity}/inventory/json/440/2` (legacy) returns an `rgDescriptions`
//!   map whose tags carry the display `name` and whose in-game id lives in
//!   `app_data.def_index`.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// One line of an item's in-game description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionLine {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// An item tag (quality, type/category, class, ...)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTag {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub internal_name: Option<String>,
    /// Display name (legacy schema)
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub localized_tag_name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Item description from `/inventory/{steamid}/440/2`
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryItem {
    pub classid: String,
    #[serde(default)]
    pub instanceid: Option<String>,
    pub name: String,
    #[serde(default)]
    pub name_color: Option<String>,
    #[serde(rename = "type", default)]
    pub item_type: String,
    pub icon_url: String,
    #[serde(default)]
    pub tags: Vec<RawTag>,
    /// Absent on items without flavour text
    #[serde(default)]
    pub descriptions: Vec<DescriptionLine>,
}

/// `/inventory/{steamid}/440/2` body
///
/// Private or empty inventories may omit both fields.
#[derive(Debug, Deserialize)]
pub struct InventoryResponse {
    #[serde(default)]
    pub descriptions: Vec<InventoryItem>,
    #[serde(default)]
    pub total_inventory_count: u64,
}

/// Legacy `app_data` block carrying the in-game item definition index
#[derive(Debug, Clone, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub def_index: Option<String>,
    #[serde(default)]
    pub quality: Option<String>,
}

/// Item description from the legacy `rgDescriptions` map
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyItem {
    pub classid: String,
    pub name: String,
    #[serde(default)]
    pub name_color: Option<String>,
    #[serde(rename = "type", default)]
    pub item_type: String,
    pub icon_url: String,
    #[serde(default)]
    pub tags: Vec<RawTag>,
    #[serde(default)]
    pub app_data: Option<AppData>,
    /// An empty string instead of an empty array when there is no text
    #[serde(default, deserialize_with = "lines_or_blank")]
    pub descriptions: Vec<DescriptionLine>,
}

/// `/id/{vanity}/inventory/json/440/2` body
#[derive(Debug, Deserialize)]
pub struct LegacyInventoryResponse {
    #[serde(default)]
    pub success: bool,
    /// Keyed by `{classid}_{instanceid}`, upstream order kept
    #[serde(rename = "rgDescriptions", default, deserialize_with = "map_or_blank")]
    pub rg_descriptions: IndexMap<String, LegacyItem>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LinesOrBlank {
    Lines(Vec<DescriptionLine>),
    Blank(String),
}

fn lines_or_blank<'de, D>(deserializer: D) -> Result<Vec<DescriptionLine>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LinesOrBlank::deserialize(deserializer)? {
        LinesOrBlank::Lines(lines) => lines,
        LinesOrBlank::Blank(_) => Vec::new(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MapOrBlank {
    Map(IndexMap<String, LegacyItem>),
    // empty inventories come back as `[]`
    Blank(Vec<serde_json::Value>),
}

fn map_or_blank<'de, D>(deserializer: D) -> Result<IndexMap<String, LegacyItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match MapOrBlank::deserialize(deserializer)? {
        MapOrBlank::Map(map) => map,
        MapOrBlank::Blank(_) => IndexMap::new(),
    })
}
