//! Normalization of raw inventory records into [`CanonicalItem`]
//!
//! Both upstream schemas describe the same items with different keys, so each
//! implements [`NormalizeItem`] by pointing at its own fields and the shared
//! rules in [`build_item`] do the rest.

use steam_common::inventory::{DescriptionLine, InventoryItem, LegacyItem, RawTag};
use thiserror::Error;

use crate::models::CanonicalItem;

/// Base URL for item icons, the upstream `icon_url` is appended
pub const IMAGE_BASE_URL: &str = "https://community.akamai.steamstatic.com/economy/image/";

/// Colour forced on Unique-quality items; the upstream value is too dark
pub const UNIQUE_COLOR: &str = "f6d627";

/// Quality label that triggers [`UNIQUE_COLOR`]
pub const UNIQUE_QUALITY: &str = "Unique";

/// A single record could not be mapped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("item {name:?} has no tag at position {index}")]
    MissingTag { name: String, index: usize },
    #[error("item {name:?} has no {field}")]
    MissingField { name: String, field: &'static str },
    #[error("record {position}: {source}")]
    AtRecord {
        position: usize,
        #[source]
        source: Box<NormalizeError>,
    },
}

/// A raw inventory record that can be mapped to a [`CanonicalItem`]
pub trait NormalizeItem {
    fn normalize(&self) -> Result<CanonicalItem, NormalizeError>;
}

/// Normalize every record, failing on the first malformed one
pub fn normalize_all<'a, T, I>(records: I) -> Result<Vec<CanonicalItem>, NormalizeError>
where
    T: NormalizeItem + 'a,
    I: IntoIterator<Item = &'a T>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| {
            record.normalize().map_err(|e| NormalizeError::AtRecord {
                position,
                source: Box::new(e),
            })
        })
        .collect()
}

/// Fields every schema provides, borrowed from the raw record
struct RawParts<'a> {
    id: String,
    name: &'a str,
    name_color: Option<&'a str>,
    item_type: &'a str,
    icon_url: &'a str,
    description: &'a [DescriptionLine],
    /// Tag labels in upstream order
    labels: Vec<&'a str>,
}

fn build_item(parts: RawParts<'_>) -> Result<CanonicalItem, NormalizeError> {
    let missing_tag = |index| NormalizeError::MissingTag {
        name: parts.name.to_string(),
        index,
    };

    let quality = *parts.labels.first().ok_or_else(|| missing_tag(0))?;
    let category = *parts.labels.get(1).ok_or_else(|| missing_tag(1))?;

    let color_hex = if quality == UNIQUE_QUALITY {
        UNIQUE_COLOR.to_string()
    } else {
        parts
            .name_color
            .ok_or_else(|| NormalizeError::MissingField {
                name: parts.name.to_string(),
                field: "name_color",
            })?
            .to_string()
    };

    let classes = if parts.labels.len() > 2 {
        parts.labels[2..].iter().map(|s| s.to_string()).collect()
    } else {
        Vec::new()
    };

    Ok(CanonicalItem {
        id: parts.id,
        name: parts.name.to_string(),
        color_hex,
        quality: quality.to_string(),
        item_type: parts.item_type.to_string(),
        image_url: format!("{}{}", IMAGE_BASE_URL, parts.icon_url),
        category: category.to_string(),
        description: parts.description.to_vec(),
        classes,
    })
}

/// Collect tag labels; a tag without a label counts as missing
fn labels<'a>(
    name: &str,
    tags: &'a [RawTag],
    label: impl Fn(&'a RawTag) -> Option<&'a String>,
) -> Result<Vec<&'a str>, NormalizeError> {
    tags.iter()
        .enumerate()
        .map(|(index, tag)| {
            label(tag)
                .map(String::as_str)
                .ok_or_else(|| NormalizeError::MissingTag {
                    name: name.to_string(),
                    index,
                })
        })
        .collect()
}

/// SteamID64 inventory: tags keyed by `internal_name`, id is the `classid`
impl NormalizeItem for InventoryItem {
    fn normalize(&self) -> Result<CanonicalItem, NormalizeError> {
        build_item(RawParts {
            id: self.classid.clone(),
            name: &self.name,
            name_color: self.name_color.as_deref(),
            item_type: &self.item_type,
            icon_url: &self.icon_url,
            description: &self.descriptions,
            labels: labels(&self.name, &self.tags, |t| t.internal_name.as_ref())?,
        })
    }
}

/// Legacy inventory: tags keyed by display `name`, id is `app_data.def_index`
impl NormalizeItem for LegacyItem {
    fn normalize(&self) -> Result<CanonicalItem, NormalizeError> {
        let def_index = self
            .app_data
            .as_ref()
            .and_then(|a| a.def_index.clone())
            .ok_or_else(|| NormalizeError::MissingField {
                name: self.name.clone(),
                field: "app_data.def_index",
            })?;

        build_item(RawParts {
            id: def_index,
            name: &self.name,
            name_color: self.name_color.as_deref(),
            item_type: &self.item_type,
            icon_url: &self.icon_url,
            description: &self.descriptions,
            labels: labels(&self.name, &self.tags, |t| t.name.as_ref())?,
        })
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
