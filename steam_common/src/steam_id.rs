//! SteamID64 handling

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a SteamID64
pub const STEAM_ID_LEN: usize = 17;

/// Returns true if `s` is a canonical SteamID64: exactly 17 ASCII digits.
///
/// Signs, whitespace and digit separators are rejected even though some
/// integer parsers would accept them.
pub fn is_canonical_id(s: &str) -> bool {
    s.len() == STEAM_ID_LEN && s.bytes().all(|b| b.is_ascii_digit())
}

/// A validated 17-digit SteamID64, kept in its string form
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SteamId(String);

/// Returned when a string is not a canonical SteamID64
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a SteamID64 (expected 17 digits): {0:?}")]
pub struct InvalidSteamId(pub String);

impl SteamId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SteamId {
    type Err = InvalidSteamId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_canonical_id(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidSteamId(s.to_string()))
        }
    }
}

impl TryFrom<String> for SteamId {
    type Error = InvalidSteamId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if is_canonical_id(&s) {
            Ok(Self(s))
        } else {
            Err(InvalidSteamId(s))
        }
    }
}

impl From<SteamId> for String {
    fn from(id: SteamId) -> Self {
        id.0
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
