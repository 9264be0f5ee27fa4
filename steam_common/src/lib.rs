//! Shared types for the TF2 backpack service
//!
//! Holds the SteamID64 type, the raw payloads returned by the Steam Web API
//! and Steam Community inventory endpoints, and the upstream error type.
//! Nothing in here performs I/O.

pub mod error;
pub mod inventory;
pub mod steam_id;
pub mod web_api;

pub use error::{Result, SteamError};
pub use steam_id::{is_canonical_id, SteamId};

/// Steam app id for Team Fortress 2
pub const TF2_APP_ID: u32 = 440;

/// Inventory context id for TF2 backpack items
pub const TF2_CONTEXT_ID: u32 = 2;
