//! TF2 Backpack - Steam inventory cache
//!
//! Resolves Steam profile handles, fetches a player's profile, TF2 playtime
//! and backpack, normalizes the items and caches the result per user for 24h.

pub mod backpack;
pub mod cache;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod models;
pub mod normalize;
pub mod resolver;
pub mod steam;
pub mod web;

pub use backpack::BackpackService;
pub use cache::{BackpackStore, CacheStore, FileStore};
pub use config::{ApiKey, Config, SteamConfig};
pub use error::{BackpackError, Result};
pub use models::{Backpack, CanonicalItem, Failure, Profile};
pub use steam::SteamClient;
