//! Process-wide configuration, read once at startup

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache::FRESHNESS_WINDOW_SECS;
use crate::error::{BackpackError, Result};

/// Default Steam Web API host
pub const STEAM_API_BASE: &str = "https://api.steampowered.com";
/// Default Steam Community host (inventories)
pub const STEAM_COMMUNITY_BASE: &str = "https://steamcommunity.com";
/// Default upstream request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Steam Web API key
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validate a raw key: surrounding whitespace is trimmed, the rest must be
    /// non-empty ASCII alphanumerics
    pub fn new(raw: &str) -> Result<Self> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(BackpackError::Config("Steam API key is empty".to_string()));
        }
        if !key.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(BackpackError::Config(
                "Steam API key contains invalid characters".to_string(),
            ));
        }
        Ok(Self(key.to_string()))
    }

    /// Read and validate the key file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            BackpackError::Config(format!("Failed to read key file {}: {}", path.display(), e))
        })?;
        Self::new(&raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Settings for talking to Steam
#[derive(Debug, Clone)]
pub struct SteamConfig {
    pub api_key: ApiKey,
    pub api_base: String,
    pub community_base: String,
    pub timeout: Duration,
}

impl SteamConfig {
    /// Production endpoints with the default timeout
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            api_base: STEAM_API_BASE.to_string(),
            community_base: STEAM_COMMUNITY_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point both hosts at `base` (used against mock servers)
    pub fn with_base_url(mut self, base: &str) -> Self {
        self.api_base = base.trim_end_matches('/').to_string();
        self.community_base = self.api_base.clone();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Everything the server needs
#[derive(Debug, Clone)]
pub struct Config {
    pub steam: SteamConfig,
    pub cache_dir: PathBuf,
    pub static_dir: PathBuf,
    pub freshness_secs: i64,
    pub port: u16,
}

impl Config {
    pub fn new(steam: SteamConfig, cache_dir: PathBuf, static_dir: PathBuf, port: u16) -> Self {
        Self {
            steam,
            cache_dir,
            static_dir,
            freshness_secs: FRESHNESS_WINDOW_SECS,
            port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_key_is_trimmed() {
        let key = ApiKey::new("  ABCDEF0123456789\r\n").unwrap();
        assert_eq!(key.as_str(), "ABCDEF0123456789");
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(ApiKey::new(" \n"), Err(BackpackError::Config(_))));
    }

    #[test]
    fn test_key_with_symbols_rejected() {
        assert!(ApiKey::new("abc&steamid=1").is_err());
        assert!(ApiKey::new("abc def").is_err());
    }

    #[test]
    fn test_key_debug_is_redacted() {
        let key = ApiKey::new("SECRET123").unwrap();
        assert!(!format!("{:?}", key).contains("SECRET123"));
    }

    #[test]
    fn test_key_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "XXXXXXXXXXXXX").unwrap();

        let key = ApiKey::from_file(file.path()).unwrap();
        assert_eq!(key.as_str(), "XXXXXXXXXXXXX");
    }

    #[test]
    fn test_missing_key_file() {
        let err = ApiKey::from_file(Path::new("/definitely/not/here.key")).unwrap_err();
        assert!(err.to_string().contains("Failed to read key file"));
    }

    #[test]
    fn test_with_base_url_overrides_both_hosts() {
        let config = SteamConfig::new(ApiKey::new("k").unwrap()).with_base_url("http://127.0.0.1:9999/");
        assert_eq!(config.api_base, "http://127.0.0.1:9999");
        assert_eq!(config.community_base, "http://127.0.0.1:9999");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }
}
