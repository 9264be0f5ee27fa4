//! TF2 Backpack - Steam inventory cache server
//!
//! Serves `/backpack/{handle}` and the compiled frontend.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tf2_backpack::{ApiKey, BackpackService, CacheStore, Config, FileStore, SteamClient, SteamConfig};

/// TF2 backpack server - caches Steam inventories, profiles and playtime
#[derive(Parser, Debug)]
#[command(name = "tf2_backpack")]
#[command(version, about, long_about = None)]
struct Args {
    /// File containing the Steam Web API key
    #[arg(short, long, default_value = "steam_api.key")]
    key_file: PathBuf,

    /// Directory for cached backpacks (one JSON file per user)
    #[arg(short, long, default_value = "cache")]
    cache_dir: PathBuf,

    /// Directory with the compiled frontend
    #[arg(long, default_value = "svelte-frontend/public")]
    static_dir: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// Timeout for Steam requests in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Seconds before a cached backpack is refreshed
    #[arg(long, default_value_t = 86_400)]
    freshness_secs: i64,
}

impl Args {
    /// Read the key file and assemble the configuration
    fn into_config(self) -> tf2_backpack::Result<Config> {
        let api_key = ApiKey::from_file(&self.key_file)?;
        let steam = SteamConfig::new(api_key).with_timeout(Duration::from_secs(self.timeout_secs));

        let mut config = Config::new(steam, self.cache_dir, self.static_dir, self.port);
        config.freshness_secs = self.freshness_secs;
        Ok(config)
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Starting tf2_backpack...");
    log::info!("Key file: {}", args.key_file.display());

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let store = match FileStore::new(&config.cache_dir) {
        Ok(store) => store,
        Err(e) => {
            log::error!(
                "Failed to create cache directory {}: {}",
                config.cache_dir.display(),
                e
            );
            std::process::exit(1);
        }
    };

    let client = match SteamClient::new(&config.steam) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let cache = CacheStore::with_freshness(Box::new(store), config.freshness_secs);
    let service = Arc::new(BackpackService::new(client, cache));

    if let Err(e) = tf2_backpack::web::serve(service, &config.static_dir, config.port).await {
        log::error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
