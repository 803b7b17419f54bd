//! Configuration for the Sleeper fetcher

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Public Sleeper API root
pub const DEFAULT_API_BASE_URL: &str = "https://api.sleeper.app/v1";

/// File name of the cached player directory inside the data directory
pub const PLAYER_CACHE_FILE: &str = "sleeper_players.json";

/// Sleeper API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleeperConfig {
    pub api_base_url: String,
    pub timeout_secs: u64,
    /// Directory holding the player directory cache
    pub data_dir: PathBuf,
}

impl Default for SleeperConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: 30,
            data_dir: PathBuf::from("./data"),
        }
    }
}

impl SleeperConfig {
    /// Create config from environment variables, keeping defaults for anything unset
    pub fn from_env() -> Result<Self, crate::SleeperError> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("SLEEPER_API_BASE_URL") {
            config.api_base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(timeout) = std::env::var("SLEEPER_TIMEOUT_SECS") {
            config.timeout_secs =
                timeout.parse::<u64>().map_err(|_| crate::SleeperError::InvalidConfig {
                    message: format!("Invalid SLEEPER_TIMEOUT_SECS: {timeout}"),
                })?;
        }

        if let Ok(data_dir) = std::env::var("RECAP_DATA_DIR") {
            config.data_dir = PathBuf::from(data_dir);
        }

        Ok(config)
    }

    /// Location of the player directory cache file
    pub fn player_cache_path(&self) -> PathBuf {
        self.data_dir.join(PLAYER_CACHE_FILE)
    }
}
