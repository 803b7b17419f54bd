//! Flat-file cache for the Sleeper player directory
//!
//! The `/players/nfl` payload changes rarely and is large, so it is kept on
//! disk and only downloaded when missing or when a refresh is requested.

use crate::models::PlayerDirectory;
use crate::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Remote source of the player directory
#[async_trait]
pub trait PlayerSource: Send + Sync {
    async fn fetch_players(&self) -> Result<PlayerDirectory>;
}

/// Player directory cached as a single JSON file
#[derive(Debug, Clone)]
pub struct PlayerCache {
    path: PathBuf,
}

impl PlayerCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the player directory, downloading it when the cache is missing or
    /// `refresh` is set. A failed download falls back to an existing cache file.
    pub async fn load<S: PlayerSource + ?Sized>(
        &self,
        source: &S,
        refresh: bool,
    ) -> Result<PlayerDirectory> {
        if !refresh && self.exists() {
            info!("Loading player data from local file ({:?})", self.path);
            return self.read().await;
        }

        info!("Fetching fresh player data from Sleeper API...");
        match source.fetch_players().await {
            Ok(players) => {
                self.write(&players).await?;
                info!("Player data saved to {:?}", self.path);
                Ok(players)
            }
            Err(e) if self.exists() => {
                warn!(
                    "Error fetching player data: {}. Falling back to existing local player data.",
                    e
                );
                self.read().await
            }
            Err(e) => Err(e),
        }
    }

    /// Read the cached directory from disk
    pub async fn read(&self) -> Result<PlayerDirectory> {
        let json_content = tokio::fs::read_to_string(&self.path).await?;
        let players: PlayerDirectory = serde_json::from_str(&json_content)?;
        info!("Loaded {} players from file", players.len());
        Ok(players)
    }

    /// Write the directory to disk, creating the data directory if needed
    pub async fn write(&self, players: &PlayerDirectory) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(players)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
