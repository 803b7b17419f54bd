//! Sleeper API integration

use crate::cache::PlayerSource;
use crate::config::SleeperConfig;
use crate::models::{
    MatchupRecord, NflState, PlayerDirectory, SleeperRoster, SleeperUser, WeekSnapshot,
};
use crate::{Result, SleeperError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Sleeper API client
#[derive(Debug, Clone)]
pub struct SleeperClient {
    config: SleeperConfig,
    client: reqwest::Client,
}

impl SleeperClient {
    /// Create a new Sleeper API client
    pub fn new(config: SleeperConfig) -> Result<Self> {
        let client =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &SleeperConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_base_url.trim_end_matches('/'), path)
    }

    /// Sleeper answers unknown leagues and weeks with a literal `null`, hence the `Option`
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = self.endpoint(path);
        debug!("Sleeper GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SleeperError::Api { endpoint: path.to_string(), status });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Get all users in a league
    pub async fn get_league_users(&self, league_id: &str) -> Result<Vec<SleeperUser>> {
        Ok(self.get_json(&format!("league/{league_id}/users")).await?.unwrap_or_default())
    }

    /// Get all rosters in a league
    pub async fn get_league_rosters(&self, league_id: &str) -> Result<Vec<SleeperRoster>> {
        Ok(self.get_json(&format!("league/{league_id}/rosters")).await?.unwrap_or_default())
    }

    /// Get all matchup records for a week
    pub async fn get_matchups(&self, league_id: &str, week: u32) -> Result<Vec<MatchupRecord>> {
        let matchups = self.get_json(&format!("league/{league_id}/matchups/{week}")).await?;
        Ok(matchups.unwrap_or_default())
    }

    /// Get the full NFL player directory (several megabytes; cache it)
    pub async fn get_players(&self) -> Result<PlayerDirectory> {
        let players: PlayerDirectory =
            self.get_json("players/nfl").await?.unwrap_or_default();
        info!("Fetched {} players from Sleeper", players.len());
        Ok(players)
    }

    /// Get current NFL state
    pub async fn get_nfl_state(&self) -> Result<NflState> {
        self.get_json("state/nfl").await?.ok_or_else(|| SleeperError::IncompleteData {
            message: "state/nfl returned null".to_string(),
        })
    }

    /// Fetch users, rosters and matchups for a week.
    ///
    /// Fails when the league has no users or rosters. An empty matchup list is
    /// returned as-is; it means the week has no games.
    pub async fn fetch_week(&self, league_id: &str, week: u32) -> Result<WeekSnapshot> {
        let users = self.get_league_users(league_id).await?;
        let rosters = self.get_league_rosters(league_id).await?;
        let matchups = self.get_matchups(league_id, week).await?;

        info!(
            "Fetched league {}: {} users, {} rosters, {} matchup records for week {}",
            league_id,
            users.len(),
            rosters.len(),
            matchups.len(),
            week
        );

        let snapshot = WeekSnapshot { week, users, rosters, matchups };
        ensure_complete(&snapshot)?;
        Ok(snapshot)
    }
}

#[async_trait]
impl PlayerSource for SleeperClient {
    async fn fetch_players(&self) -> Result<PlayerDirectory> {
        self.get_players().await
    }
}

fn ensure_complete(snapshot: &WeekSnapshot) -> Result<()> {
    let missing: Vec<&str> = [
        ("users", snapshot.users.is_empty()),
        ("rosters", snapshot.rosters.is_empty()),
    ]
    .into_iter()
    .filter_map(|(name, empty)| empty.then_some(name))
    .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(SleeperError::IncompleteData {
        message: format!("no {} returned for league", missing.join(", ")),
    })
}
