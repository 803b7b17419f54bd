//! Sleeper API response models
//!
//! Only the fields the recap needs are modelled; serde ignores the rest.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Player directory keyed by Sleeper player id
pub type PlayerDirectory = HashMap<String, PlayerInfo>;

/// Sleeper league user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleeperUser {
    pub user_id: String,
    pub display_name: String,
}

/// Sleeper league roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleeperRoster {
    pub roster_id: u32,
    /// Null for orphaned rosters
    #[serde(default)]
    pub owner_id: Option<String>,
}

/// One side of a weekly matchup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupRecord {
    pub roster_id: u32,
    /// Null when the roster has no scheduled opponent
    #[serde(default)]
    pub matchup_id: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players_points: HashMap<String, f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub starters: Vec<String>,
}

/// Player directory entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerInfo {
    /// Absent for team defenses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// NFL state response
#[derive(Debug, Clone, Deserialize)]
pub struct NflState {
    pub week: u32,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub season_type: String,
}

/// Users, rosters and matchups for one league week
#[derive(Debug, Clone)]
pub struct WeekSnapshot {
    pub week: u32,
    pub users: Vec<SleeperUser>,
    pub rosters: Vec<SleeperRoster>,
    pub matchups: Vec<MatchupRecord>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl MatchupRecord {
    /// Points scored by a player this week, 0 when Sleeper has no entry
    pub fn player_points(&self, player_id: &str) -> f64 {
        self.players_points.get(player_id).copied().unwrap_or(0.0)
    }
}
