//! Sleeper Fetcher - League data from the Sleeper fantasy API
//!
//! This crate fetches league users, rosters and weekly matchups from the
//! Sleeper REST API and keeps the NFL player directory in a local cache file.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use cache::{PlayerCache, PlayerSource};
pub use client::SleeperClient;
pub use config::SleeperConfig;
pub use error::SleeperError;
pub use models::{
    MatchupRecord, NflState, PlayerDirectory, PlayerInfo, SleeperRoster, SleeperUser,
    WeekSnapshot,
};

// Result type alias
pub type Result<T> = std::result::Result<T, SleeperError>;
