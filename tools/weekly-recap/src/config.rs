//! Recap configuration management

use anyhow::{bail, Context, Result};
use recap_writer::GeminiConfig;
use sleeper_fetcher::SleeperConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default name of the league member info file inside the data directory
pub const MEMBER_INFO_FILE: &str = "league_member_info.txt";

/// Everything a recap run needs from the environment
#[derive(Debug, Clone)]
pub struct RecapConfig {
    pub league_id: String,
    pub sleeper: SleeperConfig,
    pub gemini: GeminiConfig,
}

impl RecapConfig {
    /// Load configuration from environment variables (`.env` is loaded by the caller)
    pub fn from_env() -> Result<Self> {
        let league_id = non_empty_var("SLEEPER_LEAGUE_ID");
        let api_key = non_empty_var("GEMINI_API_KEY");
        let league_id = require_credentials(league_id, api_key.as_deref())?;

        let sleeper = SleeperConfig::from_env().context("Failed to load Sleeper configuration")?;
        let gemini = GeminiConfig::from_env().context("Failed to load Gemini configuration")?;

        Ok(Self { league_id, sleeper, gemini })
    }

    /// Apply command-line overrides
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.sleeper.data_dir = dir;
        }
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.sleeper.data_dir
    }

    pub fn default_member_info_path(&self) -> PathBuf {
        self.data_dir().join(MEMBER_INFO_FILE)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn require_credentials(league_id: Option<String>, api_key: Option<&str>) -> Result<String> {
    match (league_id, api_key) {
        (Some(league_id), Some(_)) => Ok(league_id),
        _ => bail!("SLEEPER_LEAGUE_ID and GEMINI_API_KEY must be set in the .env file."),
    }
}

/// Read the league member info file, trimmed. A missing or unreadable file is
/// logged and treated as absent.
pub fn load_member_info(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let trimmed = contents.trim();
            debug!("Loaded league member info from {:?} ({} bytes)", path, trimmed.len());
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Err(e) => {
            warn!("No league member info loaded from {:?}: {}", path, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_credentials_required_together() {
        assert_eq!(require_credentials(Some("123".into()), Some("key")).unwrap(), "123");

        let incomplete = [(None, Some("key")), (Some("123".to_string()), None), (None, None)];
        for (league_id, api_key) in incomplete {
            let err = require_credentials(league_id, api_key).unwrap_err();
            assert_eq!(
                err.to_string(),
                "SLEEPER_LEAGUE_ID and GEMINI_API_KEY must be set in the .env file."
            );
        }
    }

    #[test]
    fn test_member_info_is_trimmed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(MEMBER_INFO_FILE);
        std::fs::write(&path, "\n  Alice runs the league.\n\n").unwrap();

        assert_eq!(load_member_info(&path).as_deref(), Some("Alice runs the league."));
    }

    #[test]
    fn test_missing_or_blank_member_info_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(load_member_info(&temp_dir.path().join("missing.txt")), None);

        let blank = temp_dir.path().join("blank.txt");
        std::fs::write(&blank, "   \n").unwrap();
        assert_eq!(load_member_info(&blank), None);
    }

    #[test]
    fn test_data_dir_override() {
        let config = RecapConfig {
            league_id: "123".to_string(),
            sleeper: SleeperConfig::default(),
            gemini: GeminiConfig::new("key"),
        }
        .with_data_dir(Some(PathBuf::from("/tmp/recap")));

        assert_eq!(
            config.sleeper.player_cache_path(),
            PathBuf::from("/tmp/recap/sleeper_players.json")
        );
        assert_eq!(
            config.default_member_info_path(),
            PathBuf::from("/tmp/recap/league_member_info.txt")
        );
    }
}
