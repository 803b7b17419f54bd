//! Recap run: fetch, summarize, generate, print

use anyhow::{Context, Result};
use recap_engine::generate_summary;
use recap_writer::{GeminiClient, RECAP_FAILED_MESSAGE};
use sleeper_fetcher::{PlayerCache, PlayerDirectory, SleeperClient, WeekSnapshot};
use std::io::Write;
use tracing::{info, warn};

use crate::cli::Cli;
use crate::config::{load_member_info, RecapConfig};
use crate::week::{current_week, prompt_for_week};

const BANNER_WIDTH: usize = 50;

/// Frame the recap the way it is printed to the console
pub fn render_recap(week: u32, recap: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("\n{rule}\n      FANTASY FOOTBALL RECAP: WEEK {week}\n{rule}\n\n{recap}\n\n{rule}")
}

pub fn no_data_message(week: u32) -> String {
    format!("Could not find any matchup data for week {week}.")
}

/// What a fetched week turns into before any recap is requested
#[derive(Debug, Clone, PartialEq)]
pub enum WeekOutcome {
    Summary(String),
    NoData(String),
}

pub fn summarize_week(snapshot: &WeekSnapshot, players: &PlayerDirectory) -> WeekOutcome {
    match generate_summary(
        &snapshot.users,
        &snapshot.rosters,
        &snapshot.matchups,
        players,
        snapshot.week,
    ) {
        Some(summary) => WeekOutcome::Summary(summary),
        None => WeekOutcome::NoData(no_data_message(snapshot.week)),
    }
}

/// Run one recap end to end, writing user-facing output to `out`
pub async fn run<W: Write>(cli: &Cli, config: &RecapConfig, out: &mut W) -> Result<()> {
    let member_info_path =
        cli.member_info.clone().unwrap_or_else(|| config.default_member_info_path());
    let member_info = load_member_info(&member_info_path);

    let sleeper =
        SleeperClient::new(config.sleeper.clone()).context("Failed to create Sleeper client")?;

    let week = match cli.week {
        Some(week) => week,
        None if cli.current_week => {
            let state = sleeper.get_nfl_state().await.context("Failed to fetch NFL state")?;
            info!("Current NFL week is {} ({} {})", state.week, state.season, state.season_type);
            current_week(&state)?
        }
        None => {
            let stdin = std::io::stdin();
            prompt_for_week(&mut stdin.lock(), out)?
        }
    };

    info!("Fetching data from Sleeper...");
    let snapshot = sleeper
        .fetch_week(&config.league_id, week)
        .await
        .with_context(|| format!("Failed to fetch league {} week {}", config.league_id, week))?;
    let players = PlayerCache::new(config.sleeper.player_cache_path())
        .load(&sleeper, cli.refresh_players)
        .await
        .context("Failed to load player directory")?;
    info!("Data fetched successfully!");

    info!("Analyzing matchups and calculating superlatives...");
    let summary = match summarize_week(&snapshot, &players) {
        WeekOutcome::Summary(summary) => summary,
        WeekOutcome::NoData(message) => {
            writeln!(out, "{message}")?;
            return Ok(());
        }
    };

    if cli.summary_only {
        writeln!(out, "{summary}")?;
        return Ok(());
    }

    info!("Sending data to Gemini for the official recap... This may take a moment.");
    let writer =
        GeminiClient::new(config.gemini.clone()).context("Failed to create Gemini client")?;
    let recap = match writer.generate_recap(&summary, member_info.as_deref()).await {
        Ok(recap) => recap,
        Err(e) => {
            warn!("An error occurred while generating the recap: {}", e);
            RECAP_FAILED_MESSAGE.to_string()
        }
    };

    writeln!(out, "{}", render_recap(week, &recap))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use recap_writer::GeminiConfig;
    use sleeper_fetcher::{MatchupRecord, PlayerInfo, SleeperConfig, SleeperRoster, SleeperUser};
    use tempfile::TempDir;

    fn snapshot(week: u32, matchups: Vec<MatchupRecord>) -> WeekSnapshot {
        WeekSnapshot {
            week,
            users: vec![SleeperUser { user_id: "u1".into(), display_name: "Alice".into() }],
            rosters: vec![
                SleeperRoster { roster_id: 1, owner_id: Some("u1".into()) },
                SleeperRoster { roster_id: 2, owner_id: None },
            ],
            matchups,
        }
    }

    fn record(roster_id: u32, points: f64) -> MatchupRecord {
        MatchupRecord {
            roster_id,
            matchup_id: Some(1),
            points,
            players: vec!["p1".to_string()],
            players_points: [("p1".to_string(), points)].into_iter().collect(),
            starters: vec!["p1".to_string()],
        }
    }

    #[test]
    fn test_week_without_matchups_reports_no_data() {
        let outcome = summarize_week(&snapshot(18, Vec::new()), &PlayerDirectory::new());
        assert_eq!(
            outcome,
            WeekOutcome::NoData("Could not find any matchup data for week 18.".to_string())
        );
    }

    #[test]
    fn test_week_with_matchups_is_summarized() {
        let players: PlayerDirectory = [(
            "p1".to_string(),
            PlayerInfo { full_name: Some("Josh Allen".into()), position: Some("QB".into()) },
        )]
        .into_iter()
        .collect();

        let week = snapshot(2, vec![record(1, 110.0), record(2, 90.0)]);

        let outcome = summarize_week(&week, &players);

        match outcome {
            WeekOutcome::Summary(summary) => {
                assert!(summary.starts_with("Week 2 Matchup Summary:\n"));
                assert!(summary
                    .contains("- Alice (110.00) defeated Manager 2 (90.00) by 20.00 points."));
                assert!(summary.contains("- Josh Allen (QB): 110.00 points"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_run_surfaces_fetch_failures() {
        let temp_dir = TempDir::new().unwrap();
        let cli = Cli::try_parse_from(["weekly-recap", "--week", "3", "--summary-only"]).unwrap();
        let config = RecapConfig {
            league_id: "123".to_string(),
            sleeper: SleeperConfig {
                api_base_url: "http://127.0.0.1:1".to_string(),
                timeout_secs: 5,
                data_dir: temp_dir.path().to_path_buf(),
            },
            gemini: GeminiConfig::new("key"),
        };
        let mut out = Vec::new();

        let err = tokio_test::block_on(run(&cli, &config, &mut out)).unwrap_err();

        assert!(err.to_string().contains("Failed to fetch league 123 week 3"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_recap_banner() {
        let rendered = render_recap(4, "What a week.");
        let rule = "=".repeat(50);
        assert_eq!(
            rendered,
            format!(
                "\n{rule}\n      FANTASY FOOTBALL RECAP: WEEK 4\n{rule}\n\nWhat a week.\n\n{rule}"
            )
        );
    }

    #[test]
    fn test_no_data_message() {
        assert_eq!(no_data_message(12), "Could not find any matchup data for week 12.");
    }
}
