//! Weekly report assembly

use crate::managers::{manager_names, ManagerNames};
use crate::matchups::{pair_matchups, MatchupBlock, ResolvedMatchup};
use crate::superlatives::Superlatives;
use sleeper_fetcher::{MatchupRecord, PlayerDirectory, SleeperRoster, SleeperUser};
use tracing::debug;

/// Resolved blocks and superlatives for one week
#[derive(Debug, Clone, PartialEq)]
pub struct WeekReport {
    pub blocks: Vec<MatchupBlock>,
    pub superlatives: Superlatives,
}

impl WeekReport {
    /// Pair, resolve and summarize the week's matchups; `None` when there are none.
    pub fn build(
        matchups: &[MatchupRecord],
        names: &ManagerNames,
        players: &PlayerDirectory,
    ) -> Option<Self> {
        if matchups.is_empty() {
            return None;
        }

        let blocks: Vec<MatchupBlock> = pair_matchups(matchups)
            .into_iter()
            .map(|pairing| MatchupBlock::resolve(pairing, names, players))
            .collect();
        let superlatives =
            Superlatives::from_games(blocks.iter().filter_map(MatchupBlock::as_game));

        debug!(
            "Resolved {} matchup records into {} blocks ({} games)",
            matchups.len(),
            blocks.len(),
            blocks.iter().filter(|b| b.as_game().is_some()).count()
        );

        Some(Self { blocks, superlatives })
    }

    pub fn games(&self) -> impl Iterator<Item = &ResolvedMatchup> {
        self.blocks.iter().filter_map(MatchupBlock::as_game)
    }

    /// All blocks joined by newlines
    pub fn matchup_details(&self) -> String {
        self.blocks.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    }

    pub fn superlatives_summary(&self) -> String {
        self.superlatives.to_string()
    }
}

/// Matchup details and superlatives text for a week, or `None` for an empty week
pub fn process_matchups(
    matchups: &[MatchupRecord],
    names: &ManagerNames,
    players: &PlayerDirectory,
) -> Option<(String, String)> {
    WeekReport::build(matchups, names, players)
        .map(|report| (report.matchup_details(), report.superlatives_summary()))
}

/// Full weekly summary text handed to the recap writer
pub fn generate_summary(
    users: &[SleeperUser],
    rosters: &[SleeperRoster],
    matchups: &[MatchupRecord],
    players: &PlayerDirectory,
    week: u32,
) -> Option<String> {
    let names = manager_names(users, rosters);
    let (details, superlatives) = process_matchups(matchups, &names, players)?;
    Some(format!("Week {week} Matchup Summary:\n{details}\n{superlatives}"))
}
