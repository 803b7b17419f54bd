//! # Matchup pairing
//!
//! Groups the week's matchup records by `matchup_id` and resolves each group
//! into either a decided game or a bye notice, keeping the input order.

use crate::managers::{manager_label, ManagerNames};
use sleeper_fetcher::{MatchupRecord, PlayerDirectory};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// Placeholder name for starters missing from the player directory
pub const UNKNOWN_PLAYER: &str = "Unknown Player";

/// Placeholder position for starters without one
pub const UNKNOWN_POSITION: &str = "N/A";

/// Records grouped into games, in input order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pairing<'a> {
    /// A record with no opponent this week
    Bye(&'a MatchupRecord),
    /// Two sides of one game, lower roster id first
    Game(&'a MatchupRecord, &'a MatchupRecord),
}

/// Pair records sharing a `matchup_id`.
///
/// A game is emitted at the position of its lowest roster id side. Records
/// with a null `matchup_id`, or alone in their group, become byes. Groups with
/// more than two sides pair the two lowest roster ids and turn the rest into
/// byes.
pub fn pair_matchups(matchups: &[MatchupRecord]) -> Vec<Pairing<'_>> {
    let mut groups: HashMap<u32, Vec<usize>> = HashMap::new();
    for (idx, record) in matchups.iter().enumerate() {
        if let Some(matchup_id) = record.matchup_id {
            groups.entry(matchup_id).or_default().push(idx);
        }
    }
    for members in groups.values_mut() {
        members.sort_by_key(|&idx| (matchups[idx].roster_id, idx));
    }

    let mut pairings = Vec::with_capacity(matchups.len());
    for (idx, record) in matchups.iter().enumerate() {
        let members = record.matchup_id.and_then(|id| groups.get(&id)).map(Vec::as_slice);
        match members {
            Some([first, second, extra @ ..]) => {
                if idx == *first {
                    pairings.push(Pairing::Game(&matchups[*first], &matchups[*second]));
                } else if extra.contains(&idx) {
                    warn!(
                        "Matchup {:?} has {} sides; roster {} left unpaired",
                        record.matchup_id,
                        extra.len() + 2,
                        record.roster_id
                    );
                    pairings.push(Pairing::Bye(record));
                }
            }
            _ => pairings.push(Pairing::Bye(record)),
        }
    }
    pairings
}

/// One starter's line in a roster breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct StarterLine {
    pub name: String,
    pub position: String,
    pub points: f64,
}

/// A manager's side of a decided game
#[derive(Debug, Clone, PartialEq)]
pub struct SideResult {
    pub roster_id: u32,
    pub manager: String,
    pub points: f64,
    pub starters: Vec<StarterLine>,
}

impl SideResult {
    /// Resolve a record's manager and starters; bench players are excluded
    pub fn resolve(
        record: &MatchupRecord,
        names: &ManagerNames,
        players: &PlayerDirectory,
    ) -> Self {
        let starters = record
            .starters
            .iter()
            .map(|player_id| {
                let (name, position) = match players.get(player_id) {
                    Some(info) => (
                        info.full_name.clone().unwrap_or_else(|| player_id.clone()),
                        info.position.clone().unwrap_or_else(|| UNKNOWN_POSITION.to_string()),
                    ),
                    None => (UNKNOWN_PLAYER.to_string(), UNKNOWN_POSITION.to_string()),
                };
                StarterLine { name, position, points: record.player_points(player_id) }
            })
            .collect();

        Self {
            roster_id: record.roster_id,
            manager: manager_label(names, record.roster_id),
            points: record.points,
            starters,
        }
    }
}

/// A game with both sides resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMatchup {
    /// Lower roster id
    pub first: SideResult,
    /// Higher roster id
    pub second: SideResult,
}

impl ResolvedMatchup {
    fn first_wins(&self) -> bool {
        self.first.points > self.second.points
    }

    /// The first side only wins on strictly more points; a tie goes to the second side.
    pub fn winner(&self) -> &SideResult {
        if self.first_wins() {
            &self.first
        } else {
            &self.second
        }
    }

    pub fn loser(&self) -> &SideResult {
        if self.first_wins() {
            &self.second
        } else {
            &self.first
        }
    }

    pub fn margin(&self) -> f64 {
        (self.winner().points - self.loser().points).abs()
    }

    pub fn is_tie(&self) -> bool {
        self.first.points == self.second.points
    }
}

impl fmt::Display for ResolvedMatchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (winner, loser) = (self.winner(), self.loser());
        write!(
            f,
            "- {} ({:.2}) defeated {} ({:.2}) by {:.2} points.",
            winner.manager,
            winner.points,
            loser.manager,
            loser.points,
            self.margin()
        )?;
        for side in [&self.first, &self.second] {
            write!(f, "\n  {}'s Roster:", side.manager)?;
            for starter in &side.starters {
                write!(
                    f,
                    "\n    - {} ({}): {:.2} points",
                    starter.name, starter.position, starter.points
                )?;
            }
        }
        writeln!(f)
    }
}

/// One block of the weekly matchup summary
#[derive(Debug, Clone, PartialEq)]
pub enum MatchupBlock {
    Bye { roster_id: u32, manager: String },
    Game(ResolvedMatchup),
}

impl MatchupBlock {
    pub fn resolve(pairing: Pairing<'_>, names: &ManagerNames, players: &PlayerDirectory) -> Self {
        match pairing {
            Pairing::Bye(record) => MatchupBlock::Bye {
                roster_id: record.roster_id,
                manager: manager_label(names, record.roster_id),
            },
            Pairing::Game(first, second) => MatchupBlock::Game(ResolvedMatchup {
                first: SideResult::resolve(first, names, players),
                second: SideResult::resolve(second, names, players),
            }),
        }
    }

    pub fn as_game(&self) -> Option<&ResolvedMatchup> {
        match self {
            MatchupBlock::Game(game) => Some(game),
            MatchupBlock::Bye { .. } => None,
        }
    }
}

impl fmt::Display for MatchupBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchupBlock::Bye { manager, .. } => {
                write!(f, "- {manager} had a bye week or their opponent could not be found.")
            }
            MatchupBlock::Game(game) => fmt::Display::fmt(game, f),
        }
    }
}
