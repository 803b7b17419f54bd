//! # Weekly superlatives
//!
//! League-wide extremes over the week's decided games. Each accumulator starts
//! empty and is seeded by the first game, so there are no sentinel bounds.

use crate::matchups::ResolvedMatchup;
use std::fmt;

/// Current holder of a superlative
#[derive(Debug, Clone, PartialEq)]
pub struct Leader {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Superlatives {
    pub highest_score: Option<Leader>,
    pub lowest_score: Option<Leader>,
    pub biggest_blowout: Option<Leader>,
    pub closest_game: Option<Leader>,
}

/// Replace the leader when `value` strictly beats it; ties keep the earlier holder
fn challenge(
    slot: &mut Option<Leader>,
    value: f64,
    beats: fn(f64, f64) -> bool,
    label: impl FnOnce() -> String,
) {
    let replace = slot.as_ref().map_or(true, |leader| beats(value, leader.value));
    if replace {
        *slot = Some(Leader { label: label(), value });
    }
}

fn above(value: f64, current: f64) -> bool {
    value > current
}

fn below(value: f64, current: f64) -> bool {
    value < current
}

impl Superlatives {
    /// Fold one decided game into the running extremes.
    ///
    /// Scores are checked winner first, then loser, each against the value the
    /// previous check may just have set.
    pub fn record(&mut self, game: &ResolvedMatchup) {
        let (winner, loser) = (game.winner(), game.loser());

        for side in [winner, loser] {
            challenge(&mut self.highest_score, side.points, above, || side.manager.clone());
        }
        for side in [winner, loser] {
            challenge(&mut self.lowest_score, side.points, below, || side.manager.clone());
        }

        let margin = game.margin();
        challenge(&mut self.closest_game, margin, below, || {
            format!("{} vs. {}", winner.manager, loser.manager)
        });
        challenge(&mut self.biggest_blowout, margin, above, || {
            format!("{}'s victory over {}", winner.manager, loser.manager)
        });
    }

    /// Build superlatives from a sequence of games
    pub fn from_games<'a>(games: impl IntoIterator<Item = &'a ResolvedMatchup>) -> Self {
        games.into_iter().fold(Self::default(), |mut acc, game| {
            acc.record(game);
            acc
        })
    }

    pub fn is_empty(&self) -> bool {
        self.highest_score.is_none()
    }
}

impl fmt::Display for Superlatives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\nWeekly Superlatives:\n")?;

        let scores = [("Highest Score", &self.highest_score), ("Lowest Score", &self.lowest_score)];
        for (title, leader) in scores {
            match leader {
                Some(l) => writeln!(f, "- {}: {} ({:.2})", title, l.label, l.value)?,
                None => writeln!(f, "- {title}: n/a")?,
            }
        }

        match &self.biggest_blowout {
            Some(l) => writeln!(f, "- Biggest Blowout ({:.2} points): {}", l.value, l.label)?,
            None => writeln!(f, "- Biggest Blowout: n/a")?,
        }

        match &self.closest_game {
            Some(l) => write!(f, "- Closest Squeaker ({:.2} points): {}", l.value, l.label),
            None => write!(f, "- Closest Squeaker: n/a"),
        }
    }
}
