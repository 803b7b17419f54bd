//! # Recap Engine
//!
//! Turns a week of Sleeper matchup records into the text summary a recap is
//! written from: one block per game (with each side's starters) or bye, plus
//! league-wide superlatives.
//!
//! The engine does no I/O. Callers fetch users, rosters, matchups and the
//! player directory first (see `sleeper-fetcher`) and pass them in.

pub mod managers;
pub mod matchups;
pub mod report;
pub mod superlatives;


pub use managers::{manager_label, manager_names, ManagerNames};
pub use matchups::{
    pair_matchups, MatchupBlock, Pairing, ResolvedMatchup, SideResult, StarterLine,
};
pub use report::{generate_summary, process_matchups, WeekReport};
pub use superlatives::{Leader, Superlatives};
