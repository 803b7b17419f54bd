//! Command-line arguments

use crate::logging::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "weekly-recap")]
#[command(about = "Generate a fantasy football recap for one week of a Sleeper league")]
#[command(version)]
pub struct Cli {
    /// Week to recap (prompted for when omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub week: Option<u32>,

    /// Recap the current NFL week as reported by Sleeper
    #[arg(long, conflicts_with = "week")]
    pub current_week: bool,

    /// Download the player directory even if a cached copy exists
    #[arg(long)]
    pub refresh_players: bool,

    /// Directory holding the player cache and league member info (overrides RECAP_DATA_DIR)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// League member info file included in the prompt
    #[arg(long)]
    pub member_info: Option<PathBuf>,

    /// Print the weekly summary and skip recap generation
    #[arg(long)]
    pub summary_only: bool,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["weekly-recap"]).unwrap();
        assert_eq!(cli.week, None);
        assert!(!cli.current_week);
        assert!(!cli.refresh_players);
        assert!(!cli.summary_only);
        assert_eq!(cli.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "weekly-recap",
            "--week",
            "9",
            "--refresh-players",
            "--data-dir",
            "/srv/recap",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.week, Some(9));
        assert!(cli.refresh_players);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/srv/recap")));
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_week_conflicts_with_current_week() {
        assert!(Cli::try_parse_from(["weekly-recap", "--week", "3", "--current-week"]).is_err());
        assert!(Cli::try_parse_from(["weekly-recap", "--week", "0"]).is_err());
    }
}
