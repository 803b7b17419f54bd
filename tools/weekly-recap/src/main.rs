//! Sleeper weekly recap generator
//!
//! Fetches a league week from Sleeper, summarizes every matchup and asks
//! Gemini for a narrative recap.

use anyhow::Result;
use clap::Parser;
use tracing::error;

use weekly_recap::{initialize_logging, run, Cli, RecapConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    initialize_logging(cli.log_format, "info")?;

    let config = match RecapConfig::from_env() {
        Ok(config) => config.with_data_dir(cli.data_dir.clone()),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(2);
        }
    };

    let mut stdout = std::io::stdout();
    if let Err(e) = run(&cli, &config, &mut stdout).await {
        error!("Recap failed: {:#}", e);
        eprintln!("\nAn error occurred: {e:#}");
        eprintln!("Please check your LEAGUE_ID, API Key, and network connection.");
        std::process::exit(1);
    }

    Ok(())
}
