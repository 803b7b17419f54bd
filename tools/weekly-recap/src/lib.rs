//! Weekly Recap
//!
//! Command-line wiring for the recap pipeline: environment and flags, week
//! selection, Sleeper fetch, summary generation and the Gemini recap.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod week;

pub use app::run;
pub use cli::Cli;
pub use config::RecapConfig;
pub use logging::{initialize_logging, LogFormat};
