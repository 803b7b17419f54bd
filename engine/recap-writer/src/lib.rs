//! Recap Writer - Narrative recaps from weekly summaries
//!
//! Wraps a weekly matchup summary in the commentator prompt and sends it to
//! Gemini's `generateContent` endpoint.

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::RecapError;
pub use prompt::build_recap_prompt;

/// Shown in place of the recap when generation fails
pub const RECAP_FAILED_MESSAGE: &str = "Failed to generate recap due to an API error.";

// Result type alias
pub type Result<T> = std::result::Result<T, RecapError>;
