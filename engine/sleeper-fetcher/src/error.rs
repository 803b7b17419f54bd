//! Error types for the Sleeper fetcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("Sleeper API error: {endpoint} returned {status}")]
    Api { endpoint: String, status: reqwest::StatusCode },

    #[error("Incomplete data from Sleeper API: {message}")]
    IncompleteData { message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Player cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}
