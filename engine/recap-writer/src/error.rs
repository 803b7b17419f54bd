//! Error types for the recap writer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecapError {
    #[error("Gemini API error: {status} - {message}")]
    Api { status: reqwest::StatusCode, message: String },

    #[error("Gemini returned no recap text: {reason}")]
    EmptyResponse { reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}
