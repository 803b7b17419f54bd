//! Configuration for the recap writer

use serde::{Deserialize, Serialize};

/// Gemini REST API root
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for recaps unless `GEMINI_MODEL` says otherwise
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_base_url: String,
    pub model: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

// Keeps the key out of logged configs
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_base_url", &self.api_base_url)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            timeout_secs: 120,
        }
    }

    /// Create config from environment variables. `GEMINI_API_KEY` is required.
    pub fn from_env() -> Result<Self, crate::RecapError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| crate::RecapError::InvalidConfig {
                message: "GEMINI_API_KEY not set".to_string(),
            })?;

        let mut config = Self::new(api_key);

        if let Ok(base_url) = std::env::var("GEMINI_API_BASE_URL") {
            config.api_base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            config.model = model;
        }

        if let Ok(timeout) = std::env::var("GEMINI_TIMEOUT_SECS") {
            config.timeout_secs =
                timeout.parse::<u64>().map_err(|_| crate::RecapError::InvalidConfig {
                    message: format!("Invalid GEMINI_TIMEOUT_SECS: {timeout}"),
                })?;
        }

        Ok(config)
    }

    /// `generateContent` endpoint for the configured model
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base_url.trim_end_matches('/'),
            self.model
        )
    }
}
