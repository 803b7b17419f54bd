//! Gemini `generateContent` client

use crate::config::GeminiConfig;
use crate::prompt::build_recap_prompt;
use crate::{RecapError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// Subset of the `generateContent` response the recap reads
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate
    pub fn into_text(self) -> Result<String> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = match self.prompt_feedback {
                Some(feedback) => format!("no candidates (prompt feedback: {feedback})"),
                None => "no candidates".to_string(),
            };
            return Err(RecapError::EmptyResponse { reason });
        };

        let text: String = candidate
            .content
            .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(RecapError::EmptyResponse {
                reason: format!(
                    "candidate had no text (finish reason: {})",
                    candidate.finish_reason.as_deref().unwrap_or("unknown")
                ),
            });
        }
        Ok(text)
    }
}

/// Client for Gemini text generation
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Send a prompt and return the generated text unmodified
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = self.config.generate_url();
        let body = GenerateRequest { contents: [Content { parts: [RequestPart { text: prompt }] }] };
        debug!("Gemini POST {} ({} prompt bytes)", url, prompt.len());

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RecapError::Api { status, message });
        }

        let parsed: GenerateResponse = response.json().await?;
        parsed.into_text()
    }

    /// Write the recap for a weekly summary
    pub async fn generate_recap(
        &self,
        summary: &str,
        league_member_info: Option<&str>,
    ) -> Result<String> {
        let prompt = build_recap_prompt(summary, league_member_info);
        info!("Requesting recap from {}", self.config.model);
        let recap = self.generate(&prompt).await?;
        info!("Received recap ({} characters)", recap.len());
        Ok(recap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateRequest { contents: [Content { parts: [RequestPart { text: "hi" }] }] };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"contents": [{"parts": [{"text": "hi"}]}]})
        );
    }

    #[test]
    fn test_text_parts_are_concatenated() {
        let response = parse(
            r#"{
                "candidates": [
                    {"content": {"role": "model", "parts": [{"text": "Week 3 was "}, {"text": "chaos."}]},
                     "finishReason": "STOP"},
                    {"content": {"parts": [{"text": "ignored"}]}}
                ],
                "usageMetadata": {"totalTokenCount": 42}
            }"#,
        );
        assert_eq!(response.into_text().unwrap(), "Week 3 was chaos.");
    }

    #[test]
    fn test_blocked_prompt_is_an_error() {
        let response = parse(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#);
        match response.into_text() {
            Err(RecapError::EmptyResponse { reason }) => assert!(reason.contains("SAFETY")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_candidate_without_text_is_an_error() {
        let response = parse(r#"{"candidates": [{"finishReason": "MAX_TOKENS"}]}"#);
        match response.into_text() {
            Err(RecapError::EmptyResponse { reason }) => assert!(reason.contains("MAX_TOKENS")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_unreachable_api_is_an_http_error() {
        let mut config = GeminiConfig::new("key");
        config.api_base_url = "http://127.0.0.1:1".to_string();
        config.timeout_secs = 5;
        let client = GeminiClient::new(config).unwrap();

        match tokio_test::block_on(client.generate_recap("Week 1 Matchup Summary:", None)) {
            Err(RecapError::Http(_)) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_client_uses_configured_model() {
        let mut config = GeminiConfig::new("key");
        config.model = "gemini-2.5-pro".to_string();
        let client = GeminiClient::new(config).unwrap();
        assert!(client.config().generate_url().ends_with("/models/gemini-2.5-pro:generateContent"));
    }
}
