use serde::{Deserialize, Serialize};

use crate::types::error::Error;

/// A role-tagged message in a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role ("system" or "user").
    pub role: String,
    /// Message content.
    pub content: String,
}

impl ChatMessage {
    /// Build a system-role message.
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    /// Build a user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

/// Sampling parameters forwarded to the completion service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionParams {
    /// Maximum number of tokens to generate. Generation past this budget
    /// is cut off and reported as [`FinishReason::Length`].
    pub max_tokens: u32,

    /// Temperature for generation (0.0 to 1.0).
    pub temperature: f32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self { max_tokens: 1000, temperature: 0.7 }
    }
}

impl CompletionParams {
    /// Reject invalid parameters before any network cost is incurred.
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_tokens == 0 {
            return Err(Error::InvalidArgument("max_tokens must be positive".to_string()));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(Error::InvalidArgument(format!(
                "temperature must be between 0.0 and 1.0, got {}",
                self.temperature
            )));
        }
        Ok(())
    }
}

/// Why the completion service stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    /// Generation finished naturally.
    Complete,
    /// Output was cut off by the max_tokens budget. The caller must
    /// surface this as a warning, never silently accept truncated output.
    Length,
    /// Any other service-provided tag; treated as normal completion.
    Other(String),
}

impl FinishReason {
    /// Map a service-provided finish reason tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "stop" => FinishReason::Complete,
            "length" => FinishReason::Length,
            other => FinishReason::Other(other.to_string()),
        }
    }
}

/// One completion response.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResult {
    /// Generated text.
    pub content: String,
    /// Why generation stopped.
    pub finish_reason: FinishReason,
}

/// Configuration for the completion client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Model identifier sent with each request.
    pub model: String,

    /// Base URL of the completion service.
    pub api_endpoint: String,

    /// API key. Required before the first request.
    pub api_key: Option<String>,

    /// Organization ID (if applicable).
    pub org_id: Option<String>,

    /// Request timeout in seconds. A hung call surfaces as a completion
    /// failure instead of stalling the whole batch.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            model: String::from("gpt-3.5-turbo"),
            api_endpoint: String::from("https://api.openai.com"),
            api_key: None,
            org_id: None,
            timeout_secs: 30,
        }
    }
}
