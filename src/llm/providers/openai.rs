use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::llm::provider::CompletionClient;
use crate::types::error::Error;
use crate::types::llm::{ChatMessage, ClientConfig, CompletionParams, CompletionResult, FinishReason};

/// OpenAI chat completions response format.
#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIMessage {
    content: Option<String>,
}

/// OpenAI chat completions client.
pub struct OpenAIClient {
    client: Client,
    config: ClientConfig,
}

impl OpenAIClient {
    /// Create a new OpenAI client.
    ///
    /// The request timeout bounds a hung call so it surfaces as a
    /// [`Error::CompletionFailed`] instead of stalling the batch.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::InvalidArgument(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn build_url(&self) -> String {
        format!("{}/v1/chat/completions", self.config.api_endpoint.trim_end_matches('/'))
    }

    fn build_headers(&self) -> Result<reqwest::header::HeaderMap, Error> {
        use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| Error::InvalidArgument("API key not configured".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| Error::InvalidArgument(e.to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(org_id) = &self.config.org_id {
            headers.insert(
                "OpenAI-Organization",
                HeaderValue::from_str(org_id).map_err(|e| Error::InvalidArgument(e.to_string()))?,
            );
        }

        Ok(headers)
    }
}

#[async_trait]
impl CompletionClient for OpenAIClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<CompletionResult, Error> {
        params.validate()?;

        let request_body = json!({
            "model": self.config.model,
            "messages": messages,
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
        });

        // One request, no automatic retry.
        let response = self
            .client
            .post(self.build_url())
            .headers(self.build_headers()?)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::CompletionFailed(format!("{}: {}", status, detail)));
        }

        let parsed: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| Error::CompletionFailed(format!("invalid response: {}", e)))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::CompletionFailed("response contained no choices".to_string()))?;

        let finish_reason = choice
            .finish_reason
            .as_deref()
            .map(FinishReason::from_tag)
            .unwrap_or(FinishReason::Complete);

        debug!(model = %self.config.model, ?finish_reason, "completion received");

        Ok(CompletionResult {
            content: choice.message.content.unwrap_or_default(),
            finish_reason,
        })
    }
}
