use std::sync::Arc;

use tracing::{debug, warn};

use crate::llm::cache::MemoCache;
use crate::llm::provider::CompletionClient;
use crate::processing::chunking::chunks;
use crate::processing::prompt::PromptBuilder;
use crate::types::config::{Language, Persona};
use crate::types::error::{Error, Warning};
use crate::types::llm::{CompletionParams, FinishReason};

/// Default per-request input limit in characters. Inputs above this are
/// split into chunks before submission.
pub const DEFAULT_INPUT_LIMIT: usize = 10_000;

/// One summarisation request. Created per invocation and immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    /// Text to summarise.
    pub text: String,
    /// Audience profile steering summary complexity.
    pub persona: Persona,
    /// Target language for the summary.
    pub language: Language,
    /// Token budget for each completion call.
    pub max_tokens: u32,
    /// Sampling temperature (0.0 to 1.0).
    pub temperature: f32,
}

impl SummaryRequest {
    /// Reject invalid requests before any network cost is incurred.
    pub fn validate(&self) -> Result<(), Error> {
        CompletionParams { max_tokens: self.max_tokens, temperature: self.temperature }.validate()
    }
}

/// A finished summary with its caller-visible warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOutput {
    /// The trimmed, concatenated summary text.
    pub text: String,
    /// Warnings accumulated while producing the summary.
    pub warnings: Vec<Warning>,
}

/// What to do when a chunk comes back truncated by the token budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncationPolicy {
    /// Emit a [`Warning::TruncatedChunk`] and keep going.
    #[default]
    WarnAndContinue,
    /// Fail the whole request with [`Error::TruncatedOutput`].
    Abort,
}

/// Orchestrates chunk iteration, prompt building, and completion calls.
///
/// Chunks are processed strictly in original left-to-right order;
/// reassembly is concatenation with a single space separator, so order
/// matters. If the completion client fails for any chunk the failure
/// propagates immediately: partial output must not be mistaken for a
/// complete summary, and billing is incurred per chunk.
pub struct Summarizer {
    client: Arc<dyn CompletionClient>,
    builder: PromptBuilder,
    input_limit: usize,
    truncation_policy: TruncationPolicy,
    cache: Option<Arc<MemoCache>>,
}

impl Summarizer {
    /// Create a summarizer with default prompt building, input limit, and
    /// truncation policy, and no cache.
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            builder: PromptBuilder::default(),
            input_limit: DEFAULT_INPUT_LIMIT,
            truncation_policy: TruncationPolicy::default(),
            cache: None,
        }
    }

    /// Replace the prompt builder.
    pub fn with_prompt_builder(mut self, builder: PromptBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Set the input limit in characters.
    pub fn with_input_limit(mut self, input_limit: usize) -> Self {
        self.input_limit = input_limit;
        self
    }

    /// Set the truncation policy.
    pub fn with_truncation_policy(mut self, policy: TruncationPolicy) -> Self {
        self.truncation_policy = policy;
        self
    }

    /// Attach a memoisation cache.
    pub fn with_cache(mut self, cache: Arc<MemoCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Produce a summary for the request.
    pub async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryOutput, Error> {
        request.validate()?;

        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(request).await {
                debug!("identical request served from cache");
                return Ok(hit);
            }
        }

        let mut warnings = Vec::new();
        let char_count = request.text.chars().count();
        if char_count > self.input_limit {
            let chunk_count = char_count.div_ceil(self.input_limit);
            debug!(char_count, chunk_count, "input exceeds limit, chunking");
            warnings.push(Warning::InputChunked { chunk_count });
        }

        let params =
            CompletionParams { max_tokens: request.max_tokens, temperature: request.temperature };

        let mut parts = Vec::new();
        for (chunk_index, chunk) in chunks(&request.text, self.input_limit)?.enumerate() {
            let messages =
                self.builder.build(chunk, request.persona, request.language, request.max_tokens);
            let result = self.client.complete(&messages, &params).await?;

            if result.finish_reason == FinishReason::Length {
                warn!(chunk_index, "chunk output truncated by token budget");
                if self.truncation_policy == TruncationPolicy::Abort {
                    return Err(Error::TruncatedOutput { chunk_index });
                }
                warnings.push(Warning::TruncatedChunk { chunk_index });
            }

            parts.push(result.content);
        }

        let output = SummaryOutput { text: parts.join(" ").trim().to_string(), warnings };

        if let Some(cache) = &self.cache {
            cache.put(request, output.clone()).await;
        }

        Ok(output)
    }
}
