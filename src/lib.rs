//! Persona-tailored summarisation of biomedical text.
//!
//! This library takes a biomedical text (pasted, selected from a fixed
//! paper set, or fetched by PubMed identifier), produces summaries
//! tailored to an audience persona and translated to a target language
//! via a completion API, and supports visual comparison of two summaries
//! through a token-level alignment diff plus per-language readability
//! scoring. UI rendering is out of scope; callers consume the
//! [`Pipeline`] entry points and render the output themselves.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Completion service integration: client trait, OpenAI implementation,
/// and request memoisation.
pub mod llm;

/// Text pipeline: chunking, prompts, summarisation, diffing,
/// tokenization, readability.
pub mod processing;

/// External text sources (PubMed efetch).
pub mod sources;

/// Shared types, configuration enums, and errors.
pub mod types;

use std::sync::Arc;

use futures::future::try_join_all;

use crate::llm::cache::{CacheConfig, MemoCache};
use crate::llm::provider::CompletionClient;
use crate::llm::providers::OpenAIClient;
use crate::processing::diff::{compare_summaries, DiffResult};
use crate::processing::readability::ReadabilityScorer;
use crate::processing::summary::{Summarizer, SummaryOutput, SummaryRequest};
use crate::processing::tokenize::{MorphologicalTokenizer, TokenizerStrategy};
use crate::sources::pubmed::{AbstractSource, PubMedClient};
use crate::types::config::{Language, PaperSet, Persona};
use crate::types::error::Error;
use crate::types::llm::ClientConfig;

/// Facade wiring the summarisation pipeline together.
///
/// Holds the only pieces of process-wide state: the read-only
/// morphological tokenizer (built once, shared), the request memoisation
/// cache, and the immutable paper set. Independent summarisation
/// requests are safe to run concurrently.
pub struct Pipeline {
    summarizer: Summarizer,
    scorer: ReadabilityScorer,
    morphological: Arc<MorphologicalTokenizer>,
    papers: PaperSet,
    pubmed: PubMedClient,
}

impl Pipeline {
    /// Build a pipeline backed by the OpenAI completion service.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client: Arc<dyn CompletionClient> = Arc::new(OpenAIClient::new(config)?);
        Self::with_client(client)
    }

    /// Build a pipeline around an arbitrary completion client. Tests use
    /// this to inject scripted clients.
    pub fn with_client(client: Arc<dyn CompletionClient>) -> Result<Self, Error> {
        let morphological = Arc::new(MorphologicalTokenizer::new()?);
        let cache = Arc::new(MemoCache::new(CacheConfig::default()));
        Ok(Self {
            summarizer: Summarizer::new(client).with_cache(cache),
            scorer: ReadabilityScorer::new(Arc::clone(&morphological)),
            morphological,
            papers: PaperSet::load_default()?,
            pubmed: PubMedClient::new()?,
        })
    }

    /// Summarise a text for one persona and language.
    pub async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryOutput, Error> {
        self.summarizer.summarize(request).await
    }

    /// One summary per persona for the same text, produced concurrently.
    /// Results are returned in the order the personas were given.
    pub async fn summarize_for_personas(
        &self,
        text: &str,
        personas: &[Persona],
        language: Language,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<Vec<(Persona, SummaryOutput)>, Error> {
        let requests = personas.iter().map(|&persona| async move {
            let request = SummaryRequest {
                text: text.to_string(),
                persona,
                language,
                max_tokens,
                temperature,
            };
            self.summarizer.summarize(&request).await.map(|output| (persona, output))
        });
        try_join_all(requests).await
    }

    /// Token-level comparison of two summaries in the given language.
    pub fn compare_summaries(&self, a: &str, b: &str, language: Language) -> Result<DiffResult, Error> {
        let tokenizer = TokenizerStrategy::for_language(language, &self.morphological);
        compare_summaries(a, b, &tokenizer)
    }

    /// Readability index of a summary in its declared language.
    pub fn readability(&self, summary: &str, language: Language) -> Result<f64, Error> {
        self.scorer.score(summary, language)
    }

    /// Fetch an abstract by PubMed identifier.
    pub async fn fetch_abstract(&self, pmid: u64) -> Result<String, Error> {
        self.pubmed.fetch_abstract(pmid).await
    }

    /// The fixed set of pre-chosen paper segments.
    pub fn papers(&self) -> &PaperSet {
        &self.papers
    }
}
