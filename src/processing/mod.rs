//! The text pipeline: chunking, prompt building, summarisation
//! orchestration, token-level diffing, tokenizer strategies, and
//! readability scoring.

/// Fixed-size character chunking of oversized inputs.
pub mod chunking;

/// Token-level sequence alignment between two summaries.
pub mod diff;

/// Structured instruction construction for the completion service.
pub mod prompt;

/// Per-language readability indices.
pub mod readability;

/// Chunk iteration and summary reassembly.
pub mod summary;

/// Language-sensitive tokenization strategies.
pub mod tokenize;

pub use chunking::{chunks, Chunks};
pub use diff::{compare_summaries, AlignmentOp, AlignmentSpan, DiffResult};
pub use prompt::{LengthBuckets, PromptBuilder, SYSTEM_FRAMING};
pub use readability::{flesch_reading_ease, ReadabilityScorer};
pub use summary::{
    Summarizer, SummaryOutput, SummaryRequest, TruncationPolicy, DEFAULT_INPUT_LIMIT,
};
pub use tokenize::{MorphToken, MorphologicalTokenizer, TokenizerStrategy};
