use std::fmt;
use thiserror::Error;

/// Errors surfaced by the summarisation pipeline.
///
/// Validation errors are rejected at the boundary before any network cost
/// is incurred; completion and domain errors propagate unchanged to the
/// caller of the pipeline entry point.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad caller input: unknown persona/language tag, non-positive
    /// max_tokens, zero chunk size.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Network/transport error or non-success response from the
    /// completion service. Never retried automatically; retry is the
    /// caller's decision.
    #[error("completion request failed: {0}")]
    CompletionFailed(String),

    /// Transport failure while fetching an abstract by identifier. A
    /// missing record is not an error; see
    /// [`crate::sources::pubmed::NOT_FOUND_MESSAGE`].
    #[error("abstract fetch failed: {0}")]
    FetchFailed(String),

    /// A chunk came back truncated and the truncation policy is set to
    /// abort rather than warn.
    #[error("output truncated by token budget at chunk {chunk_index}")]
    TruncatedOutput {
        /// Zero-based index of the truncated chunk.
        chunk_index: usize,
    },

    /// The morphological tokenizer failed to load or segment.
    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    /// Readability computation on degenerate input (zero words or zero
    /// sentences). Reported instead of propagating NaN/infinity.
    #[error("degenerate readability input: {0}")]
    Domain(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::CompletionFailed(format!("request timed out: {}", err))
        } else if err.is_connect() {
            Error::CompletionFailed(format!("connection failed: {}", err))
        } else {
            Error::CompletionFailed(err.to_string())
        }
    }
}

/// Non-fatal annotations attached to an otherwise successful summary.
///
/// Warnings let the caller distinguish "succeeded but possibly
/// incomplete" from "succeeded, complete".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The input exceeded the configured limit and was split before
    /// submission. Informational, not an error.
    InputChunked {
        /// Number of chunks the input was split into.
        chunk_count: usize,
    },

    /// One chunk's completion was cut off by the max_tokens budget.
    /// Emitted once per truncated chunk, not deduplicated.
    TruncatedChunk {
        /// Zero-based index of the truncated chunk.
        chunk_index: usize,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::InputChunked { chunk_count } => {
                write!(f, "input exceeds the limit and was split into {} chunks", chunk_count)
            }
            Warning::TruncatedChunk { chunk_index } => {
                write!(f, "chunk {} was truncated by the token budget", chunk_index)
            }
        }
    }
}
