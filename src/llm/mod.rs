//! Completion service integration: the client trait, the OpenAI
//! implementation, and the request memoisation cache.

/// Request memoisation for completed summaries.
pub mod cache;

/// The [`provider::CompletionClient`] trait.
pub mod provider;

/// Completion client implementations.
pub mod providers;

pub use cache::{CacheConfig, CacheMetrics, MemoCache};
pub use provider::CompletionClient;
pub use providers::OpenAIClient;
