//! Shared data types, configuration enums, and the crate error taxonomy.

/// Persona and language enumerations plus the static paper set.
pub mod config;

/// Error and warning types.
pub mod error;

/// Completion request/response types and client configuration.
pub mod llm;

pub use config::{Language, Paper, PaperSet, Persona};
pub use error::{Error, Warning};
pub use llm::{ChatMessage, ClientConfig, CompletionParams, CompletionResult, FinishReason};
