use async_trait::async_trait;

use crate::types::error::Error;
use crate::types::llm::{ChatMessage, CompletionParams, CompletionResult};

/// Trait for completion service clients.
///
/// This is the sole network dependency of the core. Implementations must
/// issue exactly one request per call and must not retry automatically:
/// billing is incurred per request, so retry is the caller's decision.
/// Failures propagate as [`Error::CompletionFailed`] including upstream
/// status detail, without fabricating partial results.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issue one completion request and return the generated content with
    /// its finish reason.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<CompletionResult, Error>;
}
