/// OpenAI chat completions client.
///
/// Issues one request per call with the configured model, token budget,
/// and temperature, and maps the service's finish reason tags onto
/// [`crate::types::llm::FinishReason`].
pub mod openai;

pub use openai::OpenAIClient;
