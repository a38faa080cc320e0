use serde::{Deserialize, Serialize};

use crate::types::config::{Language, Persona};
use crate::types::llm::ChatMessage;

/// System-level framing identifying the assistant's purpose.
pub const SYSTEM_FRAMING: &str = "You are a helpful assistant for text summarization.";

/// Mapping from a max_tokens budget to a natural-language length
/// descriptor used in the summary instruction.
///
/// The thresholds are configuration, not behaviour: a budget of
/// `bucket_width * n` selects the n-th descriptor, and out-of-range
/// budgets clamp to the last one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBuckets {
    /// Length descriptors, shortest first.
    pub descriptors: Vec<String>,
    /// Width of one bucket in tokens.
    pub bucket_width: u32,
}

impl Default for LengthBuckets {
    fn default() -> Self {
        Self {
            descriptors: vec![
                "extremely short".to_string(),
                "short".to_string(),
                "long".to_string(),
            ],
            bucket_width: 200,
        }
    }
}

impl LengthBuckets {
    /// Descriptor for a token budget, clamped to the last bucket.
    pub fn descriptor(&self, max_tokens: u32) -> &str {
        let Some(last) = self.descriptors.len().checked_sub(1) else {
            return "";
        };
        let index = if self.bucket_width == 0 {
            last
        } else {
            ((max_tokens / self.bucket_width) as usize).min(last)
        };
        &self.descriptors[index]
    }
}

/// Builds the structured instruction sent to the completion service.
///
/// Pure data transformation: no network calls, no retries, deterministic
/// for identical inputs (which is what makes request memoisation sound).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBuilder {
    default_language: Language,
    length_buckets: LengthBuckets,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self { default_language: Language::English, length_buckets: LengthBuckets::default() }
    }
}

impl PromptBuilder {
    /// Build a prompt builder with an explicit default language and
    /// length bucket configuration.
    pub fn new(default_language: Language, length_buckets: LengthBuckets) -> Self {
        Self { default_language, length_buckets }
    }

    /// Build the role-tagged message list for one chunk of text.
    ///
    /// The persona's descriptive clause is embedded verbatim. When the
    /// target language differs from the default, a translation
    /// instruction is appended to the same request rather than issued as
    /// a second roundtrip.
    pub fn build(
        &self,
        text: &str,
        persona: Persona,
        language: Language,
        max_tokens: u32,
    ) -> Vec<ChatMessage> {
        let length = self.length_buckets.descriptor(max_tokens);
        let mut messages = vec![
            ChatMessage::system(SYSTEM_FRAMING),
            ChatMessage::user(format!(
                "Create a {} summary of the following text {}: {}",
                length,
                persona.characteristics(),
                text
            )),
        ];
        if language != self.default_language {
            messages.push(ChatMessage::user(format!("Now translate this into {}", language)));
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_clause_is_embedded_verbatim() {
        let builder = PromptBuilder::default();
        let messages = builder.build("Some text.", Persona::Teenager, Language::English, 100);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, SYSTEM_FRAMING);
        assert!(messages[1].content.contains(Persona::Teenager.characteristics()));
        assert!(messages[1].content.ends_with(": Some text."));
    }

    #[test]
    fn translation_instruction_only_for_non_default_language() {
        let builder = PromptBuilder::default();

        let english = builder.build("Text.", Persona::AdultLayperson, Language::English, 100);
        assert_eq!(english.len(), 2);

        let german = builder.build("Text.", Persona::AdultLayperson, Language::German, 100);
        assert_eq!(german.len(), 3);
        assert_eq!(german[2].content, "Now translate this into German");
    }

    #[test]
    fn length_buckets_follow_the_budget() {
        let buckets = LengthBuckets::default();
        assert_eq!(buckets.descriptor(100), "extremely short");
        assert_eq!(buckets.descriptor(250), "short");
        assert_eq!(buckets.descriptor(450), "long");
    }

    #[test]
    fn out_of_range_budget_clamps_to_last_bucket() {
        let buckets = LengthBuckets::default();
        assert_eq!(buckets.descriptor(600), "long");
        assert_eq!(buckets.descriptor(u32::MAX), "long");
    }

    #[test]
    fn building_is_deterministic() {
        let builder = PromptBuilder::default();
        let a = builder.build("Same text.", Persona::ProfessionalClinician, Language::Spanish, 300);
        let b = builder.build("Same text.", Persona::ProfessionalClinician, Language::Spanish, 300);
        assert_eq!(a, b);
    }
}
