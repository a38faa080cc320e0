use std::sync::Arc;

use async_trait::async_trait;

use biosumm::llm::provider::CompletionClient;
use biosumm::types::config::{Language, Persona};
use biosumm::types::error::Error;
use biosumm::types::llm::{ChatMessage, CompletionParams, CompletionResult, FinishReason};
use biosumm::Pipeline;

/// Client that echoes the persona clause it was prompted with, so tests
/// can tell the per-persona results apart.
struct EchoClient;

#[async_trait]
impl CompletionClient for EchoClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _params: &CompletionParams,
    ) -> Result<CompletionResult, Error> {
        Ok(CompletionResult {
            content: messages[1].content.clone(),
            finish_reason: FinishReason::Complete,
        })
    }
}

fn pipeline() -> Pipeline {
    Pipeline::with_client(Arc::new(EchoClient)).expect("pipeline should build")
}

#[tokio::test]
async fn compare_mode_returns_one_summary_per_persona_in_order() {
    let pipeline = pipeline();
    let personas = [Persona::Teenager, Persona::ProfessionalClinician];

    let results = pipeline
        .summarize_for_personas("The drug worked.", &personas, Language::English, 100, 0.5)
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].0, Persona::Teenager);
    assert_eq!(results[1].0, Persona::ProfessionalClinician);
    assert!(results[0].1.text.contains(Persona::Teenager.characteristics()));
    assert!(results[1].1.text.contains(Persona::ProfessionalClinician.characteristics()));
}

#[tokio::test]
async fn paper_set_is_available_at_startup() {
    let pipeline = pipeline();
    let names: Vec<&str> = pipeline.papers().names().collect();
    assert_eq!(names, vec!["Chaccour", "Howard", "Mehra"]);
    for name in names {
        let paper = pipeline.papers().get(name).unwrap();
        assert!(!paper.text.is_empty());
    }
}

#[tokio::test]
async fn comparison_entry_point_selects_the_tokenizer_by_language() {
    let pipeline = pipeline();
    let result = pipeline
        .compare_summaries("the cat sat", "the dog sat", Language::English)
        .unwrap();
    assert_eq!(result.side_a.len(), 3);
    assert_eq!(result.side_b.len(), 3);
}

#[tokio::test]
async fn readability_entry_point_scores_summaries() {
    let pipeline = pipeline();
    let score = pipeline
        .readability("The drug worked well. Patients recovered quickly.", Language::English)
        .unwrap();
    assert!(score.is_finite());
}
