//! Tests that exercise the morphological tokenizer. Kept separate
//! because constructing the tokenizer loads the full dictionary.

use std::sync::Arc;

use biosumm::processing::diff::compare_summaries;
use biosumm::processing::readability::ReadabilityScorer;
use biosumm::processing::tokenize::{MorphologicalTokenizer, TokenizerStrategy};
use biosumm::types::config::Language;
use biosumm::types::error::Error;

fn tokenizer() -> Arc<MorphologicalTokenizer> {
    Arc::new(MorphologicalTokenizer::new().expect("dictionary should load"))
}

#[test]
fn japanese_text_segments_into_multiple_tokens() {
    let morphological = tokenizer();
    let surfaces = morphological.surfaces("患者は治療によく反応しました。").unwrap();
    assert!(surfaces.len() > 3);
    assert_eq!(surfaces.concat(), "患者は治療によく反応しました。");
}

#[test]
fn strategy_selection_is_driven_by_the_language_tag() {
    let morphological = tokenizer();
    assert!(matches!(
        TokenizerStrategy::for_language(Language::Japanese, &morphological),
        TokenizerStrategy::Morphological(_)
    ));
    assert!(matches!(
        TokenizerStrategy::for_language(Language::English, &morphological),
        TokenizerStrategy::Whitespace
    ));
}

#[test]
fn japanese_diff_marks_a_changed_word() {
    let morphological = tokenizer();
    let strategy = TokenizerStrategy::for_language(Language::Japanese, &morphological);
    let result = compare_summaries("猫は座った。", "犬は座った。", &strategy).unwrap();

    assert!(!result.side_a.is_empty());
    assert!(result.side_a.iter().any(|s| s.style.is_some()));
    assert!(result.side_b.iter().any(|s| s.style.is_some()));
}

#[test]
fn japanese_spans_reconstruct_both_inputs_without_inserted_spaces() {
    let morphological = tokenizer();
    let strategy = TokenizerStrategy::for_language(Language::Japanese, &morphological);
    let a = "猫は座った。";
    let b = "犬は座った。";
    let result = compare_summaries(a, b, &strategy).unwrap();

    let rebuilt_a: String = result.side_a.iter().map(|s| s.text.as_str()).collect();
    let rebuilt_b: String = result.side_b.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(rebuilt_a, a);
    assert_eq!(rebuilt_b, b);
}

#[test]
fn japanese_readability_is_finite() {
    let scorer = ReadabilityScorer::new(tokenizer());
    let score = scorer.score("患者は治療によく反応しました。症状は一週間で消えました。", Language::Japanese).unwrap();
    assert!(score.is_finite());
}

#[test]
fn japanese_text_without_full_stop_is_a_domain_error() {
    let scorer = ReadabilityScorer::new(tokenizer());
    assert!(matches!(
        scorer.score("句点のない文章", Language::Japanese),
        Err(Error::Domain(_))
    ));
}
