use std::sync::Arc;

use crate::processing::tokenize::MorphologicalTokenizer;
use crate::types::config::Language;
use crate::types::error::Error;

/// Per-language Flesch reading ease coefficients and vowel inventory for
/// the syllable heuristic.
#[derive(Debug, Clone, Copy)]
struct FleschWeights {
    base: f64,
    sentence_weight: f64,
    syllable_weight: f64,
    vowels: &'static str,
}

impl FleschWeights {
    fn for_language(language: Language) -> Option<Self> {
        match language {
            Language::English => Some(Self {
                base: 206.835,
                sentence_weight: 1.015,
                syllable_weight: 84.6,
                vowels: "aeiouy",
            }),
            Language::German => Some(Self {
                base: 180.0,
                sentence_weight: 1.0,
                syllable_weight: 58.5,
                vowels: "aeiouyäöü",
            }),
            Language::French => Some(Self {
                base: 207.0,
                sentence_weight: 1.015,
                syllable_weight: 73.6,
                vowels: "aeiouyâàéèêëîïôûù",
            }),
            Language::Italian => Some(Self {
                base: 217.0,
                sentence_weight: 1.3,
                syllable_weight: 60.0,
                vowels: "aeiouàèéìòù",
            }),
            Language::Spanish => Some(Self {
                base: 206.84,
                sentence_weight: 1.02,
                syllable_weight: 60.0,
                vowels: "aeiouáéíóúü",
            }),
            Language::Japanese => None,
        }
    }
}

/// Flesch reading ease for an alphabetic-script language.
///
/// Words are whitespace-delimited, syllables are estimated by counting
/// vowel groups, and sentences by runs of Latin sentence terminators.
/// Zero words or zero sentences is a domain error, not NaN.
pub fn flesch_reading_ease(text: &str, language: Language) -> Result<f64, Error> {
    let weights = FleschWeights::for_language(language).ok_or_else(|| {
        Error::InvalidArgument(format!("no Flesch reading ease weights for {}", language))
    })?;

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Err(Error::Domain("text contains no words".to_string()));
    }
    let sentences = count_sentences(text);
    if sentences == 0 {
        return Err(Error::Domain("text contains no sentences".to_string()));
    }

    let syllables: usize = words.iter().map(|w| count_syllables(w, weights.vowels)).sum();
    let word_count = words.len() as f64;
    let avg_sentence_length = word_count / sentences as f64;
    let avg_syllables_per_word = syllables as f64 / word_count;

    Ok(weights.base
        - weights.sentence_weight * avg_sentence_length
        - weights.syllable_weight * avg_syllables_per_word)
}

/// Number of sentence terminator runs ('.', '!', '?'). An ellipsis or
/// "?!" counts once.
fn count_sentences(text: &str) -> usize {
    let mut sentences = 0;
    let mut in_run = false;
    for c in text.chars() {
        if matches!(c, '.' | '!' | '?') {
            if !in_run {
                sentences += 1;
            }
            in_run = true;
        } else {
            in_run = false;
        }
    }
    sentences
}

/// Vowel-group syllable estimate; every word counts at least one.
fn count_syllables(word: &str, vowels: &str) -> usize {
    let mut syllables = 0;
    let mut previous_was_vowel = false;
    for c in word.to_lowercase().chars() {
        let is_vowel = vowels.contains(c);
        if is_vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = is_vowel;
    }
    syllables.max(1)
}

/// Computes a readability index per language, with a dedicated branch
/// for Japanese where the Flesch syllable and sentence heuristics do not
/// apply.
pub struct ReadabilityScorer {
    morphological: Arc<MorphologicalTokenizer>,
}

impl ReadabilityScorer {
    /// Create a scorer sharing the process-wide morphological tokenizer.
    pub fn new(morphological: Arc<MorphologicalTokenizer>) -> Self {
        Self { morphological }
    }

    /// Readability index for a summary in its declared language.
    pub fn score(&self, text: &str, language: Language) -> Result<f64, Error> {
        if language == Language::Japanese {
            self.score_japanese(text)
        } else {
            flesch_reading_ease(text, language)
        }
    }

    /// Japanese approximation: average pronunciation-unit count per word
    /// (surface character count when pronunciation data is unavailable)
    /// and average word count per sentence, with sentences delimited by
    /// the ideographic full stop.
    fn score_japanese(&self, text: &str) -> Result<f64, Error> {
        let tokens = self.morphological.tokens(text)?;
        let word_count = tokens.len();
        if word_count == 0 {
            return Err(Error::Domain("text contains no words".to_string()));
        }
        let sentence_count = text.chars().filter(|c| *c == '。').count();
        if sentence_count == 0 {
            return Err(Error::Domain("text contains no sentences".to_string()));
        }

        let pronunciation_units: usize = tokens
            .iter()
            .map(|token| {
                token
                    .pronunciation
                    .as_ref()
                    .map(|p| p.chars().count())
                    .unwrap_or_else(|| token.surface.chars().count())
            })
            .sum();

        let average_word_length = pronunciation_units as f64 / word_count as f64;
        let average_sentence_length = word_count as f64 / sentence_count as f64;
        Ok(206.835 - 84.6 * average_word_length - 1.015 * average_sentence_length)
    }
}
