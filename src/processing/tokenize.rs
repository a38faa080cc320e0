use std::sync::Arc;

use lindera::dictionary::{load_dictionary_from_kind, DictionaryKind};
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use lindera::tokenizer::Tokenizer;

use crate::types::config::Language;
use crate::types::error::Error;

/// One morphologically segmented unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphToken {
    /// Surface form as it appears in the text.
    pub surface: String,
    /// Pronunciation in kana, when the dictionary provides one.
    pub pronunciation: Option<String>,
}

/// Morphological tokenizer for languages without whitespace word
/// boundaries, backed by the lindera IPADIC dictionary.
///
/// Loading the dictionary is expensive; construct this once at startup
/// and share it via `Arc`. It is read-only after construction and safe
/// for concurrent use.
pub struct MorphologicalTokenizer {
    inner: Tokenizer,
}

impl MorphologicalTokenizer {
    /// Load the dictionary and build the tokenizer.
    pub fn new() -> Result<Self, Error> {
        let dictionary = load_dictionary_from_kind(DictionaryKind::IPADIC)
            .map_err(|e| Error::Tokenizer(e.to_string()))?;
        let segmenter = Segmenter::new(Mode::Normal, dictionary, None);
        Ok(Self { inner: Tokenizer::new(segmenter) })
    }

    /// Segment a text into morphological tokens with pronunciations.
    pub fn tokens(&self, text: &str) -> Result<Vec<MorphToken>, Error> {
        let mut raw = self.inner.tokenize(text).map_err(|e| Error::Tokenizer(e.to_string()))?;
        Ok(raw
            .iter_mut()
            .map(|token| {
                let surface = token.text.to_string();
                let details = token.details();
                // IPADIC detail index 8 is the pronunciation field; "*"
                // marks entries without pronunciation data.
                let pronunciation = details
                    .get(8)
                    .filter(|p| !p.is_empty() && **p != "*")
                    .map(|p| p.to_string());
                MorphToken { surface, pronunciation }
            })
            .collect())
    }

    /// Segment a text into surface forms only.
    pub fn surfaces(&self, text: &str) -> Result<Vec<String>, Error> {
        Ok(self.tokens(text)?.into_iter().map(|t| t.surface).collect())
    }
}

/// Language-sensitive tokenization strategy for the diff engine.
///
/// Selection by language tag is a pure function with no fallback
/// heuristics: whitespace splitting for most languages, morphological
/// segmentation for the rest.
#[derive(Clone)]
pub enum TokenizerStrategy {
    /// Split on literal space characters. Consecutive spaces produce
    /// empty tokens on purpose: re-joining with a single space then
    /// reproduces the input exactly.
    Whitespace,
    /// Segment with the shared morphological tokenizer.
    Morphological(Arc<MorphologicalTokenizer>),
}

impl TokenizerStrategy {
    /// Select the strategy for a language.
    pub fn for_language(language: Language, morphological: &Arc<MorphologicalTokenizer>) -> Self {
        if language.requires_morphological_segmentation() {
            TokenizerStrategy::Morphological(Arc::clone(morphological))
        } else {
            TokenizerStrategy::Whitespace
        }
    }

    /// Tokenize a text.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>, Error> {
        match self {
            TokenizerStrategy::Whitespace => Ok(text.split(' ').map(str::to_string).collect()),
            TokenizerStrategy::Morphological(morphological) => morphological.surfaces(text),
        }
    }

    /// The separator consumed between adjacent tokens. Joining tokens
    /// with it reproduces the text they were split from: a space for
    /// whitespace splitting, nothing for morphological segmentation.
    pub fn separator(&self) -> &'static str {
        match self {
            TokenizerStrategy::Whitespace => " ",
            TokenizerStrategy::Morphological(_) => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_split_preserves_empty_tokens() {
        let tokens = TokenizerStrategy::Whitespace.tokenize("the  cat sat").unwrap();
        assert_eq!(tokens, vec!["the", "", "cat", "sat"]);
        // The quirk exists for round-trip fidelity.
        assert_eq!(tokens.join(" "), "the  cat sat");
    }

    #[test]
    fn whitespace_split_of_empty_string() {
        let tokens = TokenizerStrategy::Whitespace.tokenize("").unwrap();
        assert_eq!(tokens, vec![""]);
    }
}
