use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::error::Error;

/// A named audience profile steering summary complexity.
///
/// The set is closed; unknown tags are rejected at the boundary with
/// [`Error::InvalidArgument`] instead of failing on lookup later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Persona {
    /// A 15-year old reader.
    Teenager,
    /// An adult without biomedical background.
    #[serde(rename = "Adult Layperson")]
    AdultLayperson,
    /// A university student in biomedicine.
    #[serde(rename = "University Student in Biomedicine")]
    UniversityStudent,
    /// A clinician with deep previous knowledge.
    #[serde(rename = "Professional Clinician")]
    ProfessionalClinician,
}

impl Persona {
    /// All personae, in display order.
    pub const ALL: [Persona; 4] = [
        Persona::Teenager,
        Persona::AdultLayperson,
        Persona::UniversityStudent,
        Persona::ProfessionalClinician,
    ];

    /// The descriptive clause embedded verbatim in prompts. Must not be
    /// paraphrased; it is inserted as authored.
    pub fn characteristics(&self) -> &'static str {
        match self {
            Persona::Teenager => {
                "for a 15-year old child, using simple language and avoiding any \
                 technical terms, or complicated words or abbreviations"
            }
            Persona::AdultLayperson => {
                "for an adult layperson, avoiding biomedical terms, but using a \
                 language suitable to adults"
            }
            Persona::UniversityStudent => "for a university student in biomedicine",
            Persona::ProfessionalClinician => {
                "for a professional clinician, making heavy use of technical terms, \
                 complicated language and assuming they already have deep previous knowledge"
            }
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Persona::Teenager => "Teenager",
            Persona::AdultLayperson => "Adult Layperson",
            Persona::UniversityStudent => "University Student in Biomedicine",
            Persona::ProfessionalClinician => "Professional Clinician",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Persona {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Persona::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown persona: {}", s)))
    }
}

/// Target language for the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English (the pipeline default).
    English,
    /// German.
    German,
    /// French.
    French,
    /// Italian.
    Italian,
    /// Spanish.
    Spanish,
    /// Japanese.
    Japanese,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::German,
        Language::French,
        Language::Italian,
        Language::Spanish,
        Language::Japanese,
    ];

    /// Two-letter language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::German => "DE",
            Language::French => "FR",
            Language::Italian => "IT",
            Language::Spanish => "ES",
            Language::Japanese => "JP",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "German",
            Language::French => "French",
            Language::Italian => "Italian",
            Language::Spanish => "Spanish",
            Language::Japanese => "Japanese",
        }
    }

    /// Whether word boundaries require morphological segmentation instead
    /// of whitespace splitting.
    pub fn requires_morphological_segmentation(&self) -> bool {
        matches!(self, Language::Japanese)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.name() == s || l.code() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown language: {}", s)))
    }
}

/// One pre-chosen paper segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// Display label.
    #[serde(rename = "Label")]
    pub label: String,
    /// Full text of the segment.
    #[serde(rename = "Text")]
    pub text: String,
}

/// The fixed paper set, loaded once at process start and immutable for
/// the process lifetime.
#[derive(Debug, Clone)]
pub struct PaperSet {
    papers: BTreeMap<String, Paper>,
}

impl PaperSet {
    /// Load the embedded paper set.
    pub fn load_default() -> Result<Self, Error> {
        Self::from_json(include_str!("../../data/papers.json"))
    }

    /// Parse a paper set from JSON (name -> { Label, Text }).
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let papers: BTreeMap<String, Paper> = serde_json::from_str(json)
            .map_err(|e| Error::InvalidArgument(format!("malformed paper set: {}", e)))?;
        Ok(Self { papers })
    }

    /// Look up a paper by name.
    pub fn get(&self, name: &str) -> Option<&Paper> {
        self.papers.get(name)
    }

    /// Paper names, in deterministic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.papers.keys().map(String::as_str)
    }

    /// Number of papers.
    pub fn len(&self) -> usize {
        self.papers.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_clause_is_authored_text() {
        assert!(Persona::Teenager.characteristics().starts_with("for a 15-year old child"));
        assert!(Persona::ProfessionalClinician
            .characteristics()
            .contains("deep previous knowledge"));
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert!(matches!("Wizard".parse::<Persona>(), Err(Error::InvalidArgument(_))));
        assert!(matches!("Klingon".parse::<Language>(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn language_parses_name_and_code() {
        assert_eq!("Japanese".parse::<Language>().unwrap(), Language::Japanese);
        assert_eq!("DE".parse::<Language>().unwrap(), Language::German);
    }

    #[test]
    fn embedded_paper_set_loads() {
        let papers = PaperSet::load_default().unwrap();
        assert!(!papers.is_empty());
        let mehra = papers.get("Mehra").unwrap();
        assert!(!mehra.label.is_empty());
        assert!(!mehra.text.is_empty());
    }
}
