//! Section header detection.
//!
//! A line is a header when, for some synonym in table order:
//! - the whole line equals the synonym (either case form),
//! - the line starts with the synonym followed by `:` or a space, or
//! - the line is shorter than [`SHORT_LINE_LENGTH`] and contains the synonym
//!   as a whole word.
//!
//! The last rule catches decorated headers such as `=== Experience ===`. It
//! also fires on short narrative lines that happen to contain a section word
//! ("Led project X"); that imprecision is accepted.

use crate::error::ConfigError;
use crate::types::Section;
use crate::vocabulary::SectionSynonym;
use regex::{Regex, RegexBuilder};

/// Lines at least this long are never headers by whole-word containment
pub const SHORT_LINE_LENGTH: usize = 50;

/// Compiled size cap for one synonym's whole-word pattern
const SYNONYM_SIZE_LIMIT: usize = 1 << 20;

#[derive(Debug, Clone)]
struct CompiledSynonym {
    phrase: String,
    upper: String,
    section: Section,
    whole_word: Regex,
}

/// Maps header lines to canonical sections using an injected synonym table
#[derive(Debug, Clone)]
pub struct SectionClassifier {
    synonyms: Vec<CompiledSynonym>,
}

impl SectionClassifier {
    /// Build a classifier; table order is match precedence
    ///
    /// Fails when a phrase cannot be compiled, e.g. because it is too large.
    pub fn new(synonyms: &[SectionSynonym]) -> Result<Self, ConfigError> {
        let synonyms = synonyms
            .iter()
            .enumerate()
            .filter(|(_, synonym)| !synonym.phrase.trim().is_empty())
            .map(|(position, synonym)| {
                let phrase = synonym.phrase.trim().to_lowercase();
                let whole_word =
                    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(&phrase)))
                        .case_insensitive(true)
                        .size_limit(SYNONYM_SIZE_LIMIT)
                        .build()
                        .map_err(|err| ConfigError::InvalidValue {
                            key: format!("vocabulary.sections[{}].phrase", position),
                            reason: err.to_string(),
                        })?;

                Ok(CompiledSynonym {
                    upper: phrase.to_uppercase(),
                    phrase,
                    section: synonym.section,
                    whole_word,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self { synonyms })
    }

    /// Canonical section for a header line, or `None` for body text
    pub fn classify(&self, line: &str) -> Option<Section> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let lower = trimmed.to_lowercase();
        let is_short = trimmed.chars().count() < SHORT_LINE_LENGTH;

        self.synonyms
            .iter()
            .find(|synonym| {
                lower == synonym.phrase
                    || trimmed == synonym.upper
                    || lower.starts_with(&format!("{}:", synonym.phrase))
                    || lower.starts_with(&format!("{} ", synonym.phrase))
                    || (is_short && synonym.whole_word.is_match(trimmed))
            })
            .map(|synonym| synonym.section)
    }

    pub fn is_header(&self, line: &str) -> bool {
        self.classify(line).is_some()
    }

    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }
}

impl Default for SectionClassifier {
    fn default() -> Self {
        Self::new(&crate::vocabulary::default_section_synonyms())
            .expect("built-in section synonyms compile")
    }
}
