//! Whole-document field extraction.
//!
//! Every field is looked up independently. A field that is not found is
//! `None` and never blocks the others.

use crate::patterns::PatternLibrary;
use crate::types::StructuredFields;
use std::collections::HashSet;

/// The name must appear within this many non-blank lines from the top
const NAME_SCAN_LINES: usize = 5;

/// Words that mark a contact-header line rather than a person's name
const NAME_STOP_WORDS: &[&str] = &[
    "email", "phone", "linkedin", "location", "address", "resume", "cv",
];

#[derive(Debug, Clone)]
struct Skill {
    display: String,
    lower: String,
}

/// Extracts [`StructuredFields`] using an injected skills vocabulary
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    patterns: &'static PatternLibrary,
    skills: Vec<Skill>,
    max_skills: usize,
}

impl FieldExtractor {
    /// Skills are reported in vocabulary order; duplicates (ignoring case) are dropped
    pub fn new(skills: &[String], max_skills: usize) -> Self {
        let mut seen = HashSet::new();
        let skills = skills
            .iter()
            .map(|skill| skill.trim())
            .filter(|skill| !skill.is_empty())
            .filter(|skill| seen.insert(skill.to_lowercase()))
            .map(|skill| Skill {
                display: skill.to_string(),
                lower: skill.to_lowercase(),
            })
            .collect();

        Self {
            patterns: PatternLibrary::shared(),
            skills,
            max_skills,
        }
    }

    pub fn extract(&self, text: &str) -> StructuredFields {
        let fields = StructuredFields {
            name: self.name(text),
            email: self.patterns.email(text),
            phone: self.patterns.phone(text),
            linkedin: self.patterns.linkedin(text),
            location: self.patterns.location(text),
            title: self.patterns.title(text),
            skills: self.skills(text),
            experience_years: self.patterns.experience_years(text),
        };

        tracing::debug!(
            name = fields.name.is_some(),
            email = fields.email.is_some(),
            phone = fields.phone.is_some(),
            skills = fields.skills.len(),
            "extracted fields"
        );

        fields
    }

    /// Candidate name from the top of the document
    ///
    /// Prefers a line of 2-4 capitalized words; otherwise takes the first
    /// non-blank line when it is short and not an email address.
    pub fn name(&self, text: &str) -> Option<String> {
        let top: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(NAME_SCAN_LINES)
            .collect();
        let first = *top.first()?;

        if let Some(name) = top
            .iter()
            .find(|line| self.patterns.is_name_line(line) && !has_stop_word(line))
        {
            return Some(name.to_string());
        }

        let len = first.chars().count();
        if len > 2 && len < 50 && !first.contains('@') {
            Some(first.to_string())
        } else {
            None
        }
    }

    /// Vocabulary skills contained anywhere in the text, case-insensitively
    pub fn skills(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.skills
            .iter()
            .filter(|skill| lower.contains(&skill.lower))
            .take(self.max_skills)
            .map(|skill| skill.display.clone())
            .collect()
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new(
            &crate::vocabulary::default_skills(),
            crate::vocabulary::DEFAULT_MAX_SKILLS,
        )
    }
}

fn has_stop_word(line: &str) -> bool {
    line.split_whitespace()
        .map(|word| word.to_lowercase())
        .any(|word| NAME_STOP_WORDS.contains(&word.as_str()))
}
