//! Employer / organization patterns for a single chunk.

use super::{NamedPattern, compile};
use regex::Regex;

const SUFFIX: &str = "Inc|LLC|Corp|Ltd|Company|Technologies|Systems|Solutions|Group";

/// Words that mark an education entry rather than an employer
const EDUCATION_WORDS: &[&str] = &["university", "college", "school"];

/// Only the top of a chunk names the employer
const SCAN_LINES: usize = 3;

const MIN_LEN: usize = 3;
const MAX_LEN: usize = 50;

/// Ordered organization patterns. Group 1 of each pattern is the candidate.
#[derive(Debug, Clone)]
pub struct OrganizationPatterns {
    patterns: Vec<NamedPattern>,
    trailing_connector: Regex,
}

impl OrganizationPatterns {
    pub fn new() -> Self {
        // Words start upper-case (or with a digit after the first word);
        // "&", "of" and "and" may join them: "Bank of America", "Smith & Sons".
        let phrase = r"[A-Z][\w&.'\-]*(?:[ \t]+(?:[A-Z0-9][\w&.'\-]*|&|(?:of|and)\b))*";

        let patterns = vec![
            NamedPattern::new(
                "preposition",
                &format!(r"(?:\b(?:at|for|with)|@|(?i:company|organization):)[ \t]+({phrase})"),
            ),
            NamedPattern::new(
                "whole_line",
                &format!(
                    r"^[ \t]*({phrase}(?:[ \t]*,?[ \t]*(?:{SUFFIX})\.?)?)[ \t]*$"
                ),
            ),
            NamedPattern::new(
                "corporate_suffix",
                &format!(r"\b({phrase}[ \t]*,?[ \t]*(?:{SUFFIX})\b\.?)"),
            ),
            NamedPattern::new("first_phrase", &format!(r"\b({phrase})")),
        ];

        Self {
            patterns,
            trailing_connector: compile(r"(?:[ \t]+(?:&|of|and))+$"),
        }
    }

    /// First acceptable candidate: patterns in order, each over the first lines
    pub fn extract(&self, text: &str) -> Option<String> {
        let lines: Vec<&str> = text.lines().take(SCAN_LINES).collect();

        for pattern in &self.patterns {
            for line in &lines {
                let Some(candidate) = pattern.regex.captures(line).and_then(|caps| caps.get(1))
                else {
                    continue;
                };
                let candidate = self.clean(candidate.as_str());
                if is_acceptable(&candidate) {
                    tracing::trace!(pattern = pattern.name, %candidate, "matched organization");
                    return Some(candidate);
                }
            }
        }

        None
    }

    fn clean(&self, candidate: &str) -> String {
        let mut trimmed = candidate.trim().trim_end_matches(',').trim_end();
        // A trailing period is sentence punctuation unless it closes "Inc." or similar
        if let Some(stripped) = trimmed.strip_suffix('.')
            && !ends_with_suffix(stripped)
        {
            trimmed = stripped;
        }
        self.trailing_connector.replace(trimmed, "").into_owned()
    }
}

impl Default for OrganizationPatterns {
    fn default() -> Self {
        Self::new()
    }
}

fn ends_with_suffix(text: &str) -> bool {
    let last = text
        .rsplit(|c: char| c.is_whitespace() || c == ',')
        .next()
        .unwrap_or_default();
    SUFFIX.split('|').any(|suffix| suffix == last)
}

fn is_acceptable(candidate: &str) -> bool {
    let len = candidate.chars().count();
    if !(MIN_LEN..MAX_LEN).contains(&len) {
        return false;
    }
    let lower = candidate.to_lowercase();
    !EDUCATION_WORDS.iter().any(|word| lower.contains(word))
}
