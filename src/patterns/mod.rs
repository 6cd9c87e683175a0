//! Pattern library: the fixed regexes used by the field and chunk extractors.
//!
//! Every pattern is compiled once when a [`PatternLibrary`] is built and then
//! reused for all documents. Where several patterns compete, they live in an
//! ordered slice and the first one that matches wins; nothing is scored.

mod dates;
mod organization;

pub use dates::{DatePatterns, DateRange};
pub use organization::OrganizationPatterns;

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Lines longer than this are narrative, not a title line
const MAX_TITLE_LINE_LENGTH: usize = 60;

static SHARED: LazyLock<PatternLibrary> = LazyLock::new(PatternLibrary::new);

/// A compiled regex with a stable name, used in ordered precedence lists
#[derive(Debug, Clone)]
pub struct NamedPattern {
    pub name: &'static str,
    pub regex: Regex,
}

impl NamedPattern {
    pub(crate) fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: compile(pattern),
        }
    }
}

/// Compile a built-in pattern. These are constants, so failure is a programming error.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid built-in pattern")
}

/// Whole text of the first match in document order
pub fn match_first(pattern: &Regex, text: &str) -> Option<String> {
    pattern.find(text).map(|m| m.as_str().to_string())
}

/// Every non-overlapping match in document order
pub fn match_all(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Try an ordered list of patterns; the first one that matches wins
pub fn first_of<'p, 't>(
    patterns: &'p [NamedPattern],
    text: &'t str,
) -> Option<(&'p NamedPattern, Captures<'t>)> {
    patterns
        .iter()
        .find_map(|pattern| pattern.regex.captures(text).map(|caps| (pattern, caps)))
}

/// All regexes used by the engine
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    email: Regex,
    phone: Regex,
    linkedin: Regex,
    location: Regex,
    title: Regex,
    experience_years: Regex,
    name: Regex,
    bullet: Regex,
    dates: DatePatterns,
    organization: OrganizationPatterns,
}

impl PatternLibrary {
    pub fn new() -> Self {
        Self {
            email: compile(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}"),
            phone: compile(
                r"(?:\+?1[-.\s]?)?(?:\(\d{3}\)|\b\d{3})[-.\s]?\d{3}[-.\s]?\d{4}\b",
            ),
            linkedin: compile(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[A-Za-z0-9_-]+"),
            location: compile(
                r"\b[A-Z][a-zA-Z]+(?:[ \t]+[A-Z][a-zA-Z]+)*,[ \t]*[A-Z][a-zA-Z]+(?:[ \t]+[A-Z][a-zA-Z]+)*\b",
            ),
            title: compile(concat!(
                r"(?i)^(?:(?:senior|junior|lead|principal|staff)\s+)?",
                r"(?:software|frontend|front-end|backend|back-end|full[\s-]?stack|devops|data|ml|ai",
                r"|machine\s+learning|cloud|mobile|web|platform|security|qa|site\s+reliability",
                r"|systems|product|ux|ui)\s+",
                r"(?:engineer|developer|architect|manager|analyst|designer|scientist|consultant",
                r"|specialist|lead)\b",
            )),
            experience_years: compile(r"(?i)(\d+)\+?\s*years?\s*(?:of)?\s*(?:experience|exp)"),
            name: compile(r"^[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){1,3}$"),
            bullet: compile(r"^(?:[•\-*+]\s|\d+\.\s)"),
            dates: DatePatterns::new(),
            organization: OrganizationPatterns::new(),
        }
    }

    /// Process-wide instance with the built-in patterns
    pub fn shared() -> &'static PatternLibrary {
        &SHARED
    }

    pub fn email(&self, text: &str) -> Option<String> {
        match_first(&self.email, text)
    }

    /// First phone number with whitespace removed
    pub fn phone(&self, text: &str) -> Option<String> {
        match_first(&self.phone, text)
            .map(|phone| phone.chars().filter(|c| !c.is_whitespace()).collect())
    }

    /// First LinkedIn profile URL, with `https://` added when the scheme is missing
    pub fn linkedin(&self, text: &str) -> Option<String> {
        match_first(&self.linkedin, text).map(|url| {
            if url.to_lowercase().starts_with("http") {
                url
            } else {
                format!("https://{}", url)
            }
        })
    }

    /// First "City, Region" match of a plausible length
    pub fn location(&self, text: &str) -> Option<String> {
        match_all(&self.location, text).into_iter().find(|candidate| {
            let len = candidate.chars().count();
            len > 3 && len < 50
        })
    }

    /// First line that opens with a recognised job title
    pub fn title(&self, text: &str) -> Option<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| line.chars().count() <= MAX_TITLE_LINE_LENGTH)
            .find_map(|line| match_first(&self.title, line))
            .map(|title| title.trim().to_string())
    }

    pub fn experience_years(&self, text: &str) -> Option<u32> {
        self.experience_years
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|years| years.as_str().parse().ok())
    }

    /// Whether a trimmed line looks like "John Smith" (2-4 capitalized words)
    pub fn is_name_line(&self, line: &str) -> bool {
        !line.contains('@') && self.name.is_match(line)
    }

    /// Bullet glyph or numbered-list marker followed by whitespace
    pub fn is_bullet(&self, line: &str) -> bool {
        self.bullet.is_match(line)
    }

    pub fn date_range(&self, text: &str) -> Option<DateRange> {
        self.dates.extract(text)
    }

    pub fn organization(&self, text: &str) -> Option<String> {
        self.organization.extract(text)
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}
