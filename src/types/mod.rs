//! Output records handed to the embedding and persistence collaborators.
//!
//! Both records are plain values created fresh per extraction call. They carry
//! no identity: ids, timestamps and foreign keys belong to persistence.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical resume section that many raw header synonyms map onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Section {
    Experience,
    Education,
    Projects,
    Volunteer,
    Skills,
    Summary,
    Certifications,
    Awards,
    Publications,
    Languages,
    Interests,
    Contact,
}

impl Section {
    /// Every canonical section, in declaration order
    pub const ALL: [Section; 12] = [
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Volunteer,
        Section::Skills,
        Section::Summary,
        Section::Certifications,
        Section::Awards,
        Section::Publications,
        Section::Languages,
        Section::Interests,
        Section::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Projects => "Projects",
            Section::Volunteer => "Volunteer",
            Section::Skills => "Skills",
            Section::Summary => "Summary",
            Section::Certifications => "Certifications",
            Section::Awards => "Awards",
            Section::Publications => "Publications",
            Section::Languages => "Languages",
            Section::Interests => "Interests",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown section '{}'", s))
    }
}

/// Whole-document candidate attributes
///
/// Every field is independently optional; `None` means "not detected".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StructuredFields {
    /// Candidate name taken from the document header
    pub name: Option<String>,
    /// First email address in document order
    pub email: Option<String>,
    /// First North-American phone number, whitespace removed
    pub phone: Option<String>,
    /// LinkedIn profile URL as written in the document
    pub linkedin: Option<String>,
    /// "City, Region" style location
    pub location: Option<String>,
    /// Job title line (e.g. "Senior Software Engineer")
    pub title: Option<String>,
    /// Matched skill names in vocabulary order, without duplicates
    #[serde(default)]
    pub skills: Vec<String>,
    /// Years of experience stated in the text
    pub experience_years: Option<u32>,
}

impl StructuredFields {
    /// True when no field was detected at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.linkedin.is_none()
            && self.location.is_none()
            && self.title.is_none()
            && self.skills.is_empty()
            && self.experience_years.is_none()
    }
}

/// A bounded span of resume text, the unit handed to embedding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Chunk {
    /// Trimmed chunk text; the only field embedding needs
    pub chunk_text: String,
    /// Canonical section active when the chunk was emitted
    pub section: Option<Section>,
    /// Employer or organization named in the chunk
    pub company: Option<String>,
    /// Start of the first date range found in the chunk
    pub start_date: Option<String>,
    /// End of that range; absent with a start date means ongoing
    pub end_date: Option<String>,
}

impl Chunk {
    /// Chunk with no section or metadata, as produced by the sliding window
    pub fn plain(chunk_text: impl Into<String>) -> Self {
        Self {
            chunk_text: chunk_text.into(),
            section: None,
            company: None,
            start_date: None,
            end_date: None,
        }
    }

    /// A start date without an end date only comes from a Present/Current marker
    pub fn is_ongoing(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_none()
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.chunk_text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.chunk_text.is_empty()
    }
}

/// Which phase of the chunking pipeline produced the chunk list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChunkingStrategy {
    /// Section-aware line accumulation
    Sections,
    /// Fixed-stride fallback over the raw text
    SlidingWindow,
    /// Neither phase produced a chunk
    #[default]
    Empty,
}

/// Diagnostics about how a document was chunked
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChunkingReport {
    /// Phase whose output was returned
    pub strategy: ChunkingStrategy,
    /// Segments below the minimum length discarded by the section pass
    pub dropped_short: usize,
    /// Segments above the maximum length that the section pass split
    pub split_oversized: usize,
    /// Chunks produced by those splits
    pub split_pieces: usize,
}

/// Result of one extraction call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Extraction {
    /// Whole-document fields
    pub fields: StructuredFields,
    /// Ordered chunks
    pub chunks: Vec<Chunk>,
    /// How the chunks were produced
    pub report: ChunkingReport,
}

impl Extraction {
    /// No chunks even after the fallback; the input was empty or too short
    pub fn is_empty_result(&self) -> bool {
        self.chunks.is_empty()
    }
}

#[cfg(test)]
mod tests;
