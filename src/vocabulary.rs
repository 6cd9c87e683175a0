//! Default keyword tables: section-header synonyms and the skills vocabulary.
//!
//! Both tables are ordered. The classifier stops at the first synonym that
//! matches, so a phrase must come before any shorter phrase it contains
//! ("volunteer experience" before "experience").

use crate::types::Section;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One raw header phrase and the canonical section it maps onto
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SectionSynonym {
    /// Lower-case header phrase
    pub phrase: String,
    /// Canonical section
    pub section: Section,
}

impl SectionSynonym {
    pub fn new(phrase: impl Into<String>, section: Section) -> Self {
        Self {
            phrase: phrase.into().to_lowercase(),
            section,
        }
    }
}

const DEFAULT_SECTION_SYNONYMS: &[(&str, Section)] = &[
    // Multi-word phrases first
    ("volunteer experience", Section::Volunteer),
    ("volunteer activities", Section::Volunteer),
    ("volunteer work", Section::Volunteer),
    ("community service", Section::Volunteer),
    ("work experience", Section::Experience),
    ("professional experience", Section::Experience),
    ("relevant experience", Section::Experience),
    ("employment history", Section::Experience),
    ("work history", Section::Experience),
    ("career history", Section::Experience),
    ("academic background", Section::Education),
    ("educational background", Section::Education),
    ("side projects", Section::Projects),
    ("personal projects", Section::Projects),
    ("key projects", Section::Projects),
    ("technical skills", Section::Skills),
    ("core skills", Section::Skills),
    ("programming languages", Section::Skills),
    ("core competencies", Section::Skills),
    ("professional summary", Section::Summary),
    ("career objective", Section::Summary),
    ("about me", Section::Summary),
    ("licenses and certifications", Section::Certifications),
    ("honors and awards", Section::Awards),
    ("awards and honors", Section::Awards),
    ("hobbies and interests", Section::Interests),
    ("contact information", Section::Contact),
    ("contact info", Section::Contact),
    ("personal information", Section::Contact),
    // Single words
    ("experience", Section::Experience),
    ("employment", Section::Experience),
    ("education", Section::Education),
    ("academic", Section::Education),
    ("qualifications", Section::Education),
    ("projects", Section::Projects),
    ("project", Section::Projects),
    ("volunteering", Section::Volunteer),
    ("volunteer", Section::Volunteer),
    ("skills", Section::Skills),
    ("competencies", Section::Skills),
    ("summary", Section::Summary),
    ("objective", Section::Summary),
    ("profile", Section::Summary),
    ("certifications", Section::Certifications),
    ("certificates", Section::Certifications),
    ("certification", Section::Certifications),
    ("licenses", Section::Certifications),
    ("achievements", Section::Awards),
    ("awards", Section::Awards),
    ("honors", Section::Awards),
    ("publications", Section::Publications),
    ("papers", Section::Publications),
    ("languages", Section::Languages),
    ("interests", Section::Interests),
    ("hobbies", Section::Interests),
    ("contact", Section::Contact),
];

const DEFAULT_SKILLS: &[&str] = &[
    // Languages
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "Golang",
    "Rust",
    "Ruby",
    "PHP",
    "Swift",
    "Kotlin",
    "SQL",
    "HTML",
    "CSS",
    // Frameworks
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Express.js",
    "Django",
    "Flask",
    "Spring Boot",
    // Cloud and infrastructure
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Terraform",
    "Linux",
    // Data
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "GraphQL",
    "REST API",
    "Machine Learning",
    "TensorFlow",
    "PyTorch",
    // Practices and tools
    "Git",
    "Agile",
];

/// Default maximum number of skills reported per document
pub const DEFAULT_MAX_SKILLS: usize = 30;

/// Built-in section synonym table, in precedence order
pub fn default_section_synonyms() -> Vec<SectionSynonym> {
    DEFAULT_SECTION_SYNONYMS
        .iter()
        .map(|(phrase, section)| SectionSynonym::new(*phrase, *section))
        .collect()
}

/// Built-in skills vocabulary, in reporting order
pub fn default_skills() -> Vec<String> {
    DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
}
