/// Configuration system for resume-extract
///
/// Supports loading from multiple sources with priority:
/// CLI args > Environment variables > Config file > Defaults
use crate::error::{ConfigError, ExtractError};
use crate::sections::SectionClassifier;
use crate::vocabulary::{self, SectionSynonym};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct Config {
    /// Chunk length bounds and fallback window overlap
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Section synonyms and skills vocabulary
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
}

/// Chunking configuration. All lengths are in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChunkingConfig {
    /// Shortest chunk that is emitted
    #[serde(default = "default_min_chunk_length")]
    pub min_chunk_length: usize,

    /// Longest chunk that is emitted, and the sliding window size
    #[serde(default = "default_max_chunk_length")]
    pub max_chunk_length: usize,

    /// Characters shared by consecutive sliding windows
    #[serde(default = "default_sliding_window_overlap")]
    pub sliding_window_overlap: usize,
}

/// Vocabulary configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VocabularyConfig {
    /// Cap on the number of skills reported per document
    #[serde(default = "default_max_skills")]
    pub max_skills: usize,

    /// Skills matched by case-insensitive containment, in reporting order
    #[serde(default = "vocabulary::default_skills")]
    pub skills: Vec<String>,

    /// Header phrases in match precedence order
    #[serde(default = "vocabulary::default_section_synonyms")]
    pub sections: Vec<SectionSynonym>,
}

fn default_min_chunk_length() -> usize {
    50
}

fn default_max_chunk_length() -> usize {
    500
}

fn default_sliding_window_overlap() -> usize {
    50
}

fn default_max_skills() -> usize {
    vocabulary::DEFAULT_MAX_SKILLS
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            min_chunk_length: default_min_chunk_length(),
            max_chunk_length: default_max_chunk_length(),
            sliding_window_overlap: default_sliding_window_overlap(),
        }
    }
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            max_skills: default_max_skills(),
            skills: vocabulary::default_skills(),
            sections: vocabulary::default_section_synonyms(),
        }
    }
}

impl ChunkingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_chunk_length == 0 {
            return Err(ConfigError::InvalidValue {
                key: "chunking.max_chunk_length".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        if self.min_chunk_length >= self.max_chunk_length {
            return Err(ConfigError::InvalidValue {
                key: "chunking.min_chunk_length".to_string(),
                reason: format!(
                    "must be less than max_chunk_length ({}), got {}",
                    self.max_chunk_length, self.min_chunk_length
                ),
            });
        }

        if self.sliding_window_overlap > self.min_chunk_length {
            return Err(ConfigError::InvalidValue {
                key: "chunking.sliding_window_overlap".to_string(),
                reason: format!(
                    "must not exceed min_chunk_length ({}), got {}",
                    self.min_chunk_length, self.sliding_window_overlap
                ),
            });
        }

        Ok(())
    }
}

impl VocabularyConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_skills == 0 {
            return Err(ConfigError::InvalidValue {
                key: "vocabulary.max_skills".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        if let Some(position) = self.skills.iter().position(|s| s.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                key: format!("vocabulary.skills[{}]", position),
                reason: "must not be empty".to_string(),
            });
        }

        if let Some(position) = self
            .sections
            .iter()
            .position(|s| s.phrase.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                key: format!("vocabulary.sections[{}].phrase", position),
                reason: "must not be empty".to_string(),
            });
        }

        SectionClassifier::new(&self.sections)?;

        Ok(())
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self, ExtractError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()).into());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("Failed to read config file: {}", e)))?;

        let mut config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseFailed(format!("Invalid TOML: {}", e)))?;

        // Phrases are compared against lower-cased lines
        for synonym in &mut config.vocabulary.sections {
            synonym.phrase = synonym.phrase.to_lowercase();
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default location or fall back to defaults
    pub fn load_or_default() -> Result<Self, ExtractError> {
        let config_path = crate::paths::PlatformPaths::default_config_path();

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            Self::from_file(&config_path)
        } else {
            tracing::debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<(), ExtractError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::SaveFailed(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveFailed(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveFailed(format!("Failed to write config file: {}", e)))?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ExtractError> {
        self.chunking.validate()?;
        self.vocabulary.validate()?;
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("RESUME_EXTRACT_MIN_CHUNK_LENGTH")
            && let Ok(length) = value.parse()
        {
            self.chunking.min_chunk_length = length;
        }

        if let Ok(value) = std::env::var("RESUME_EXTRACT_MAX_CHUNK_LENGTH")
            && let Ok(length) = value.parse()
        {
            self.chunking.max_chunk_length = length;
        }

        if let Ok(value) = std::env::var("RESUME_EXTRACT_SLIDING_WINDOW_OVERLAP")
            && let Ok(overlap) = value.parse()
        {
            self.chunking.sliding_window_overlap = overlap;
        }

        if let Ok(value) = std::env::var("RESUME_EXTRACT_MAX_SKILLS")
            && let Ok(max) = value.parse()
        {
            self.vocabulary.max_skills = max;
        }
    }

    /// Create a new Config with defaults and environment overrides
    pub fn new() -> Result<Self, ExtractError> {
        let mut config = Self::load_or_default()?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }
}
