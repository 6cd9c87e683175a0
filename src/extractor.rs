use crate::chunker::ChunkBuilder;
use crate::config::Config;
use crate::error::ExtractError;
use crate::fields::FieldExtractor;
use crate::sections::SectionClassifier;
use crate::types::{Chunk, ChunkingReport, Extraction, StructuredFields};
use rayon::prelude::*;

/// Entry point: fields and chunks for one resume text
///
/// Holds only immutable compiled state, so one instance can be shared across
/// threads by reference.
#[derive(Debug, Clone)]
pub struct ResumeExtractor {
    config: Config,
    fields: FieldExtractor,
    builder: ChunkBuilder,
}

impl ResumeExtractor {
    /// Extractor with built-in defaults; ignores config files and environment
    pub fn new() -> Self {
        Self::build(Config::default(), SectionClassifier::default())
    }

    /// Extractor for a caller-supplied configuration, validated first
    pub fn with_config(config: Config) -> Result<Self, ExtractError> {
        config.validate()?;
        let classifier = SectionClassifier::new(&config.vocabulary.sections)?;
        Ok(Self::build(config, classifier))
    }

    fn build(config: Config, classifier: SectionClassifier) -> Self {
        let fields = FieldExtractor::new(&config.vocabulary.skills, config.vocabulary.max_skills);
        let builder = ChunkBuilder::new(config.chunking, classifier);

        Self {
            config,
            fields,
            builder,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run field extraction and chunking over the same text
    pub fn extract(&self, text: &str) -> Extraction {
        let fields = self.fields.extract(text);
        let (chunks, report) = self.builder.chunk(text);

        if chunks.is_empty() {
            tracing::warn!(
                chars = text.chars().count(),
                "no chunks produced, document has no extractable structure"
            );
        }

        Extraction {
            fields,
            chunks,
            report,
        }
    }

    pub fn extract_fields(&self, text: &str) -> StructuredFields {
        self.fields.extract(text)
    }

    pub fn chunk(&self, text: &str) -> (Vec<Chunk>, ChunkingReport) {
        self.builder.chunk(text)
    }

    /// Extract many documents in parallel; output order matches input order
    pub fn extract_batch<S>(&self, texts: &[S]) -> Vec<Extraction>
    where
        S: AsRef<str> + Sync,
    {
        tracing::debug!(documents = texts.len(), "extracting batch");
        texts
            .par_iter()
            .map(|text| self.extract(text.as_ref()))
            .collect()
    }
}

impl Default for ResumeExtractor {
    fn default() -> Self {
        Self::new()
    }
}
