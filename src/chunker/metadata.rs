use super::state::Segment;
use crate::patterns::PatternLibrary;
use crate::types::Chunk;

/// Attaches organization and date-range metadata to emitted segments
#[derive(Debug, Clone, Copy)]
pub struct ChunkMetadataExtractor {
    patterns: &'static PatternLibrary,
}

impl ChunkMetadataExtractor {
    pub fn new(patterns: &'static PatternLibrary) -> Self {
        Self { patterns }
    }

    pub fn annotate(&self, segment: Segment) -> Chunk {
        let company = self.patterns.organization(&segment.text);
        let (start_date, end_date) = match self.patterns.date_range(&segment.text) {
            Some(range) => (Some(range.start), range.end),
            None => (None, None),
        };

        Chunk {
            chunk_text: segment.text,
            section: segment.section,
            company,
            start_date,
            end_date,
        }
    }
}

impl Default for ChunkMetadataExtractor {
    fn default() -> Self {
        Self::new(PatternLibrary::shared())
    }
}
