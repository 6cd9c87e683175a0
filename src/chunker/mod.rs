//! Section-aware chunking with a sliding-window fallback.
//!
//! `ChunkBuilder::chunk` runs two phases and never interleaves them:
//! 1. the section pass feeds classified lines through [`ChunkState`], splitting
//!    any segment over the maximum into bounded pieces of the same section;
//! 2. only when that produced no in-bounds segment, [`SlidingWindow`] segments
//!    the raw text.

pub mod metadata;
pub mod sliding_window;
pub mod state;

pub use metadata::ChunkMetadataExtractor;
pub use sliding_window::SlidingWindow;
pub use state::{ChunkState, Flush, LineKind, Segment};

use crate::config::ChunkingConfig;
use crate::patterns::PatternLibrary;
use crate::sections::SectionClassifier;
use crate::types::{Chunk, ChunkingReport, ChunkingStrategy};

/// Splits resume text into bounded, section-tagged chunks
#[derive(Debug, Clone)]
pub struct ChunkBuilder {
    limits: ChunkingConfig,
    classifier: SectionClassifier,
    patterns: &'static PatternLibrary,
    metadata: ChunkMetadataExtractor,
}

impl ChunkBuilder {
    pub fn new(limits: ChunkingConfig, classifier: SectionClassifier) -> Self {
        let patterns = PatternLibrary::shared();
        Self {
            limits,
            classifier,
            patterns,
            metadata: ChunkMetadataExtractor::new(patterns),
        }
    }

    pub fn limits(&self) -> &ChunkingConfig {
        &self.limits
    }

    /// Classify one raw line; headers take precedence over bullets
    pub fn classify_line(&self, line: &str) -> LineKind {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            LineKind::Blank
        } else if let Some(section) = self.classifier.classify(trimmed) {
            LineKind::Header(section)
        } else if self.patterns.is_bullet(trimmed) {
            LineKind::Bullet(trimmed.to_string())
        } else {
            LineKind::Text(trimmed.to_string())
        }
    }

    /// Chunk a document, falling back to the sliding window when the section
    /// pass emits no in-bounds segment
    pub fn chunk(&self, text: &str) -> (Vec<Chunk>, ChunkingReport) {
        if text.trim().is_empty() {
            return (Vec::new(), ChunkingReport::default());
        }

        let (chunks, mut report) = self.section_pass(text);
        tracing::debug!(
            chunks = chunks.len(),
            dropped_short = report.dropped_short,
            split_oversized = report.split_oversized,
            "section pass finished"
        );

        // Pieces of split segments alone do not make a sectioned document
        if chunks.len() > report.split_pieces {
            report.strategy = ChunkingStrategy::Sections;
            return (chunks, report);
        }

        tracing::info!("section pass produced no bounded chunks, falling back to sliding window");
        let chunks = self.sliding_window_pass(text);
        report.strategy = if chunks.is_empty() {
            ChunkingStrategy::Empty
        } else {
            ChunkingStrategy::SlidingWindow
        };

        (chunks, report)
    }

    /// Primary phase: feed every line through the state machine
    pub fn section_pass(&self, text: &str) -> (Vec<Chunk>, ChunkingReport) {
        let mut chunks = Vec::new();
        let mut report = ChunkingReport::default();
        let mut state = ChunkState::new();

        for line in text.lines() {
            let (next, flushed) = state.step(self.classify_line(line), &self.limits);
            state = next;
            if let Some(flush) = flushed {
                self.record(flush, &mut chunks, &mut report);
            }
        }

        if let Some(flush) = state.finish(&self.limits) {
            self.record(flush, &mut chunks, &mut report);
        }

        (chunks, report)
    }

    /// Fallback phase: plain windows with no section or metadata
    pub fn sliding_window_pass(&self, text: &str) -> Vec<Chunk> {
        SlidingWindow::from_config(&self.limits)
            .segment(text)
            .into_iter()
            .map(Chunk::plain)
            .collect()
    }

    fn record(&self, flush: Flush, chunks: &mut Vec<Chunk>, report: &mut ChunkingReport) {
        match flush {
            Flush::Emitted(segment) => chunks.push(self.metadata.annotate(segment)),
            Flush::TooShort(len) => {
                tracing::debug!(len, min = self.limits.min_chunk_length, "dropped short segment");
                report.dropped_short += 1;
            }
            Flush::TooLong(segment) => {
                let pieces = SlidingWindow::from_config(&self.limits).split(&segment.text);
                tracing::debug!(
                    len = segment.text.chars().count(),
                    max = self.limits.max_chunk_length,
                    pieces = pieces.len(),
                    "split oversized segment"
                );

                report.split_oversized += 1;
                report.split_pieces += pieces.len();
                chunks.extend(pieces.into_iter().map(|text| {
                    self.metadata.annotate(Segment {
                        text,
                        section: segment.section,
                    })
                }));
            }
        }
    }
}

impl Default for ChunkBuilder {
    fn default() -> Self {
        Self::new(ChunkingConfig::default(), SectionClassifier::default())
    }
}

#[cfg(test)]
mod tests;
