//! Line-accumulation state machine for the section pass.
//!
//! `ChunkState` is a value: every transition consumes the old state and
//! returns the next one along with the flush it produced, if any. The driver
//! in [`super::ChunkBuilder`] only feeds lines and collects flushes.

use crate::config::ChunkingConfig;
use crate::types::Section;

/// A classified input line. Text carried by the variants is already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Header(Section),
    Blank,
    Bullet(String),
    Text(String),
}

/// Accumulated text of one flush, before metadata extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub section: Option<Section>,
}

/// Outcome of flushing a non-empty buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flush {
    Emitted(Segment),
    /// Character count of a segment under the minimum
    TooShort(usize),
    /// Segment over the maximum; the builder splits it rather than dropping it
    TooLong(Segment),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkState {
    /// Section of the most recent header, carried across flushes
    pub section: Option<Section>,
    /// Lines accumulated since the last flush
    pub buffer: Vec<String>,
}

impl ChunkState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Character length of the buffer joined with newlines
    pub fn buffered_len(&self) -> usize {
        if self.buffer.is_empty() {
            return 0;
        }
        let chars: usize = self.buffer.iter().map(|line| line.chars().count()).sum();
        chars + self.buffer.len() - 1
    }

    /// Apply one line
    pub fn step(mut self, line: LineKind, limits: &ChunkingConfig) -> (Self, Option<Flush>) {
        match line {
            LineKind::Header(section) => {
                // The header line itself never enters a chunk
                let flushed = self.flush(limits);
                self.section = Some(section);
                (self, flushed)
            }
            LineKind::Blank => {
                if self.buffered_len() > limits.min_chunk_length {
                    let flushed = self.flush(limits);
                    (self, flushed)
                } else {
                    (self, None)
                }
            }
            LineKind::Bullet(text) => {
                let flushed = if self.should_flush_before(&text, true, limits) {
                    self.flush(limits)
                } else {
                    None
                };
                self.buffer.push(text);
                (self, flushed)
            }
            LineKind::Text(text) => {
                let flushed = if self.should_flush_before(&text, false, limits) {
                    self.flush(limits)
                } else {
                    None
                };
                self.buffer.push(text);
                (self, flushed)
            }
        }
    }

    /// End of input
    pub fn finish(mut self, limits: &ChunkingConfig) -> Option<Flush> {
        self.flush(limits)
    }

    fn should_flush_before(&self, line: &str, is_bullet: bool, limits: &ChunkingConfig) -> bool {
        if self.buffer.is_empty() {
            return false;
        }

        let len = self.buffered_len();
        let max = limits.max_chunk_length;

        (is_bullet && len * 2 > max)
            || len > max
            || (len >= limits.min_chunk_length && len + 1 + line.chars().count() > max)
    }

    fn flush(&mut self, limits: &ChunkingConfig) -> Option<Flush> {
        if self.buffer.is_empty() {
            return None;
        }

        let text = self.buffer.join("\n").trim().to_string();
        self.buffer.clear();

        let len = text.chars().count();
        if len < limits.min_chunk_length {
            return Some(Flush::TooShort(len));
        }

        let segment = Segment {
            text,
            section: self.section,
        };
        if len > limits.max_chunk_length {
            Some(Flush::TooLong(segment))
        } else {
            Some(Flush::Emitted(segment))
        }
    }
}
