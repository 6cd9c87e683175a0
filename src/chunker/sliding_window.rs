//! Fixed-stride fallback for documents the section pass could not split, and
//! the overlap-free splitter for oversized section segments.

use crate::config::ChunkingConfig;

/// Character-indexed sliding window with sentence-boundary snapping
#[derive(Debug, Clone, Copy)]
pub struct SlidingWindow {
    size: usize,
    overlap: usize,
    min_len: usize,
}

impl SlidingWindow {
    pub fn new(size: usize, overlap: usize, min_len: usize) -> Self {
        Self {
            size,
            overlap,
            min_len,
        }
    }

    pub fn from_config(config: &ChunkingConfig) -> Self {
        Self::new(
            config.max_chunk_length,
            config.sliding_window_overlap,
            config.min_chunk_length,
        )
    }

    /// Split text into trimmed windows of at most `size` characters
    ///
    /// A window that would cut mid-text is pulled back to just after the last
    /// `.` or newline inside it, when that keeps more than `min_len` characters.
    /// Consecutive windows share `overlap` characters. Windows shorter than
    /// `min_len` after trimming are skipped.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let mut windows = Vec::new();
        let mut start = 0;

        while start < len {
            let mut end = start + self.size;

            if end < len
                && let Some(boundary) = (start..end).rev().find(|&i| matches!(chars[i], '.' | '\n'))
                && boundary > start + self.min_len
            {
                end = boundary + 1;
            }

            let end = end.min(len);
            let window: String = chars[start..end].iter().collect();
            let window = window.trim();
            if window.chars().count() >= self.min_len {
                windows.push(window.to_string());
            }

            // Break if we've reached the end
            if end >= len {
                break;
            }

            start = end.saturating_sub(self.overlap).max(start + 1);
        }

        windows
    }

    /// Cut text into consecutive trimmed pieces of at most `size` characters
    ///
    /// Unlike [`segment`](Self::segment) the pieces do not overlap and nothing
    /// is skipped. Cuts snap back to the last `.` or newline the same way, and
    /// are pulled in so the tail is never shorter than `min_len`.
    pub fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let mut pieces = Vec::new();
        let mut start = 0;

        while start < len {
            let mut end = len;

            if len - start > self.size {
                end = (start + self.size)
                    .min(len.saturating_sub(self.min_len))
                    .max(start + 1);

                if let Some(boundary) = (start..end).rev().find(|&i| matches!(chars[i], '.' | '\n'))
                    && boundary > start + self.min_len
                {
                    end = boundary + 1;
                }
            }

            let piece: String = chars[start..end].iter().collect();
            let piece = piece.trim();
            if !piece.is_empty() {
                pieces.push(piece.to_string());
            }

            start = end;
        }

        pieces
    }
}
