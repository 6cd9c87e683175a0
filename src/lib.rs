//! # resume-extract - Section-Aware Resume Segmentation
//!
//! Turns the plain text of a resume into two things an embedding pipeline
//! needs: whole-document candidate fields and a list of bounded, section-tagged
//! chunks.
//!
//! ## Overview
//!
//! Extraction is pure pattern matching over text that is already in memory.
//! Nothing here performs I/O, and no call fails: a field that cannot be found
//! is `None`, and a document with no usable structure produces an empty chunk
//! list.
//!
//! ## Key Features
//!
//! - **Field extraction**: name, email, phone, LinkedIn URL, location, title,
//!   skills and years of experience
//! - **Section-aware chunking**: lines are grouped under canonical sections
//!   (Experience, Education, Skills, ...) within configurable length bounds
//! - **Chunk metadata**: employer and start/end dates per chunk
//! - **Sliding-window fallback**: documents without usable structure are still
//!   covered by overlapping fixed-size windows
//! - **Injected vocabularies**: header synonyms and skills come from
//!   configuration, not global tables
//!
//! ## Architecture
//!
//! ```text
//!              text
//!               |
//!      +--------+---------+
//!      |                  |
//! FieldExtractor     ChunkBuilder
//!      |            /     |      \
//!      |  SectionClassifier  ChunkState  ChunkMetadataExtractor
//!      |                  |
//!      |          (zero chunks?) -> SlidingWindow
//!      |                  |
//!      +--------+---------+
//!               |
//!          Extraction
//! ```
//!
//! ## Modules
//!
//! - [`extractor`]: the [`ResumeExtractor`] entry point and batch API
//! - [`fields`]: whole-document field extraction
//! - [`chunker`]: line state machine, metadata and sliding-window fallback
//! - [`sections`]: header line classification
//! - [`patterns`]: compiled regexes shared by all extractors
//! - [`vocabulary`]: default header synonyms and skills
//! - [`config`]: configuration with file and environment variable support
//! - [`types`]: output records with JSON schema
//! - [`error`]: error types
//! - [`paths`]: platform config file location
//!
//! ## Usage Example
//!
//! ```
//! use resume_extract::ResumeExtractor;
//!
//! let extractor = ResumeExtractor::new();
//! let extraction = extractor.extract("Jane Doe\njane@example.com\n");
//!
//! assert_eq!(extraction.fields.email.as_deref(), Some("jane@example.com"));
//! assert!(extraction.is_empty_result());
//! ```

/// Section-aware chunking with a sliding-window fallback
pub mod chunker;

/// Configuration management with environment variable overrides
pub mod config;

/// Error types and utilities
pub mod error;

/// Extraction entry point
pub mod extractor;

/// Whole-document structured fields
pub mod fields;

/// Platform-specific configuration paths
pub mod paths;

/// Compiled regex patterns
pub mod patterns;

/// Section header classification
pub mod sections;

/// Output records with JSON schema definitions
pub mod types;

/// Default vocabularies
pub mod vocabulary;

pub use config::Config;
pub use error::ExtractError;
pub use extractor::ResumeExtractor;
pub use types::{Chunk, ChunkingReport, ChunkingStrategy, Extraction, Section, StructuredFields};
