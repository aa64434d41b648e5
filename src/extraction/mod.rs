//! Pattern registry and extraction engine
//!
//! Applies an ordered registry of named pattern rules to a body of text and
//! returns all matches with positional and provenance metadata. Rules are
//! either compiled regular expressions or JSON-aware matchers (flagged
//! messages, Base64-encoded flags inside flagged messages). The registry is
//! built once at first use and is read-only during extraction.

pub mod engine;
pub mod json_flags;
pub mod patterns;

pub use engine::{extract, extract_with_options, scan_candidate, ExtractOptions, Match, Provenance};
pub use json_flags::FlagDecodeMode;
pub use patterns::{built_in_registry, regex_registry, Category, Matcher, PatternRule};

/// Result type for extraction operations
pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Extraction-specific error types
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// Bad JSON handed to a JSON-mode rule, with the parse error detail
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}
