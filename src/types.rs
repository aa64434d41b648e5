//! Shared data types for candidate strings and scan reporting

use crate::detection::EncodingKind;
use crate::extraction::{Match, Provenance};
use serde::{Deserialize, Serialize};

/// An immutable text value under inspection, tagged with where it came from
///
/// The source context is a free-form label used only for result reporting,
/// e.g. `column 'notes', row 12` or `clipboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateString {
    pub content: String,
    pub source: String,
}

impl CandidateString {
    pub fn new(content: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: source.into(),
        }
    }
}

/// Outcome of running the full classify/decode/extract pipeline over one
/// candidate string
///
/// A failed candidate carries its error here instead of aborting the batch
/// it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateReport {
    pub source: String,
    pub kind: EncodingKind,
    /// Decoded payload, present only when the candidate was hex or Base64
    pub decoded: Option<String>,
    pub matches: Vec<Match>,
    pub error: Option<String>,
}

impl CandidateReport {
    /// True when decoding succeeded but no registered pattern matched
    pub fn decoded_without_matches(&self) -> bool {
        self.decoded.is_some() && self.matches.is_empty() && self.error.is_none()
    }
}

/// One pattern hit found during a CSV scan, with full provenance
#[derive(Debug, Clone, Serialize)]
pub struct FlagFinding {
    pub category: String,
    pub text: String,
    pub provenance: Provenance,
    pub column: String,
    pub row: usize,
    pub original: String,
    pub decoded: Option<String>,
}

/// Aggregated result of scanning a tabular source
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub source: String,
    pub scanned_at: chrono::DateTime<chrono::Utc>,
    pub cells_scanned: usize,
    pub findings: Vec<FlagFinding>,
    /// Cells that decoded cleanly but matched no pattern (hex/Base64 noise)
    pub decoded_without_matches: usize,
    /// Per-cell errors, recorded without aborting the scan
    pub errors: Vec<String>,
}
