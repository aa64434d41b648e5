//! Extraction engine
//!
//! Runs every registered rule over a body of text and unions the results.
//! Rules are not mutually exclusive: a single substring may satisfy several
//! categories. Output order is deterministic - rule registration order
//! first, ascending byte offset within a rule - so results are reproducible
//! for testing.

use super::json_flags::{self, FlagDecodeMode};
use super::patterns::{Matcher, PatternRule};
use super::{ExtractionError, ExtractionResult};
use crate::config::AnalysisConfig;
use crate::decoder;
use crate::detection::{self, EncodingKind};
use crate::types::{CandidateReport, CandidateString};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The decoding path that produced the text a match was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    None,
    Hex,
    Base64,
}

impl From<EncodingKind> for Provenance {
    fn from(kind: EncodingKind) -> Self {
        match kind {
            EncodingKind::PlainText => Provenance::None,
            EncodingKind::Hex => Provenance::Hex,
            EncodingKind::Base64 => Provenance::Base64,
        }
    }
}

/// One extraction result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Human-readable category name, e.g. "Email Address"
    pub category: String,
    /// The matched substring
    pub text: String,
    /// Byte offset of the match in its source text. For JSON flagged
    /// messages this is best-effort: the first occurrence of the message
    /// text in the document, which may precede the flagged entry when the
    /// same text appears earlier (as a key or an unflagged value).
    pub offset: usize,
    pub provenance: Provenance,
}

/// Options threaded through an extraction pass
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Strict mode surfaces undecodable Base64 payloads in flagged JSON as
    /// errors instead of silently skipping the entry
    pub flag_decode: FlagDecodeMode,
}

impl ExtractOptions {
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            flag_decode: if config.strict_flag_decode {
                FlagDecodeMode::Strict
            } else {
                FlagDecodeMode::Lossy
            },
        }
    }
}

/// Apply a pattern registry to a body of text with default options
pub fn extract(text: &str, rules: &[PatternRule]) -> ExtractionResult<Vec<Match>> {
    extract_with_options(text, rules, ExtractOptions::default())
}

/// Apply a pattern registry to a body of text
///
/// Empty input yields an empty match list, not an error. Malformed JSON
/// under a JSON-mode rule yields `ExtractionError::MalformedInput`; callers
/// scanning batches of candidates record that per item and keep going.
pub fn extract_with_options(
    text: &str,
    rules: &[PatternRule],
    options: ExtractOptions,
) -> ExtractionResult<Vec<Match>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut matches = Vec::new();
    for rule in rules {
        // JSON rules only apply to text that plausibly is a JSON document;
        // a leading brace or bracket that then fails to parse is an error,
        // anything else is simply not this rule's input
        if matches!(
            rule.matcher,
            Matcher::JsonFlagged | Matcher::JsonFlaggedBase64
        ) && !looks_like_json(text)
        {
            continue;
        }

        match &rule.matcher {
            Matcher::Regex(re) => {
                for m in re.find_iter(text) {
                    matches.push(Match {
                        category: rule.category.name().to_string(),
                        text: m.as_str().to_string(),
                        offset: m.start(),
                        provenance: Provenance::None,
                    });
                }
            }
            Matcher::JsonFlagged => {
                for message in json_flags::flagged_messages(text)? {
                    // Best-effort: first occurrence of the message text in
                    // the document; synthetic content anchors at 0
                    let offset = text.find(&message).unwrap_or(0);
                    matches.push(Match {
                        category: rule.category.name().to_string(),
                        text: message,
                        offset,
                        provenance: Provenance::None,
                    });
                }
            }
            Matcher::JsonFlaggedBase64 => {
                for flag in json_flags::decoded_flags(text, options.flag_decode)? {
                    matches.push(Match {
                        category: rule.category.name().to_string(),
                        text: flag.text,
                        // Offset within the decoded message payload
                        offset: flag.offset,
                        provenance: Provenance::Base64,
                    });
                }
            }
        }
    }

    debug!(
        "Extraction pass: {} rule(s), {} match(es) over {} bytes",
        rules.len(),
        matches.len(),
        text.len()
    );

    Ok(matches)
}

/// Check whether text plausibly starts a JSON document
fn looks_like_json(text: &str) -> bool {
    matches!(text.trim_start().as_bytes().first(), Some(b'{') | Some(b'['))
}

/// Run the full classify -> decode -> extract pipeline over one candidate
///
/// Hex and Base64 candidates are decoded and the decoded payload scanned;
/// plain-text candidates are scanned as-is. Every match is tagged with the
/// encoding path that produced the text it was found in. Failures are
/// recorded on the report so a batch of candidates is never aborted by one
/// bad value.
pub fn scan_candidate(
    candidate: &CandidateString,
    rules: &[PatternRule],
    config: &AnalysisConfig,
) -> CandidateReport {
    let kind = detection::classify_with_min_len(&candidate.content, config.min_candidate_length);
    let options = ExtractOptions::from_config(config);

    let mut report = CandidateReport {
        source: candidate.source.clone(),
        kind,
        decoded: None,
        matches: Vec::new(),
        error: None,
    };

    let scan_text = if kind == EncodingKind::PlainText {
        candidate.content.clone()
    } else {
        match decoder::decode(&candidate.content, kind, config.lossy_utf8) {
            Ok(decoded) => {
                report.decoded = Some(decoded.clone());
                decoded
            }
            Err(e) => {
                debug!("Candidate '{}' failed to decode: {}", candidate.source, e);
                report.error = Some(e.to_string());
                return report;
            }
        }
    };

    match extract_with_options(&scan_text, rules, options) {
        Ok(matches) => {
            let path = Provenance::from(kind);
            report.matches = matches
                .into_iter()
                .map(|mut m| {
                    // Matches found in a decoded payload inherit its path;
                    // nested Base64 provenance (flagged JSON) stays as-is
                    if m.provenance == Provenance::None {
                        m.provenance = path;
                    }
                    m
                })
                .collect();
        }
        Err(e) => report.error = Some(e.to_string()),
    }

    report
}
