//! Encoding classification for candidate strings
//!
//! Decides whether a candidate string is syntactically valid hexadecimal or
//! Base64 before any decoding is attempted. Classification is a pure function
//! of content and never fails: anything ambiguous or malformed resolves to
//! plain text. The same checks are repeated independently inside the decoder,
//! so a misclassification can never corrupt a decode.

use crate::config::DEFAULT_MIN_CANDIDATE_LENGTH;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// Syntactic encoding classification of a candidate string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingKind {
    PlainText,
    Hex,
    Base64,
}

impl std::fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodingKind::PlainText => write!(f, "plain text"),
            EncodingKind::Hex => write!(f, "hex"),
            EncodingKind::Base64 => write!(f, "base64"),
        }
    }
}

/// Classify a candidate string using the default minimum length
pub fn classify(s: &str) -> EncodingKind {
    classify_with_min_len(s, DEFAULT_MIN_CANDIDATE_LENGTH)
}

/// Classify a candidate string as hex, Base64 or plain text
///
/// Strings shorter than `min_len` always classify as plain text to avoid
/// false positives on short incidental tokens ("cafe", "dead", ...).
///
/// Hex is checked before Base64: an even-length run of hex digits is far more
/// likely to be hex than Base64, even when its length happens to be a
/// multiple of four.
pub fn classify_with_min_len(s: &str, min_len: usize) -> EncodingKind {
    if s.len() < min_len {
        return EncodingKind::PlainText;
    }

    if is_hex(s) {
        return EncodingKind::Hex;
    }

    if is_base64(s) {
        return EncodingKind::Base64;
    }

    EncodingKind::PlainText
}

/// Check if a string is a non-empty, even-length run of hex digits
pub fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.len() % 2 == 0 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Check if a string is syntactically valid standard Base64
///
/// Requires length to be a multiple of four, the standard alphabet with at
/// most two trailing `=` padding characters, and a successful strict decode.
/// The decode step rejects strings that merely look right but violate
/// padding rules (e.g. non-zero trailing bits).
pub fn is_base64(s: &str) -> bool {
    if s.is_empty() || s.len() % 4 != 0 {
        return false;
    }

    let padding = s.bytes().rev().take_while(|&b| b == b'=').count();
    if padding > 2 {
        return false;
    }

    let body = &s.as_bytes()[..s.len() - padding];
    if !body
        .iter()
        .all(|&b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
    {
        return false;
    }

    STANDARD.decode(s).is_ok()
}
