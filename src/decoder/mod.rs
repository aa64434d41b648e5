//! Candidate string decoding
//!
//! Turns a classified candidate into its decoded text payload. The decoder
//! never trusts the classifier: hex and Base64 validity are re-checked here,
//! so feeding it a misclassified string yields a `DecodeError` rather than
//! garbage. Decoding never mutates its input; the result is always a fresh
//! allocation.

use crate::detection::EncodingKind;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

/// Result type for decoder operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Decoder-specific error types
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Decode a candidate string according to its classified encoding
///
/// `PlainText` is the identity transform and always succeeds. For hex and
/// Base64, the decoded bytes are interpreted as UTF-8 text: in lossy mode
/// invalid byte sequences are dropped (matching the behaviour of the tools
/// this crate replaces); otherwise they fail with `DecodeError::InvalidUtf8`.
pub fn decode(s: &str, kind: EncodingKind, lossy: bool) -> DecodeResult<String> {
    match kind {
        EncodingKind::PlainText => Ok(s.to_string()),
        EncodingKind::Hex => {
            let bytes = hex::decode(s)?;
            debug!("Hex decode: {} chars -> {} bytes", s.len(), bytes.len());
            bytes_to_text(bytes, lossy)
        }
        EncodingKind::Base64 => {
            let bytes = STANDARD.decode(s)?;
            debug!("Base64 decode: {} chars -> {} bytes", s.len(), bytes.len());
            bytes_to_text(bytes, lossy)
        }
    }
}

/// Decode raw bytes into text, dropping invalid UTF-8 sequences in lossy mode
fn bytes_to_text(bytes: Vec<u8>, lossy: bool) -> DecodeResult<String> {
    if !lossy {
        return Ok(String::from_utf8(bytes)?);
    }

    // Walk the byte buffer, keeping valid runs and skipping over invalid
    // sequences entirely (no replacement character)
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes.as_slice();
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                // Safe: valid_up_to() guarantees this prefix is UTF-8
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                match e.error_len() {
                    Some(bad) => rest = &after[bad..],
                    None => break, // truncated sequence at end of input
                }
            }
        }
    }
    Ok(out)
}
