//! JSON-aware flagged-message extraction
//!
//! Handles documents shaped like the coursework's "leaked transaction"
//! exports: either an array of entry objects, or an object whose values are
//! arrays of entry objects. An entry participates only when its `flagged`
//! attribute is exactly boolean true ("true", 1 and other truthy values do
//! not count) and it carries a string `message` field.

use super::patterns::FLAG_RE;
use super::{ExtractionError, ExtractionResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::Value;
use tracing::debug;

/// How to treat flagged entries whose Base64 payload does not decode
///
/// The tools this crate replaces skipped such entries silently, which makes
/// "no flagged entries" indistinguishable from "entries present but
/// undecodable". Both behaviours are kept and the choice is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagDecodeMode {
    /// Skip entries that fail to decode (observed behaviour)
    #[default]
    Lossy,
    /// Surface the first decode failure as `MalformedInput`
    Strict,
}

/// A flag token recovered from a decoded message payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFlag {
    pub text: String,
    /// Byte offset within the decoded message the flag was found at
    pub offset: usize,
}

/// Extract the `message` field of every entry flagged exactly `true`
pub fn flagged_messages(text: &str) -> ExtractionResult<Vec<String>> {
    let doc = parse(text)?;
    Ok(entries(&doc)
        .filter_map(flagged_message)
        .map(str::to_string)
        .collect())
}

/// Base64-decode every flagged `message` and search the decoded text for
/// flag-brace tokens
///
/// Matches the original decoder: only the first flag token per message is
/// taken.
pub fn decoded_flags(text: &str, mode: FlagDecodeMode) -> ExtractionResult<Vec<DecodedFlag>> {
    let doc = parse(text)?;
    let mut flags = Vec::new();

    for message in entries(&doc).filter_map(flagged_message) {
        let bytes = match STANDARD.decode(message) {
            Ok(bytes) => bytes,
            Err(e) => {
                if mode == FlagDecodeMode::Strict {
                    return Err(ExtractionError::MalformedInput(format!(
                        "flagged message is not valid base64: {}",
                        e
                    )));
                }
                debug!("Skipping flagged message with undecodable base64: {}", e);
                continue;
            }
        };

        let decoded = match String::from_utf8(bytes) {
            Ok(decoded) => decoded,
            Err(e) => {
                if mode == FlagDecodeMode::Strict {
                    return Err(ExtractionError::MalformedInput(format!(
                        "decoded flagged message is not valid UTF-8: {}",
                        e
                    )));
                }
                debug!("Skipping flagged message with non-UTF-8 payload: {}", e);
                continue;
            }
        };

        if let Some(m) = FLAG_RE.find(&decoded) {
            flags.push(DecodedFlag {
                text: m.as_str().to_string(),
                offset: m.start(),
            });
        }
    }

    Ok(flags)
}

fn parse(text: &str) -> ExtractionResult<Value> {
    serde_json::from_str(text).map_err(|e| ExtractionError::MalformedInput(e.to_string()))
}

/// Iterate entry objects: a top-level array, a top-level object that is
/// itself an entry, or every array value of a top-level object
fn entries(doc: &Value) -> Box<dyn Iterator<Item = &Value> + '_> {
    match doc {
        Value::Array(items) => Box::new(items.iter()),
        Value::Object(map) if map.contains_key("flagged") => Box::new(std::iter::once(doc)),
        Value::Object(map) => Box::new(
            map.values()
                .filter_map(|v| v.as_array())
                .flat_map(|items| items.iter()),
        ),
        _ => Box::new(std::iter::empty()),
    }
}

/// The `message` of an entry whose `flagged` attribute is exactly `true`
fn flagged_message(entry: &Value) -> Option<&str> {
    if entry.get("flagged") != Some(&Value::Bool(true)) {
        return None;
    }
    entry.get("message").and_then(Value::as_str)
}
