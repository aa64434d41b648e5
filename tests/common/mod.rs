//! Common Test Utilities
//!
//! Shared fixture builders used across the unit and integration suites.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Base64-encode a payload the way the coursework dumps did
pub fn b64(payload: &str) -> String {
    STANDARD.encode(payload)
}

/// Hex-encode a payload
pub fn hex_str(payload: &str) -> String {
    hex::encode(payload)
}

/// Write a CSV file into a fresh temp directory
///
/// The temp directory must be kept alive for the duration of the test; the
/// file is removed when it drops.
pub fn write_temp_csv(header: &str, rows: &[String]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("candidates.csv");
    let mut file = std::fs::File::create(&path).expect("create csv");
    writeln!(file, "{}", header).expect("write header");
    for row in rows {
        writeln!(file, "{}", row).expect("write row");
    }
    (dir, path)
}

/// A flagged-transactions JSON document with one flagged and one unflagged
/// entry; the flagged message carries a Base64-encoded flag token
pub fn flagged_json_doc(flag: &str) -> String {
    format!(
        r#"[
            {{"id": 1, "flagged": false, "message": "{}"}},
            {{"id": 2, "flagged": true, "message": "{}"}}
        ]"#,
        b64("nothing to see"),
        b64(&format!("token {}", flag))
    )
}
