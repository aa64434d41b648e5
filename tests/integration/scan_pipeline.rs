//! CSV scan pipeline, end to end
//!
//! Builds a small "leaked transactions" CSV containing Base64- and
//! hex-encoded flags alongside plain text and junk, scans it with the
//! built-in registry, and checks findings, provenance, source context and
//! report export.

use crate::common;
use textsift::config::AnalysisConfig;
use textsift::extraction::{built_in_registry, Provenance};
use textsift::processor::CsvScanner;

#[test]
fn scan_finds_encoded_flags_with_location_context() {
    let b64_cell = common::b64("payload FLAG{from_base64_cell}");
    let hex_cell = common::hex_str("other FLAG{from_hex_cell}");
    let (dir, csv_path) = common::write_temp_csv(
        "txid,notes,amount",
        &[
            format!("t1,{},100", b64_cell),
            "t2,plain text with a@b.co inside,200".to_string(),
            format!("t3,{},300", hex_cell),
            "t4,just ordinary words,400".to_string(),
        ],
    );

    let scanner = CsvScanner::new(&csv_path, AnalysisConfig::default());
    let report = scanner.scan(built_in_registry()).unwrap();
    drop(dir);

    assert!(report.errors.is_empty(), "unexpected errors: {:?}", report.errors);

    let b64_flag = report
        .findings
        .iter()
        .find(|f| f.text == "FLAG{from_base64_cell}")
        .expect("base64 flag found");
    assert_eq!(b64_flag.provenance, Provenance::Base64);
    assert_eq!(b64_flag.column, "notes");
    assert_eq!(b64_flag.row, 0);
    assert_eq!(b64_flag.original, b64_cell);
    assert_eq!(
        b64_flag.decoded.as_deref(),
        Some("payload FLAG{from_base64_cell}")
    );

    let hex_flag = report
        .findings
        .iter()
        .find(|f| f.text == "FLAG{from_hex_cell}")
        .expect("hex flag found");
    assert_eq!(hex_flag.provenance, Provenance::Hex);
    assert_eq!(hex_flag.row, 2);

    let email = report
        .findings
        .iter()
        .find(|f| f.category == "Email Address")
        .expect("plain-text email found");
    assert_eq!(email.text, "a@b.co");
    assert_eq!(email.provenance, Provenance::None);
    assert_eq!(email.row, 1);
}

#[test]
fn scan_survives_undecodable_and_empty_cells() {
    let (dir, csv_path) = common::write_temp_csv(
        "data",
        &[
            // Valid hex syntax decoding to no recognisable pattern
            "aabbccddeeff0011".to_string(),
            String::new(),
            common::b64("nothing interesting here"),
        ],
    );

    let scanner = CsvScanner::new(&csv_path, AnalysisConfig::default());
    let report = scanner.scan(built_in_registry()).unwrap();
    drop(dir);

    assert!(report.findings.is_empty());
    // Empty cells are skipped, the other two decode without matches
    assert_eq!(report.cells_scanned, 2);
    assert_eq!(report.decoded_without_matches, 2);
}

#[test]
fn report_export_round_trips_through_json() {
    let (dir, csv_path) = common::write_temp_csv(
        "notes",
        &[common::b64("hidden FLAG{exported} token")],
    );

    let scanner = CsvScanner::new(&csv_path, AnalysisConfig::default());
    let report = scanner.scan(built_in_registry()).unwrap();

    let out_path = dir.path().join("report.json");
    CsvScanner::export_report(&report, &out_path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    drop(dir);

    assert_eq!(json["cells_scanned"], 1);
    let findings = json["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["text"], "FLAG{exported}");
    assert_eq!(findings[0]["provenance"], "base64");
    assert_eq!(findings[0]["column"], "notes");
}
