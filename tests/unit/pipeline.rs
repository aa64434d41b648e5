//! Classify/decode/extract pipeline properties
//!
//! These pin down the published behaviour of the core: hex and Base64
//! round-trips, exact match offsets, JSON flagged-message semantics and the
//! batch-isolation guarantee for malformed candidates.

use crate::common;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use textsift::config::AnalysisConfig;
use textsift::decoder;
use textsift::detection::{classify, classify_with_min_len, EncodingKind};
use textsift::extraction::{
    extract, scan_candidate, Category, PatternRule, Provenance,
};
use textsift::types::CandidateString;

fn rules(categories: &[Category]) -> Vec<PatternRule> {
    categories
        .iter()
        .copied()
        .map(PatternRule::for_category)
        .collect()
}

#[test]
fn hex_strings_classify_and_round_trip() {
    for payload in ["Hello!", "FLAG{round_trip}", "\x01\x02binary-ish"] {
        let encoded = hex::encode(payload);
        assert_eq!(classify(&encoded), EncodingKind::Hex, "payload {:?}", payload);
        let decoded = decoder::decode(&encoded, EncodingKind::Hex, false).unwrap();
        assert_eq!(decoded, payload);
    }
}

#[test]
fn base64_strings_classify_and_round_trip() {
    for payload in ["Hello, world!", "some longer message body here"] {
        let encoded = STANDARD.encode(payload);
        // Skip inputs that happen to look like hex; they classify as hex
        // by design
        if !encoded.bytes().all(|b| b.is_ascii_hexdigit()) {
            assert_eq!(classify(&encoded), EncodingKind::Base64);
        }
        let decoded = decoder::decode(&encoded, EncodingKind::Base64, false).unwrap();
        assert_eq!(STANDARD.encode(decoded.as_bytes()), encoded);
    }
}

#[test]
fn email_match_has_exact_offset() {
    let matches = extract("Contact me at a@b.co", &rules(&[Category::Email])).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].category, "Email Address");
    assert_eq!(matches[0].text, "a@b.co");
    assert_eq!(matches[0].offset, 14);
    assert_eq!(matches[0].provenance, Provenance::None);
}

#[test]
fn flag_brace_match_is_case_insensitive_with_offset() {
    let matches = extract(
        "prefix FLAG{abc_123} suffix",
        &rules(&[Category::FlagBrace]),
    )
    .unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].text, "FLAG{abc_123}");
    assert_eq!(matches[0].offset, 7);

    let matches = extract("prefix flag{abc_123} suffix", &rules(&[Category::FlagBrace])).unwrap();
    assert_eq!(matches.len(), 1);
}

#[test]
fn flagged_json_entry_is_extracted_exactly_when_true() {
    let matches = extract(
        r#"{"flagged": true, "message": "hi"}"#,
        &rules(&[Category::JsonFlagged]),
    )
    .unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].category, "JSON Flagged Message");
    assert_eq!(matches[0].text, "hi");

    let matches = extract(
        r#"{"flagged": false, "message": "hi"}"#,
        &rules(&[Category::JsonFlagged]),
    )
    .unwrap();
    assert!(matches.is_empty());
}

#[test]
fn flagged_json_base64_variant_finds_decoded_flags() {
    let doc = common::flagged_json_doc("FLAG{in_the_json}");
    let matches = extract(&doc, &rules(&[Category::JsonFlaggedBase64])).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].text, "FLAG{in_the_json}");
    assert_eq!(matches[0].provenance, Provenance::Base64);
}

#[test]
fn empty_input_never_errors() {
    use textsift::extraction::built_in_registry;
    assert!(extract("", built_in_registry()).unwrap().is_empty());
}

#[test]
fn one_malformed_candidate_does_not_abort_a_batch() {
    let config = AnalysisConfig::default();
    let json_rules = rules(&[Category::JsonFlagged]);
    let candidates = [
        CandidateString::new("{definitely not json at all", "cell 0"),
        CandidateString::new(r#"[{"flagged": true, "message": "survivor"}]"#, "cell 1"),
    ];

    let reports: Vec<_> = candidates
        .iter()
        .map(|c| scan_candidate(c, &json_rules, &config))
        .collect();

    assert!(reports[0].error.is_some());
    assert_eq!(reports[1].matches.len(), 1);
    assert_eq!(reports[1].matches[0].text, "survivor");
}

#[test]
fn short_tokens_stay_plain_until_min_length_lowered() {
    assert_eq!(classify("cafe"), EncodingKind::PlainText);
    assert_eq!(classify_with_min_len("cafe", 4), EncodingKind::Hex);
}

#[test]
fn scan_candidate_preserves_provenance_through_decoding() {
    let config = AnalysisConfig::default();
    let flag_rules = rules(&[Category::FlagBrace]);

    let hex_candidate =
        CandidateString::new(common::hex_str("x FLAG{via_hex} y"), "hex cell");
    let report = scan_candidate(&hex_candidate, &flag_rules, &config);
    assert_eq!(report.matches[0].provenance, Provenance::Hex);

    let b64_candidate = CandidateString::new(common::b64("x FLAG{via_b64} y"), "b64 cell");
    let report = scan_candidate(&b64_candidate, &flag_rules, &config);
    assert_eq!(report.matches[0].provenance, Provenance::Base64);
}
