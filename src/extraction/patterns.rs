//! Built-in pattern rules
//!
//! The regular expressions here reproduce the extraction semantics of the
//! coursework tools this crate replaces, character class for character
//! class. Changing them changes what counts as a match, so any edit needs a
//! matching fixture update in the extraction tests.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Email: local part, `@`, dotted domain labels, 2+ letter TLD
    pub static ref EMAIL_RE: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();

    /// Phone: optional `+` and country code, optional parenthesised area
    /// code, digit groups separated by `-`, `.` or space, 4-digit tail
    pub static ref PHONE_RE: Regex =
        Regex::new(r"\+?\d{1,3}[-.\s]?\(?\d{1,4}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap();

    /// Date: MM/DD/YYYY, DD-MM-YY and friends
    pub static ref DATE_RE: Regex =
        Regex::new(r"\b\d{1,2}[-/]\d{1,2}[-/]\d{2,4}\b").unwrap();

    /// URL: http/https scheme followed by URL-safe or percent-encoded
    /// characters. Note `$-_` is a code point range, not three literals;
    /// it covers `/`, `?`, `=`, `:` and the digits.
    pub static ref URL_RE: Regex =
        Regex::new(r"https?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\(\),]|%[0-9a-fA-F]{2})+").unwrap();

    /// Flag-brace token: identifier immediately followed by a braced body,
    /// e.g. FLAG{...}, CTF{...}, cyboria{...}
    pub static ref FLAG_RE: Regex =
        Regex::new(r"(?i)\b[A-Za-z0-9_]+\{[^}]+\}").unwrap();
}

/// Built-in extraction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Email,
    Phone,
    Date,
    Url,
    FlagBrace,
    /// `message` fields of JSON entries whose `flagged` attribute is
    /// exactly boolean true
    JsonFlagged,
    /// Flag-brace tokens found after Base64-decoding those `message` fields
    JsonFlaggedBase64,
}

impl Category {
    /// Human-readable category name used in match output
    pub fn name(&self) -> &'static str {
        match self {
            Category::Email => "Email Address",
            Category::Phone => "Phone Number",
            Category::Date => "Date",
            Category::Url => "URL",
            Category::FlagBrace => "Flag",
            Category::JsonFlagged => "JSON Flagged Message",
            Category::JsonFlaggedBase64 => "JSON Decoded Flag",
        }
    }

    /// Parse a category from its CLI spelling
    pub fn from_cli_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "email" | "emails" => Some(Category::Email),
            "phone" | "phones" => Some(Category::Phone),
            "date" | "dates" => Some(Category::Date),
            "url" | "urls" => Some(Category::Url),
            "flag" | "flags" => Some(Category::FlagBrace),
            "json-flagged" => Some(Category::JsonFlagged),
            "json-flagged-base64" => Some(Category::JsonFlaggedBase64),
            _ => None,
        }
    }
}

/// The matching predicate behind a pattern rule
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Plain regex scan over the text
    Regex(&'static Regex),
    /// JSON document scan for flagged messages
    JsonFlagged,
    /// JSON document scan, Base64-decoding each flagged message and
    /// searching the decoded text for flag-brace tokens
    JsonFlaggedBase64,
}

/// A named category associated with one matching predicate
///
/// Rules are registered once at process start and immutable thereafter.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub category: Category,
    pub matcher: Matcher,
}

impl PatternRule {
    pub fn for_category(category: Category) -> Self {
        let matcher = match category {
            Category::Email => Matcher::Regex(&EMAIL_RE),
            Category::Phone => Matcher::Regex(&PHONE_RE),
            Category::Date => Matcher::Regex(&DATE_RE),
            Category::Url => Matcher::Regex(&URL_RE),
            Category::FlagBrace => Matcher::Regex(&FLAG_RE),
            Category::JsonFlagged => Matcher::JsonFlagged,
            Category::JsonFlaggedBase64 => Matcher::JsonFlaggedBase64,
        };
        Self { category, matcher }
    }
}

lazy_static! {
    static ref BUILT_IN: Vec<PatternRule> = [
        Category::Email,
        Category::Phone,
        Category::Date,
        Category::Url,
        Category::FlagBrace,
        Category::JsonFlagged,
        Category::JsonFlaggedBase64,
    ]
    .into_iter()
    .map(PatternRule::for_category)
    .collect();
    static ref REGEX_ONLY: Vec<PatternRule> = [
        Category::Email,
        Category::Phone,
        Category::Date,
        Category::Url,
        Category::FlagBrace,
    ]
    .into_iter()
    .map(PatternRule::for_category)
    .collect();
}

/// The full built-in registry, in registration order
pub fn built_in_registry() -> &'static [PatternRule] {
    &BUILT_IN
}

/// The regex-only subset, for text that is known not to be JSON
pub fn regex_registry() -> &'static [PatternRule] {
    &REGEX_ONLY
}
