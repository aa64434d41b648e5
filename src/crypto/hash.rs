use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::debug;

/// Lowercase hex SHA-256 digest of an input string
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a candidate password against an expected hex digest
///
/// The comparison is case-insensitive on the hex side so uppercase digests
/// from other tools verify cleanly.
pub fn verify(candidate: &str, expected_hex: &str) -> bool {
    sha256_hex(candidate) == expected_hex.to_ascii_lowercase()
}

/// Outcome of a wordlist lookup for one target hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrackResult {
    pub hash: String,
    /// First wordlist entry whose digest matches, if any
    pub password: Option<String>,
}

/// Try every wordlist entry against every target hash
///
/// Results come back in target-hash order so output is reproducible.
pub fn crack(hashes: &[String], wordlist: &[String]) -> Vec<CrackResult> {
    let digests: Vec<(String, &String)> = wordlist
        .iter()
        .map(|word| (sha256_hex(word), word))
        .collect();

    hashes
        .iter()
        .map(|target| {
            let normalised = target.to_ascii_lowercase();
            let password = digests
                .iter()
                .find(|(digest, _)| *digest == normalised)
                .map(|(_, word)| (*word).clone());
            if password.is_some() {
                debug!("Recovered preimage for {}", target);
            }
            CrackResult {
                hash: target.clone(),
                password,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // SHA-256("password"), a standard known vector
    const PASSWORD_SHA256: &str =
        "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";

    #[test]
    fn test_known_digest() {
        assert_eq!(sha256_hex("password"), PASSWORD_SHA256);
    }

    #[test]
    fn test_verify_accepts_uppercase_digest() {
        assert!(verify("password", &PASSWORD_SHA256.to_ascii_uppercase()));
        assert!(!verify("Password", PASSWORD_SHA256));
    }

    #[test]
    fn test_crack_finds_first_match() {
        let hashes = vec![PASSWORD_SHA256.to_string(), sha256_hex("letmein")];
        let wordlist = vec![
            "hunter2".to_string(),
            "password".to_string(),
            "letmein".to_string(),
        ];
        let results = crack(&hashes, &wordlist);
        assert_eq!(results[0].password.as_deref(), Some("password"));
        assert_eq!(results[1].password.as_deref(), Some("letmein"));
    }

    #[test]
    fn test_crack_reports_misses() {
        let hashes = vec![sha256_hex("not-in-list")];
        let wordlist = vec!["password".to_string()];
        let results = crack(&hashes, &wordlist);
        assert_eq!(results[0].password, None);
    }
}
