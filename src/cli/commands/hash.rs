use crate::crypto::hash;
use crate::errors::AppResult;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// SHA-256 digest, verify and wordlist-crack helpers
///
/// Demonstration-grade only: plain unsalted SHA-256.
#[derive(Args)]
pub struct HashCommand {
    #[command(subcommand)]
    pub action: HashAction,
}

#[derive(Subcommand)]
pub enum HashAction {
    /// Print the SHA-256 hex digest of a string
    Digest {
        /// Input to hash
        input: String,
    },
    /// Check a candidate against an expected hex digest
    Verify {
        /// Candidate string
        candidate: String,
        /// Expected SHA-256 hex digest
        expected: String,
    },
    /// Look up target hashes against a wordlist
    Crack {
        /// File with one target hex digest per line
        hashes: PathBuf,
        /// File with one candidate word per line
        wordlist: PathBuf,
    },
}

impl HashCommand {
    pub fn run(&self) -> AppResult<()> {
        match &self.action {
            HashAction::Digest { input } => {
                println!("{}", hash::sha256_hex(input));
                Ok(())
            }
            HashAction::Verify {
                candidate,
                expected,
            } => {
                if hash::verify(candidate, expected) {
                    println!("MATCH");
                } else {
                    println!("NO MATCH");
                }
                Ok(())
            }
            HashAction::Crack { hashes, wordlist } => {
                let targets = read_lines(hashes)?;
                let words = read_lines(wordlist)?;
                info!(
                    "Cracking {} hash(es) against {} word(s)",
                    targets.len(),
                    words.len()
                );

                let results = hash::crack(&targets, &words);
                let mut recovered = 0;
                for result in &results {
                    match &result.password {
                        Some(password) => {
                            recovered += 1;
                            println!("{}  {}", result.hash, password);
                        }
                        None => println!("{}  <not found>", result.hash),
                    }
                }
                println!("Recovered {}/{}", recovered, results.len());
                Ok(())
            }
        }
    }
}

/// Read non-empty trimmed lines from a file
fn read_lines(path: &PathBuf) -> AppResult<Vec<String>> {
    Ok(std::fs::read_to_string(path)?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
