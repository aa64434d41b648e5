//! Pedagogical hashing helpers
//!
//! Demonstration-grade only: plain SHA-256 with no salt or stretching, for
//! the coursework's hash-and-verify and wordlist-cracking exercises.

pub mod hash;

pub use hash::{crack, sha256_hex, verify, CrackResult};
