//! Session-scoped substitution cipher
//!
//! A bijective character mapping over a configurable alphabet, generated
//! fresh per session by a uniformly random permutation. The forward and
//! inverse maps are derived together so they can never drift apart; the
//! mapping is an explicit owned value rather than hidden module state, which
//! keeps it testable in isolation. Regenerating a mapping invalidates any
//! previously encoded text - that is expected, old mappings are not kept
//! unless explicitly exported.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// Result type for cipher operations
pub type CipherResult<T> = Result<T, CipherError>;

/// Cipher-specific error types
#[derive(Debug, thiserror::Error)]
pub enum CipherError {
    #[error("Alphabet must not be empty")]
    EmptyAlphabet,

    #[error("Alphabet contains duplicate symbol '{0}'")]
    DuplicateSymbol(char),

    #[error("Imported mapping is not a bijection over its alphabet")]
    NotABijection,
}

/// Which direction to apply a mapping in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

/// A bijection over an alphabet, with its exact functional inverse
///
/// Owned exclusively by the session that created it; a host with concurrent
/// callers must serialise regeneration against application itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CipherMapping {
    alphabet: Vec<char>,
    forward: HashMap<char, char>,
    inverse: HashMap<char, char>,
}

impl CipherMapping {
    /// Generate a uniformly random permutation of the A-Z alphabet
    pub fn generate(seed: Option<u64>) -> Self {
        // Default alphabet is always valid, so this cannot fail
        Self::generate_with_alphabet(&default_alphabet(), seed)
            .unwrap_or_else(|_| unreachable!("default alphabet is non-empty and duplicate-free"))
    }

    /// Generate a uniformly random permutation of a caller-supplied alphabet
    ///
    /// A seed makes generation reproducible; without one the permutation is
    /// drawn from the OS entropy source.
    pub fn generate_with_alphabet(alphabet: &[char], seed: Option<u64>) -> CipherResult<Self> {
        if alphabet.is_empty() {
            return Err(CipherError::EmptyAlphabet);
        }
        let mut seen = std::collections::HashSet::new();
        for &c in alphabet {
            if !seen.insert(c) {
                return Err(CipherError::DuplicateSymbol(c));
            }
        }

        let mut shuffled: Vec<char> = alphabet.to_vec();
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        shuffled.shuffle(&mut rng);

        let forward: HashMap<char, char> =
            alphabet.iter().copied().zip(shuffled.iter().copied()).collect();
        let inverse: HashMap<char, char> =
            shuffled.into_iter().zip(alphabet.iter().copied()).collect();

        info!("Generated substitution mapping over {} symbols", alphabet.len());

        Ok(Self {
            alphabet: alphabet.to_vec(),
            forward,
            inverse,
        })
    }

    /// Apply one direction of the mapping to a text
    ///
    /// Each character is looked up as written first, then uppercase-normalised,
    /// so lowercase input works against the default A-Z alphabet while custom
    /// alphabets with lowercase symbols still map. Characters matching neither
    /// form pass through unchanged. Applying forward then inverse is therefore
    /// the identity on alphabet characters and a no-op on everything else.
    pub fn apply(&self, text: &str, direction: Direction) -> String {
        let map = match direction {
            Direction::Forward => &self.forward,
            Direction::Inverse => &self.inverse,
        };
        text.chars()
            .map(|c| {
                map.get(&c)
                    .or_else(|| map.get(&c.to_ascii_uppercase()))
                    .copied()
                    .unwrap_or(c)
            })
            .collect()
    }

    /// Encode with the forward mapping
    pub fn encode(&self, text: &str) -> String {
        self.apply(text, Direction::Forward)
    }

    /// Decode with the inverse mapping
    pub fn decode(&self, text: &str) -> String {
        self.apply(text, Direction::Inverse)
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Validate an imported mapping: forward must be a bijection over the
    /// alphabet and inverse must be its exact functional inverse
    pub fn validate(&self) -> CipherResult<()> {
        if self.alphabet.is_empty() {
            return Err(CipherError::EmptyAlphabet);
        }
        if self.forward.len() != self.alphabet.len() || self.inverse.len() != self.alphabet.len() {
            return Err(CipherError::NotABijection);
        }
        for &c in &self.alphabet {
            let mapped = self.forward.get(&c).ok_or(CipherError::NotABijection)?;
            if self.inverse.get(mapped) != Some(&c) {
                return Err(CipherError::NotABijection);
            }
        }
        Ok(())
    }
}

/// The default A-Z alphabet
pub fn default_alphabet() -> Vec<char> {
    ('A'..='Z').collect()
}
