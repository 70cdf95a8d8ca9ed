//! classical/caesar.rs
//! Single-shift substitution.

use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::classical::Transform;
use crate::types::CipherError;

/// Shifts every symbol by the alphabet index of a one-symbol key.
#[derive(Debug, Clone)]
pub struct Caesar {
    alphabet: Arc<Alphabet>,
    key: String,
    steps: i64,
}

impl Caesar {
    /// Key must be exactly one alphabet member.
    pub fn new(alphabet: Arc<Alphabet>, key: &str) -> Result<Self, CipherError> {
        let mut chars = key.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(symbol), None) => symbol,
            _ => {
                return Err(CipherError::KeyLength { expected: 1, actual: key.chars().count() })
            }
        };
        let steps = alphabet.index_of(symbol)? as i64;

        Ok(Self { alphabet, key: key.to_owned(), steps })
    }

    pub fn steps(&self) -> i64 {
        self.steps
    }
}

impl Transform for Caesar {
    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn run(&self, input: &str, forward: bool) -> Result<String, CipherError> {
        let shift = if forward { self.steps } else { -self.steps };
        let indices = self.alphabet.indices_of(input)?;

        Ok(indices
            .into_iter()
            .map(|i| self.alphabet.symbol(i as i64 + shift))
            .collect())
    }
}
