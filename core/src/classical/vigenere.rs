//! classical/vigenere.rs
//! Polyalphabetic shift driven by a repeating key.

use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::classical::Transform;
use crate::types::CipherError;

#[derive(Debug, Clone)]
pub struct Vigenere {
    alphabet: Arc<Alphabet>,
    key: String,
    offsets: Vec<i64>,
}

impl Vigenere {
    /// Key is one or more alphabet members; it repeats over the input.
    pub fn new(alphabet: Arc<Alphabet>, key: &str) -> Result<Self, CipherError> {
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        let offsets = alphabet
            .indices_of(key)?
            .into_iter()
            .map(|i| i as i64)
            .collect();

        Ok(Self { alphabet, key: key.to_owned(), offsets })
    }

    /// Per-position shifts derived from the key.
    pub fn offsets(&self) -> &[i64] {
        &self.offsets
    }
}

impl Transform for Vigenere {
    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn run(&self, input: &str, forward: bool) -> Result<String, CipherError> {
        let sign = if forward { 1 } else { -1 };
        let indices = self.alphabet.indices_of(input)?;

        Ok(indices
            .into_iter()
            .zip(self.offsets.iter().cycle())
            .map(|(i, &offset)| self.alphabet.symbol(i as i64 + sign * offset))
            .collect())
    }
}
