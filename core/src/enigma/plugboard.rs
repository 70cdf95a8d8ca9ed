//! enigma/plugboard.rs
//! Steckerbrett: optional symbol swaps applied on entry and exit.

use std::collections::BTreeMap;

use crate::alphabet::Alphabet;
use crate::types::CipherError;

/// Symmetric set of index pairs. Each index appears in at most one pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plugboard {
    pairs: BTreeMap<usize, usize>,
}

impl Plugboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire `a` to `b`. Reconnecting an existing pair is a no-op; any other
    /// reuse of a plugged symbol is a conflict.
    pub fn connect(&mut self, alphabet: &Alphabet, a: char, b: char) -> Result<(), CipherError> {
        let ia = alphabet.index_of(a)?;
        let ib = alphabet.index_of(b)?;
        if ia == ib {
            return Err(CipherError::PlugConflict { symbol: a });
        }
        if self.pairs.get(&ia) == Some(&ib) {
            return Ok(());
        }
        if self.pairs.contains_key(&ia) {
            return Err(CipherError::PlugConflict { symbol: a });
        }
        if self.pairs.contains_key(&ib) {
            return Err(CipherError::PlugConflict { symbol: b });
        }

        self.pairs.insert(ia, ib);
        self.pairs.insert(ib, ia);
        Ok(())
    }

    /// Pull the cable on `symbol`, if any. Returns whether a pair was removed.
    pub fn disconnect(&mut self, alphabet: &Alphabet, symbol: char) -> Result<bool, CipherError> {
        let index = alphabet.index_of(symbol)?;
        match self.pairs.remove(&index) {
            Some(other) => {
                self.pairs.remove(&other);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    #[inline]
    pub fn swap(&self, index: usize) -> usize {
        self.pairs.get(&index).copied().unwrap_or(index)
    }

    /// Largest plugged index, if any cable is in.
    pub fn highest_index(&self) -> Option<usize> {
        self.pairs.keys().next_back().copied()
    }

    /// Number of cables.
    pub fn len(&self) -> usize {
        self.pairs.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Cables as symbol pairs, lower index first.
    pub fn pairs(&self, alphabet: &Alphabet) -> Vec<(char, char)> {
        self.pairs
            .iter()
            .filter(|(a, b)| a < b)
            .map(|(&a, &b)| (alphabet[a], alphabet[b]))
            .collect()
    }
}
