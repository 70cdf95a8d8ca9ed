//! classical/playfair.rs
//! Digraph substitution over a keyed grid.
//!
//! Rules per pair `(a, b)` at coordinates `A`, `B`:
//! - different row and column: swap columns, `(B.x, A.y)` and `(A.x, B.y)`
//! - same row: both move one column in the cipher direction
//! - same column: both move one row in the cipher direction
//! - same point: move along the preferred orientation; both outputs become
//!   that single shifted point
//!
//! Odd-length input is padded with the alphabet's last symbol. Decrypting a
//! same-point pair only round-trips when both sides agree on orientation and
//! padding; that ambiguity belongs to the cipher and is kept as is.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, Dimensions};
use crate::classical::Transform;
use crate::types::CipherError;

/// Axis used to break the same-point tie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredOrientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone)]
pub struct Playfair {
    alphabet: Arc<Alphabet>,
    key: String,
    orientation: PreferredOrientation,
    table: Alphabet,
}

impl Playfair {
    /// Needs a grid alphabet with an even symbol count and a non-empty key
    /// drawn from it. The key table is built once here.
    pub fn new(
        alphabet: Arc<Alphabet>,
        key: &str,
        orientation: PreferredOrientation,
    ) -> Result<Self, CipherError> {
        if alphabet.dimensions().is_none() {
            return Err(CipherError::GridRequired);
        }
        if alphabet.len() % 2 != 0 {
            return Err(CipherError::OddGrid { count: alphabet.len() });
        }
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }

        let table = alphabet.keyed(key)?;
        log::debug!("playfair key table built: {} symbols, grid {:?}", table.len(), table.grid());

        Ok(Self { alphabet, key: key.to_owned(), orientation, table })
    }

    pub fn orientation(&self) -> PreferredOrientation {
        self.orientation
    }

    /// The keyed grid used for lookups.
    pub fn table(&self) -> &Alphabet {
        &self.table
    }

    /// Symbol appended to odd-length input.
    pub fn padding(&self) -> char {
        self.alphabet.symbol(-1)
    }

    fn substitute(&self, a: Dimensions, b: Dimensions, step: isize) -> (Dimensions, Dimensions) {
        if a == b {
            let shifted = match self.orientation {
                PreferredOrientation::Horizontal => a.offset(step, 0),
                PreferredOrientation::Vertical => a.offset(0, step),
            };
            (shifted, shifted)
        } else if a.y == b.y {
            (a.offset(step, 0), b.offset(step, 0))
        } else if a.x == b.x {
            (a.offset(0, step), b.offset(0, step))
        } else {
            (Dimensions::new(b.x, a.y), Dimensions::new(a.x, b.y))
        }
    }
}

impl Transform for Playfair {
    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn run(&self, input: &str, forward: bool) -> Result<String, CipherError> {
        let mut indices = self.table.indices_of(input)?;
        if indices.len() % 2 != 0 {
            indices.push(self.table.index_of(self.padding())?);
        }

        let grid = self.table.grid();
        let step = if forward { 1 } else { -1 };
        let mut output = String::with_capacity(indices.len());

        for pair in indices.chunks_exact(2) {
            let a = Alphabet::coordinates(pair[0], grid);
            let b = Alphabet::coordinates(pair[1], grid);
            let (new_a, new_b) = self.substitute(a, b, step);

            output.push(self.table.at(new_a.limit(grid)));
            output.push(self.table.at(new_b.limit(grid)));
        }

        Ok(output)
    }
}
