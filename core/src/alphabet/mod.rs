//! alphabet/mod.rs
//! Ordered, duplicate-free symbol sets with optional grid layout.
//!
//! Summary: an `Alphabet` is the shared index space every cipher works in.
//! - `index_of` / `Index<usize>` map symbols to positions and back.
//! - `dimensions_of` / `Index<Dimensions>` do the same on a declared grid.
//! - `wrap_char` is the single wrap-around primitive (true modulo).
//!
//! Alphabets are immutable once built; keyed permutations (`keyed`,
//! `shuffled`) return new alphabets instead of mutating shared ones.

pub mod alphabets;
pub mod dimensions;

pub use alphabets::*;
pub use dimensions::*;

use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::CipherError;
use crate::utils::{distinct_in_order, integer_sqrt, is_perfect_square, max_factor, wrap_index};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    positions: HashMap<char, usize>,
    dimensions: Option<Dimensions>,
}

impl Alphabet {
    /// Build from an ordered symbol string. Duplicates are rejected.
    pub fn new(symbols: &str) -> Result<Self, CipherError> {
        Self::from_symbols(symbols.chars().collect())
    }

    pub fn from_symbols(symbols: Vec<char>) -> Result<Self, CipherError> {
        if symbols.is_empty() {
            return Err(CipherError::EmptyAlphabet);
        }

        let mut positions = HashMap::with_capacity(symbols.len());
        for (i, &symbol) in symbols.iter().enumerate() {
            if positions.insert(symbol, i).is_some() {
                return Err(CipherError::DuplicateSymbol { symbol });
            }
        }

        Ok(Self { symbols, positions, dimensions: None })
    }

    /// Declare a `cols x rows` grid. The grid must cover every symbol exactly.
    pub fn with_dimensions(mut self, cols: usize, rows: usize) -> Result<Self, CipherError> {
        if cols == 0 || rows == 0 || cols * rows != self.len() {
            return Err(CipherError::GridMismatch { cols, rows, count: self.len() });
        }
        self.dimensions = Some(Dimensions::from((cols, rows)));
        Ok(self)
    }

    /// Pick a grid automatically: square when possible, otherwise the largest
    /// factor becomes the column count.
    pub fn auto_dimensions(mut self) -> Self {
        let count = self.len();
        let cols = if is_perfect_square(count) {
            integer_sqrt(count)
        } else {
            max_factor(count)
        };
        self.dimensions = Some(Dimensions::from((cols, count / cols)));
        self
    }

    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dimensions
    }

    /// Declared grid, or a single row when none was declared.
    pub fn grid(&self) -> Dimensions {
        self.dimensions
            .unwrap_or_else(|| Dimensions::from((self.len(), 1)))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn is_perfect_square(&self) -> bool {
        is_perfect_square(self.len())
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = &char> {
        self.symbols.iter()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.positions.contains_key(&symbol)
    }

    pub fn index_of(&self, symbol: char) -> Result<usize, CipherError> {
        self.positions
            .get(&symbol)
            .copied()
            .ok_or(CipherError::SymbolNotInAlphabet { symbol })
    }

    /// Map a whole text to indices, failing on the first foreign symbol.
    pub fn indices_of(&self, text: &str) -> Result<Vec<usize>, CipherError> {
        text.chars().map(|c| self.index_of(c)).collect()
    }

    /// Grid coordinates of a member. Requires declared dimensions.
    pub fn dimensions_of(&self, symbol: char) -> Result<Dimensions, CipherError> {
        let grid = self.dimensions.ok_or(CipherError::GridRequired)?;
        Ok(Self::coordinates(self.index_of(symbol)?, grid))
    }

    /// Coordinates of a flat index inside `grid`.
    pub fn coordinates(index: usize, grid: Dimensions) -> Dimensions {
        let cols = grid.x.max(1) as usize;
        Dimensions::from((index % cols, index / cols))
    }

    /// Flat index of a coordinate, after wrapping it into the grid.
    pub fn grid_index(&self, position: Dimensions) -> usize {
        let grid = self.grid();
        let p = position.limit(grid);
        (p.y * grid.x + p.x) as usize
    }

    /// Symbol at `index`, wrapped modulo the alphabet size.
    pub fn symbol(&self, index: i64) -> char {
        self.symbols[wrap_index(index, self.len())]
    }

    /// Symbol at a grid coordinate (wrapped via `Dimensions::limit`).
    pub fn at(&self, position: Dimensions) -> char {
        self.symbols[self.grid_index(position)]
    }

    /// The symbol `steps` positions away from `symbol`; steps may be negative.
    pub fn wrap_char(&self, symbol: char, steps: i64) -> Result<char, CipherError> {
        let index = self.index_of(symbol)? as i64;
        let steps = steps.rem_euclid(self.len() as i64);
        Ok(self.symbol(index + steps))
    }

    /// Remove `symbol` and reinsert it at `new_index`, shifting the symbols in
    /// between by one. Indices past the end clamp to the last slot.
    pub fn move_symbol(&mut self, symbol: char, new_index: usize) -> Result<(), CipherError> {
        let old = self.index_of(symbol)?;
        let target = new_index.min(self.len() - 1);

        self.symbols.remove(old);
        self.symbols.insert(target, symbol);

        let (lo, hi) = (old.min(target), old.max(target));
        for i in lo..=hi {
            self.positions.insert(self.symbols[i], i);
        }
        Ok(())
    }

    /// Keyed permutation: distinct key symbols first, in key order, then the
    /// remaining symbols in their original order. The grid shape is kept.
    pub fn keyed(&self, key: &str) -> Result<Alphabet, CipherError> {
        let head = distinct_in_order(key);
        for &c in &head {
            self.index_of(c)?;
        }

        let mut symbols = Vec::with_capacity(self.len());
        symbols.extend(head.iter().copied());
        symbols.extend(self.symbols.iter().copied().filter(|c| !head.contains(c)));

        let mut table = Alphabet::from_symbols(symbols)?;
        table.dimensions = self.dimensions;
        Ok(table)
    }

    /// Random permutation of the same symbols, grid shape kept.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Alphabet {
        let mut symbols = self.symbols.clone();
        symbols.shuffle(rng);

        let positions = symbols.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Alphabet { symbols, positions, dimensions: self.dimensions }
    }
}

impl Index<usize> for Alphabet {
    type Output = char;

    fn index(&self, index: usize) -> &char {
        &self.symbols[index % self.len()]
    }
}

impl Index<Dimensions> for Alphabet {
    type Output = char;

    fn index(&self, position: Dimensions) -> &char {
        &self.symbols[self.grid_index(position)]
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl FromStr for Alphabet {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alphabet::new(s)
    }
}
