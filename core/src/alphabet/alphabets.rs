//! alphabet/alphabets.rs
//! Standard symbol sets.

use crate::alphabet::Alphabet;
use crate::constants::{symbols, PRINTABLE_ASCII_END, PRINTABLE_ASCII_START};
use crate::types::CipherError;

/// Factory for the commonly used alphabets. Each call builds a fresh value.
pub struct Alphabets;

impl Alphabets {
    /// `A..Z`, 13x2 grid.
    pub fn english_caps() -> Result<Alphabet, CipherError> {
        Ok(Alphabet::new(symbols::ENGLISH_CAPS)?.auto_dimensions())
    }

    /// `a..z`, 13x2 grid.
    pub fn english_small() -> Result<Alphabet, CipherError> {
        Ok(Alphabet::new(symbols::ENGLISH_SMALL)?.auto_dimensions())
    }

    /// Lower, upper, then digits (62 symbols, 31x2 grid).
    pub fn alpha_numeric() -> Result<Alphabet, CipherError> {
        Ok(Alphabet::new(symbols::ALPHA_NUMERIC)?.auto_dimensions())
    }

    /// Space through tilde (95 symbols, 19x5 grid).
    pub fn printable_ascii() -> Result<Alphabet, CipherError> {
        let symbols = (PRINTABLE_ASCII_START..=PRINTABLE_ASCII_END)
            .map(char::from)
            .collect();
        Ok(Alphabet::from_symbols(symbols)?.auto_dimensions())
    }

    /// Printable ASCII plus five accented vowels: 100 symbols on a 10x10 grid.
    pub fn ascii_perfect() -> Result<Alphabet, CipherError> {
        let symbols = (PRINTABLE_ASCII_START..=PRINTABLE_ASCII_END)
            .map(char::from)
            .chain(symbols::ASCII_PERFECT_EXTRA.chars())
            .collect();
        Ok(Alphabet::from_symbols(symbols)?.auto_dimensions())
    }

    /// All 128 seven-bit code points, 16x8 grid.
    pub fn ascii() -> Result<Alphabet, CipherError> {
        let symbols = (0u8..=0x7f).map(char::from).collect();
        Alphabet::from_symbols(symbols)?.with_dimensions(16, 8)
    }

    /// The 28-symbol Swedish set of the A133 machine, 7x4 grid.
    pub fn swedish() -> Result<Alphabet, CipherError> {
        Ok(Alphabet::new(symbols::SWEDISH)?.auto_dimensions())
    }
}
