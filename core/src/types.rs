//! types.rs
//! Unified error type for the cipher engine.
//!
//! Summary: every fallible operation in the crate returns `CipherError`.
//! Variants carry enough context for logs; `kind()` folds them onto the two
//! categories callers branch on.

use thiserror::Error;

use crate::classical::CipherKind;
use crate::utils::enum_name_or_hex;

/// Coarse error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Key/alphabet/input mismatch supplied by the caller.
    InvalidArgument,
    /// Structural problem with an alphabet, wheel or machine definition.
    InvalidConfiguration,
}

#[derive(Debug, Error)]
pub enum CipherError {
    // --- InvalidArgument ---
    /// Symbol is not a member of the configured alphabet.
    #[error("symbol {symbol:?} is not in the alphabet")]
    SymbolNotInAlphabet { symbol: char },

    /// Key has the wrong number of symbols.
    #[error("invalid key length: expected={expected}, actual={actual}")]
    KeyLength { expected: usize, actual: usize },

    /// Key must contain at least one symbol.
    #[error("key must not be empty")]
    EmptyKey,

    /// Algorithm needs a two-dimensional alphabet.
    #[error("alphabet has no grid dimensions")]
    GridRequired,

    /// Playfair grids need an even symbol count.
    #[error("grid requires an even symbol count, got {count}")]
    OddGrid { count: usize },

    /// Unknown numeric cipher id.
    #[error("unsupported cipher: {}", enum_name_or_hex::<CipherKind>(*cipher_id))]
    UnsupportedCipher { cipher_id: u16 },

    /// Unknown cipher or preset name.
    #[error("unknown name: {name}")]
    UnknownName { name: String },

    // --- InvalidConfiguration ---
    /// Alphabet must hold at least one symbol.
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// Alphabet symbols must be unique.
    #[error("duplicate symbol {symbol:?} in alphabet")]
    DuplicateSymbol { symbol: char },

    /// Declared grid does not cover the alphabet exactly.
    #[error("grid {cols}x{rows} does not match {count} symbols")]
    GridMismatch { cols: usize, rows: usize, count: usize },

    /// Wiring must list exactly one symbol per alphabet position.
    #[error("wiring length mismatch: expected={expected}, actual={actual}")]
    WiringLength { expected: usize, actual: usize },

    /// Wiring is not a permutation of the alphabet.
    #[error("wiring is not a permutation: symbol {symbol:?} repeated or foreign")]
    WiringNotPermutation { symbol: char },

    /// Reflector pairs must be symmetric.
    #[error("reflector is not involutory at {symbol:?}")]
    ReflectorNotInvolutory { symbol: char },

    /// Reflector must not map a symbol onto itself.
    #[error("reflector maps {symbol:?} onto itself")]
    ReflectorFixedPoint { symbol: char },

    /// A fixed-point-free involution needs an even number of symbols.
    #[error("cannot build a reflector over an odd symbol count ({count})")]
    OddReflector { count: usize },

    /// Plugboard socket already used, or paired with itself.
    #[error("plugboard conflict on {symbol:?}")]
    PlugConflict { symbol: char },

    /// Plugboard pair is not exactly two symbols.
    #[error("malformed plugboard pair {pair:?}")]
    MalformedPlug { pair: String },

    /// Machine needs at least one rotor.
    #[error("machine has no rotors")]
    NoRotors,

    /// Wheel was wired for a different alphabet size.
    #[error("wheel size mismatch: alphabet={alphabet}, wheel={wheel}")]
    WheelSizeMismatch { alphabet: usize, wheel: usize },

    /// Rotor state does not fit the machine.
    #[error("invalid rotor state: {0}")]
    InvalidState(String),

    /// Configuration document could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl CipherError {
    pub fn kind(&self) -> ErrorKind {
        use CipherError::*;
        match self {
            SymbolNotInAlphabet { .. }
            | KeyLength { .. }
            | EmptyKey
            | GridRequired
            | OddGrid { .. }
            | UnsupportedCipher { .. }
            | UnknownName { .. } => ErrorKind::InvalidArgument,

            EmptyAlphabet
            | DuplicateSymbol { .. }
            | GridMismatch { .. }
            | WiringLength { .. }
            | WiringNotPermutation { .. }
            | ReflectorNotInvolutory { .. }
            | ReflectorFixedPoint { .. }
            | OddReflector { .. }
            | PlugConflict { .. }
            | MalformedPlug { .. }
            | NoRotors
            | WheelSizeMismatch { .. }
            | InvalidState(_)
            | Config(_) => ErrorKind::InvalidConfiguration,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub fn is_invalid_configuration(&self) -> bool {
        self.kind() == ErrorKind::InvalidConfiguration
    }
}
