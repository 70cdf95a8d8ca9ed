//! classical/registry.rs
//! Cipher registry and factory functions.

use std::fmt;
use std::sync::Arc;

use num_enum::TryFromPrimitive;

use crate::alphabet::Alphabet;
use crate::classical::{Caesar, ClassicalCipher, Playfair, PreferredOrientation, Vigenere};
use crate::constants::cipher_ids;
use crate::types::CipherError;

/// Closed set of classical algorithms, keyed by stable id.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum CipherKind {
    Caesar   = cipher_ids::CAESAR,
    Vigenere = cipher_ids::VIGENERE,
    Playfair = cipher_ids::PLAYFAIR,
}

impl CipherKind {
    pub const ALL: [CipherKind; 3] = [CipherKind::Caesar, CipherKind::Vigenere, CipherKind::Playfair];

    pub fn id(self) -> u16 {
        self as u16
    }

    pub fn from_id(raw: u16) -> Result<Self, CipherError> {
        CipherKind::try_from_primitive(raw)
            .map_err(|_| CipherError::UnsupportedCipher { cipher_id: raw })
    }

    /// Case-insensitive lookup by registry name.
    pub fn from_name(name: &str) -> Result<Self, CipherError> {
        CipherKind::ALL
            .into_iter()
            .find(|kind| resolve_kind(*kind).name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CipherError::UnknownName { name: name.to_owned() })
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(resolve_kind(*self).name)
    }
}

/// Static facts about an algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherInfo {
    pub name: &'static str,
    pub min_key_len: usize,
    /// `None` means unbounded.
    pub max_key_len: Option<usize>,
    pub requires_grid: bool,
}

fn resolve_kind(kind: CipherKind) -> CipherInfo {
    match kind {
        CipherKind::Caesar =>
            CipherInfo { name: "caesar", min_key_len: 1, max_key_len: Some(1), requires_grid: false },
        CipherKind::Vigenere =>
            CipherInfo { name: "vigenere", min_key_len: 1, max_key_len: None, requires_grid: false },
        CipherKind::Playfair =>
            CipherInfo { name: "playfair", min_key_len: 1, max_key_len: None, requires_grid: true },
    }
}

pub fn resolve(cipher_id: u16) -> Result<CipherInfo, CipherError> {
    Ok(resolve_kind(CipherKind::from_id(cipher_id)?))
}

/// Build a configured cipher from its id. `orientation` only matters for
/// Playfair and defaults to horizontal.
pub fn create_cipher(
    cipher_id: u16,
    alphabet: Arc<Alphabet>,
    key: &str,
    orientation: Option<PreferredOrientation>,
) -> Result<ClassicalCipher, CipherError> {
    create_kind(CipherKind::from_id(cipher_id)?, alphabet, key, orientation)
}

pub fn create_kind(
    kind: CipherKind,
    alphabet: Arc<Alphabet>,
    key: &str,
    orientation: Option<PreferredOrientation>,
) -> Result<ClassicalCipher, CipherError> {
    match kind {
        CipherKind::Caesar => Ok(ClassicalCipher::Caesar(Caesar::new(alphabet, key)?)),
        CipherKind::Vigenere => Ok(ClassicalCipher::Vigenere(Vigenere::new(alphabet, key)?)),
        CipherKind::Playfair => Ok(ClassicalCipher::Playfair(Playfair::new(
            alphabet,
            key,
            orientation.unwrap_or_default(),
        )?)),
    }
}
