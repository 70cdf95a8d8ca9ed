//! enigma/wheel.rs
//! Wired wheels: stator (entry wheel), rotors and reflector.
//!
//! Summary: every wheel is a permutation of alphabet indices. Wiring strings
//! list, for each contact in alphabet order, the symbol it is wired to.
//!
//! Notes:
//! - Rotor contacts are offset by the rotor position on the way in and
//!   shifted back on the way out: `(perm[(x + o) % n] - o) mod n`.
//! - A rotor's turnover set holds the positions that, once reached, carry a
//!   step into the next slower rotor.
//! - Reflectors must be involutions without fixed points.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::alphabet::Alphabet;
use crate::types::CipherError;

/// Forward permutation plus its precomputed inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring {
    forward: Vec<usize>,
    backward: Vec<usize>,
}

impl Wiring {
    /// Parse a wiring string against `alphabet`. It must be a permutation of
    /// the alphabet's symbols.
    pub fn new(alphabet: &Alphabet, wiring: &str) -> Result<Self, CipherError> {
        let symbols: Vec<char> = wiring.chars().collect();
        if symbols.len() != alphabet.len() {
            return Err(CipherError::WiringLength { expected: alphabet.len(), actual: symbols.len() });
        }

        let mut seen = vec![false; alphabet.len()];
        let mut forward = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let index = alphabet
                .index_of(symbol)
                .map_err(|_| CipherError::WiringNotPermutation { symbol })?;
            if seen[index] {
                return Err(CipherError::WiringNotPermutation { symbol });
            }
            seen[index] = true;
            forward.push(index);
        }

        Ok(Self::from_permutation(forward))
    }

    pub fn identity(len: usize) -> Self {
        Self::from_permutation((0..len).collect())
    }

    // Caller guarantees `forward` is a permutation of 0..len.
    fn from_permutation(forward: Vec<usize>) -> Self {
        let mut backward = vec![0; forward.len()];
        for (i, &o) in forward.iter().enumerate() {
            backward[o] = i;
        }
        Self { forward, backward }
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    #[inline]
    pub fn forward(&self, pin: usize) -> usize {
        self.forward[pin]
    }

    #[inline]
    pub fn backward(&self, pin: usize) -> usize {
        self.backward[pin]
    }

    /// The wiring rendered back as symbols of `alphabet`.
    pub fn describe(&self, alphabet: &Alphabet) -> String {
        self.forward.iter().map(|&i| alphabet[i]).collect()
    }
}

/// Fixed entry wheel between the plugboard and the first rotor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stator {
    wiring: Wiring,
}

impl Stator {
    pub fn new(alphabet: &Alphabet, wiring: &str) -> Result<Self, CipherError> {
        Ok(Self { wiring: Wiring::new(alphabet, wiring)? })
    }

    pub fn identity(alphabet: &Alphabet) -> Self {
        Self { wiring: Wiring::identity(alphabet.len()) }
    }

    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    pub fn len(&self) -> usize {
        self.wiring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wiring.is_empty()
    }

    #[inline]
    pub fn forward(&self, pin: usize) -> usize {
        self.wiring.forward(pin)
    }

    #[inline]
    pub fn backward(&self, pin: usize) -> usize {
        self.wiring.backward(pin)
    }
}

/// Turnaround wheel. Pairs contacts so the whole machine is self-inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: Wiring,
}

impl Reflector {
    pub fn new(alphabet: &Alphabet, wiring: &str) -> Result<Self, CipherError> {
        let wiring = Wiring::new(alphabet, wiring)?;
        for i in 0..wiring.len() {
            let o = wiring.forward(i);
            if o == i {
                return Err(CipherError::ReflectorFixedPoint { symbol: alphabet[i] });
            }
            if wiring.forward(o) != i {
                return Err(CipherError::ReflectorNotInvolutory { symbol: alphabet[i] });
            }
        }
        Ok(Self { wiring })
    }

    /// Random pairing of `len` contacts. `len` must be even.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Self, CipherError> {
        if len == 0 || len % 2 != 0 {
            return Err(CipherError::OddReflector { count: len });
        }

        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(rng);

        let mut forward = vec![0; len];
        for pair in order.chunks_exact(2) {
            forward[pair[0]] = pair[1];
            forward[pair[1]] = pair[0];
        }
        Ok(Self { wiring: Wiring::from_permutation(forward) })
    }

    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    pub fn len(&self) -> usize {
        self.wiring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wiring.is_empty()
    }

    #[inline]
    pub fn reflect(&self, pin: usize) -> usize {
        self.wiring.forward(pin)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Wiring,
    turnovers: Vec<usize>,
    stationary: bool,
}

impl Rotor {
    /// `turnovers` lists the positions (as symbols) at which this rotor
    /// carries into the next one. An empty string means it never carries.
    pub fn new(alphabet: &Alphabet, wiring: &str, turnovers: &str) -> Result<Self, CipherError> {
        let wiring = Wiring::new(alphabet, wiring)?;
        let mut positions = alphabet.indices_of(turnovers)?;
        positions.sort_unstable();
        positions.dedup();

        Ok(Self { wiring, turnovers: positions, stationary: false })
    }

    /// A rotor that is never advanced, like the M4 Greek wheel. It still
    /// takes a start position from the key.
    pub fn stationary(mut self) -> Self {
        self.stationary = true;
        self
    }

    pub fn is_stationary(&self) -> bool {
        self.stationary
    }

    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    pub fn turnovers(&self) -> &[usize] {
        &self.turnovers
    }

    pub fn len(&self) -> usize {
        self.wiring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wiring.is_empty()
    }

    #[inline]
    pub fn forward(&self, pin: usize, offset: usize) -> usize {
        let n = self.len();
        (self.wiring.forward((pin + offset) % n) + n - offset) % n
    }

    #[inline]
    pub fn backward(&self, pin: usize, offset: usize) -> usize {
        let n = self.len();
        (self.wiring.backward((pin + offset) % n) + n - offset) % n
    }

    /// True when `offset` is one of this rotor's carry positions.
    pub fn is_turnover(&self, offset: usize) -> bool {
        self.turnovers.binary_search(&offset).is_ok()
    }

    /// True when the next advance would land on a carry position.
    pub fn is_pre_turnover(&self, offset: usize) -> bool {
        self.is_turnover((offset + 1) % self.len())
    }
}
