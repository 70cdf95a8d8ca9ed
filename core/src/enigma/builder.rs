//! enigma/builder.rs
//! Builder for machines with generated wheels.
//!
//! Summary: anything not supplied explicitly is generated. The stator
//! defaults to identity; the reflector and rotors are drawn at random from a
//! seeded or entropy-backed `StdRng`.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::alphabet::{Alphabet, Alphabets};
use crate::constants::{DEFAULT_NOTCH_COUNT, DEFAULT_ROTOR_COUNT};
use crate::enigma::{EnigmaMachine, Plugboard, Reflector, Rotor, Stator, SteppingRule};
use crate::types::CipherError;

#[derive(Debug, Clone)]
pub struct EnigmaMachineBuilder {
    alphabet: Option<Alphabet>,
    rotor_count: usize,
    notch_count: usize,
    stator: Option<Stator>,
    rotors: Option<Vec<Rotor>>,
    reflector: Option<Reflector>,
    plugboard: Option<Plugboard>,
    auto_reset: bool,
    stepping: SteppingRule,
    seed: Option<u64>,
    key: Option<String>,
}

impl Default for EnigmaMachineBuilder {
    fn default() -> Self {
        Self {
            alphabet: None,
            rotor_count: DEFAULT_ROTOR_COUNT,
            notch_count: DEFAULT_NOTCH_COUNT,
            stator: None,
            rotors: None,
            reflector: None,
            plugboard: None,
            auto_reset: false,
            stepping: SteppingRule::default(),
            seed: None,
            key: None,
        }
    }
}

impl EnigmaMachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults to `Alphabets::ascii()`.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }

    /// Number of generated rotors. Ignored when rotors are given explicitly.
    pub fn with_rotor_count(mut self, count: usize) -> Self {
        self.rotor_count = count;
        self
    }

    /// Turnover positions per generated rotor.
    pub fn with_notch_count(mut self, count: usize) -> Self {
        self.notch_count = count;
        self
    }

    pub fn with_stator(mut self, stator: Stator) -> Self {
        self.stator = Some(stator);
        self
    }

    /// Explicit rotors, fastest first.
    pub fn with_rotors(mut self, rotors: Vec<Rotor>) -> Self {
        self.rotors = Some(rotors);
        self
    }

    pub fn with_reflector(mut self, reflector: Reflector) -> Self {
        self.reflector = Some(reflector);
        self
    }

    /// Checked against the alphabet in `build`.
    pub fn with_plugboard(mut self, plugboard: Plugboard) -> Self {
        self.plugboard = Some(plugboard);
        self
    }

    pub fn with_auto_reset(mut self, auto_reset: bool) -> Self {
        self.auto_reset = auto_reset;
        self
    }

    pub fn with_stepping(mut self, stepping: SteppingRule) -> Self {
        self.stepping = stepping;
        self
    }

    /// Fix the RNG so generated wheels are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    fn random_rotor(alphabet: &Alphabet, notches: usize, rng: &mut StdRng) -> Result<Rotor, CipherError> {
        let wiring = alphabet.shuffled(rng).to_string();
        let turnovers: String = index::sample(rng, alphabet.len(), notches.min(alphabet.len()))
            .into_iter()
            .map(|i| alphabet[i])
            .collect();
        Rotor::new(alphabet, &wiring, &turnovers)
    }

    pub fn build(self) -> Result<EnigmaMachine, CipherError> {
        let alphabet = match self.alphabet {
            Some(alphabet) => alphabet,
            None => Alphabets::ascii()?,
        };
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let stator = self.stator.unwrap_or_else(|| Stator::identity(&alphabet));
        let reflector = match self.reflector {
            Some(reflector) => reflector,
            None => Reflector::random(alphabet.len(), &mut rng)?,
        };
        let rotors = match self.rotors {
            Some(rotors) => rotors,
            None => (0..self.rotor_count)
                .map(|_| Self::random_rotor(&alphabet, self.notch_count, &mut rng))
                .collect::<Result<Vec<_>, _>>()?,
        };

        let mut machine = EnigmaMachine::new(Arc::new(alphabet), stator, rotors, reflector)?
            .with_auto_reset(self.auto_reset)
            .with_stepping(self.stepping);
        if let Some(plugboard) = self.plugboard {
            machine = machine.with_plugboard(plugboard)?;
        }
        if let Some(key) = self.key {
            machine.set_key(&key)?;
        }
        Ok(machine)
    }
}
