//! enigma/machine.rs
//! Rotor machine: plugboard, stator, stepping rotors and reflector.
//!
//! Summary: one key press steps the rotors, then sends the symbol through
//! plugboard -> stator -> rotors (fastest first) -> reflector -> rotors
//! (slowest first, inverse wiring) -> stator inverse -> plugboard.
//!
//! Notes:
//! - Rotors are stored fastest-first. `RotorState.offsets[0]` is the
//!   fastest rotor.
//! - Encrypt and decrypt are the same pipeline. With equal start offsets
//!   the machine is its own inverse.
//! - Input is mapped to indices before anything steps, so a bad symbol
//!   never moves the rotors and never yields partial output.
//! - One machine per session. `run` mutates rotor state and needs `&mut`.

use std::sync::Arc;

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::enigma::{Plugboard, Reflector, Rotor, Stator};
use crate::telemetry::TelemetryCounters;
use crate::types::CipherError;

/// How a turnover carries into the next rotor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SteppingRule {
    /// Pawl-and-notch coupling, including the double step of middle rotors.
    #[default]
    Lever,
    /// Plain carry: a rotor only moves when the faster one turns over.
    Odometer,
}

/// Rotor offsets, fastest rotor first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub struct RotorState {
    pub offsets: Vec<usize>,
}

impl RotorState {
    pub fn zeroed(rotors: usize) -> Self {
        Self { offsets: vec![0; rotors] }
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }
}

impl From<Vec<usize>> for RotorState {
    fn from(offsets: Vec<usize>) -> Self {
        Self { offsets }
    }
}

#[derive(Debug, Clone)]
pub struct EnigmaMachine {
    alphabet: Arc<Alphabet>,
    stator: Stator,
    rotors: Vec<Rotor>,
    reflector: Reflector,
    plugboard: Plugboard,
    stepping: SteppingRule,
    auto_reset: bool,
    key: Option<String>,
    start: RotorState,
    state: RotorState,
    counters: TelemetryCounters,
}

impl EnigmaMachine {
    /// Assemble a machine. Every wheel must have exactly one contact per
    /// alphabet symbol. Offsets start at zero until a key is set.
    pub fn new(
        alphabet: Arc<Alphabet>,
        stator: Stator,
        rotors: Vec<Rotor>,
        reflector: Reflector,
    ) -> Result<Self, CipherError> {
        if rotors.is_empty() {
            return Err(CipherError::NoRotors);
        }

        let size = alphabet.len();
        let wheels = std::iter::once(stator.len())
            .chain(std::iter::once(reflector.len()))
            .chain(rotors.iter().map(Rotor::len));
        for wheel in wheels {
            if wheel != size {
                return Err(CipherError::WheelSizeMismatch { alphabet: size, wheel });
            }
        }

        log::debug!("enigma machine built: {} symbols, {} rotors", size, rotors.len());

        let start = RotorState::zeroed(rotors.len());
        Ok(Self {
            alphabet,
            stator,
            rotors,
            reflector,
            plugboard: Plugboard::new(),
            stepping: SteppingRule::default(),
            auto_reset: false,
            key: None,
            state: start.clone(),
            start,
            counters: TelemetryCounters::default(),
        })
    }

    pub fn with_auto_reset(mut self, auto_reset: bool) -> Self {
        self.auto_reset = auto_reset;
        self
    }

    pub fn with_stepping(mut self, stepping: SteppingRule) -> Self {
        self.stepping = stepping;
        self
    }

    /// Install a prebuilt plugboard. Every plugged index must address a
    /// symbol of this machine's alphabet.
    pub fn with_plugboard(mut self, plugboard: Plugboard) -> Result<Self, CipherError> {
        let size = self.alphabet.len();
        if let Some(highest) = plugboard.highest_index() {
            if highest >= size {
                return Err(CipherError::WheelSizeMismatch { alphabet: size, wheel: highest + 1 });
            }
        }
        self.plugboard = plugboard;
        Ok(self)
    }

    pub fn set_auto_reset(&mut self, auto_reset: bool) {
        self.auto_reset = auto_reset;
    }

    pub fn auto_reset(&self) -> bool {
        self.auto_reset
    }

    pub fn set_stepping(&mut self, stepping: SteppingRule) {
        self.stepping = stepping;
    }

    pub fn stepping(&self) -> SteppingRule {
        self.stepping
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn stator(&self) -> &Stator {
        &self.stator
    }

    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Add a plugboard cable between `a` and `b`.
    pub fn plug(&mut self, a: char, b: char) -> Result<(), CipherError> {
        self.plugboard.connect(&self.alphabet, a, b)
    }

    pub fn unplug(&mut self, symbol: char) -> Result<bool, CipherError> {
        self.plugboard.disconnect(&self.alphabet, symbol)
    }

    /// Set the start positions, one key symbol per rotor (fastest first),
    /// and move the rotors there.
    pub fn set_key(&mut self, key: &str) -> Result<(), CipherError> {
        let actual = key.chars().count();
        if actual != self.rotors.len() {
            return Err(CipherError::KeyLength { expected: self.rotors.len(), actual });
        }
        let offsets = self.alphabet.indices_of(key)?;

        self.start = RotorState { offsets };
        self.key = Some(key.to_owned());
        log::debug!("enigma key set: start offsets {:?}", self.start.offsets);
        self.reset_rotors();
        Ok(())
    }

    /// Drop the key. Start positions fall back to all zeros.
    pub fn clear_key(&mut self) {
        self.key = None;
        self.start = RotorState::zeroed(self.rotors.len());
        self.reset_rotors();
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Move every rotor back to its key-derived start position.
    pub fn reset_rotors(&mut self) {
        self.state.clone_from(&self.start);
        self.counters.add_reset();
        log::trace!("rotors reset to {:?}", self.state.offsets);
    }

    pub fn state(&self) -> &RotorState {
        &self.state
    }

    /// Same as `state().offsets()`.
    pub fn rotor_config(&self) -> &[usize] {
        &self.state.offsets
    }

    /// Restore a checkpoint taken with `state()`.
    pub fn set_state(&mut self, state: RotorState) -> Result<(), CipherError> {
        if state.offsets.len() != self.rotors.len() {
            return Err(CipherError::InvalidState(format!(
                "expected {} offsets, got {}",
                self.rotors.len(),
                state.offsets.len()
            )));
        }
        if let Some(&bad) = state.offsets.iter().find(|&&o| o >= self.alphabet.len()) {
            return Err(CipherError::InvalidState(format!(
                "offset {} out of range for {} symbols",
                bad,
                self.alphabet.len()
            )));
        }
        self.state = state;
        Ok(())
    }

    /// Symbols showing in the rotor windows, fastest first.
    pub fn windows(&self) -> String {
        self.state.offsets.iter().map(|&o| self.alphabet[o]).collect()
    }

    pub fn telemetry(&self) -> &TelemetryCounters {
        &self.counters
    }

    pub fn reset_telemetry(&mut self) {
        self.counters = TelemetryCounters::default();
    }

    // A rotor double steps when the pawl of the next rotor drops into its
    // notch. Only rotors with a stepping neighbour on the slow side have that
    // pawl engaged, and the fastest rotor moves on every press anyway.
    fn lever_engaged(&self, i: usize) -> bool {
        i > 0
            && i + 1 < self.rotors.len()
            && !self.rotors[i].is_stationary()
            && !self.rotors[i + 1].is_stationary()
            && self.rotors[i].is_pre_turnover(self.state.offsets[i])
    }

    fn step(&mut self) {
        let n = self.rotors.len();
        let size = self.alphabet.len();
        let mut advance = vec![false; n];
        advance[0] = true;

        if self.stepping == SteppingRule::Lever {
            for i in 1..n {
                if self.lever_engaged(i) {
                    advance[i] = true;
                    self.counters.add_double_step();
                }
            }
        }

        let mut moved = 0;
        for i in 0..n {
            if !advance[i] || self.rotors[i].is_stationary() {
                continue;
            }
            let offset = (self.state.offsets[i] + 1) % size;
            self.state.offsets[i] = offset;
            moved += 1;

            if i + 1 < n && self.rotors[i].is_turnover(offset) {
                advance[i + 1] = true;
            }
        }
        self.counters.add_rotor_steps(moved);
    }

    fn signal(&self, index: usize) -> usize {
        let offsets = &self.state.offsets;

        let mut x = self.plugboard.swap(index);
        x = self.stator.forward(x);
        for (rotor, &offset) in self.rotors.iter().zip(offsets) {
            x = rotor.forward(x, offset);
        }
        x = self.reflector.reflect(x);
        for (rotor, &offset) in self.rotors.iter().zip(offsets).rev() {
            x = rotor.backward(x, offset);
        }
        x = self.stator.backward(x);
        self.plugboard.swap(x)
    }

    fn press_index(&mut self, index: usize) -> usize {
        self.step();
        self.signal(index)
    }

    /// One key press: step, then encipher `symbol`. Never auto-resets.
    pub fn press(&mut self, symbol: char) -> Result<char, CipherError> {
        let index = self.alphabet.index_of(symbol)?;
        let o = self.press_index(index);
        let out = self.alphabet[o];
        self.counters.add_symbols(1, 1);
        Ok(out)
    }

    /// Encipher a whole message. With auto-reset on, the rotors go back to
    /// the key positions first, so repeated calls give the same output.
    pub fn run(&mut self, input: &str) -> Result<String, CipherError> {
        let indices = self.alphabet.indices_of(input)?;
        let count = indices.len();
        if self.auto_reset {
            self.reset_rotors();
        }

        let output: String = indices
            .into_iter()
            .map(|i| {
                let o = self.press_index(i);
                self.alphabet[o]
            })
            .collect();

        self.counters.add_message(count, count);
        log::trace!("enigma run: {} symbols, windows now {}", count, self.windows());
        Ok(output)
    }

    pub fn encrypt(&mut self, input: &str) -> Result<String, CipherError> {
        self.run(input)
    }

    pub fn decrypt(&mut self, input: &str) -> Result<String, CipherError> {
        self.run(input)
    }
}
