//! config.rs
//! Serde configuration surface for ciphers and machines.
//!
//! Summary: plain-data descriptions that deserialize from JSON and `build()`
//! into live objects. Every check runs in `build()`, through the same
//! constructors the programmatic API uses.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::classical::{create_kind, CipherKind, ClassicalCipher, PreferredOrientation};
use crate::enigma::{EnigmaMachine, Reflector, Rotor, StandardMachines, Stator, SteppingRule};
use crate::types::CipherError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub cols: usize,
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetConfig {
    pub symbols: String,

    /// Explicit grid. Takes precedence over `auto_grid`.
    #[serde(default)]
    pub grid: Option<GridConfig>,

    /// Derive a grid from the symbol count when none is given.
    #[serde(default)]
    pub auto_grid: bool,
}

impl AlphabetConfig {
    pub fn new(symbols: impl Into<String>) -> Self {
        Self { symbols: symbols.into(), grid: None, auto_grid: false }
    }

    pub fn build(&self) -> Result<Alphabet, CipherError> {
        let alphabet = Alphabet::new(&self.symbols)?;
        match (self.grid, self.auto_grid) {
            (Some(grid), _) => alphabet.with_dimensions(grid.cols, grid.rows),
            (None, true) => Ok(alphabet.auto_dimensions()),
            (None, false) => Ok(alphabet),
        }
    }
}

/// One classical cipher, tagged by `"algorithm"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum CipherConfig {
    Caesar {
        alphabet: AlphabetConfig,
        key: String,
    },
    Vigenere {
        alphabet: AlphabetConfig,
        key: String,
    },
    Playfair {
        alphabet: AlphabetConfig,
        key: String,
        #[serde(default)]
        orientation: PreferredOrientation,
    },
}

impl CipherConfig {
    pub fn from_json(json: &str) -> Result<Self, CipherError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CipherError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn kind(&self) -> CipherKind {
        match self {
            CipherConfig::Caesar { .. } => CipherKind::Caesar,
            CipherConfig::Vigenere { .. } => CipherKind::Vigenere,
            CipherConfig::Playfair { .. } => CipherKind::Playfair,
        }
    }

    pub fn build(&self) -> Result<ClassicalCipher, CipherError> {
        let (alphabet, key, orientation) = match self {
            CipherConfig::Caesar { alphabet, key } | CipherConfig::Vigenere { alphabet, key } => {
                (alphabet, key, None)
            }
            CipherConfig::Playfair { alphabet, key, orientation } => (alphabet, key, Some(*orientation)),
        };
        create_kind(self.kind(), Arc::new(alphabet.build()?), key, orientation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorConfig {
    pub wiring: String,

    /// Window symbols that carry into the next rotor.
    #[serde(default)]
    pub turnover: String,

    #[serde(default)]
    pub stationary: bool,
}

/// A named preset, optionally keyed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetConfig {
    pub preset: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub auto_reset: Option<bool>,
}

/// A machine wired from scratch. Rotors are listed fastest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiredMachineConfig {
    pub alphabet: AlphabetConfig,

    /// Identity when absent.
    #[serde(default)]
    pub stator: Option<String>,

    pub rotors: Vec<RotorConfig>,
    pub reflector: String,

    /// Cable pairs, two symbols each, e.g. `"AB"`.
    #[serde(default)]
    pub plugboard: Vec<String>,

    #[serde(default)]
    pub stepping: SteppingRule,

    #[serde(default)]
    pub auto_reset: bool,

    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MachineConfig {
    Preset(PresetConfig),
    Wired(WiredMachineConfig),
}

impl MachineConfig {
    pub fn from_json(json: &str) -> Result<Self, CipherError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CipherError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn build(&self) -> Result<EnigmaMachine, CipherError> {
        match self {
            MachineConfig::Preset(config) => config.build(),
            MachineConfig::Wired(config) => config.build(),
        }
    }
}

impl PresetConfig {
    pub fn build(&self) -> Result<EnigmaMachine, CipherError> {
        let mut machine = StandardMachines::by_name(&self.preset)?;
        if let Some(auto_reset) = self.auto_reset {
            machine.set_auto_reset(auto_reset);
        }
        if let Some(key) = &self.key {
            machine.set_key(key)?;
        }
        Ok(machine)
    }
}

impl WiredMachineConfig {
    pub fn build(&self) -> Result<EnigmaMachine, CipherError> {
        let alphabet = self.alphabet.build()?;
        let stator = match &self.stator {
            Some(wiring) => Stator::new(&alphabet, wiring)?,
            None => Stator::identity(&alphabet),
        };
        let rotors = self
            .rotors
            .iter()
            .map(|r| -> Result<Rotor, CipherError> {
                let rotor = Rotor::new(&alphabet, &r.wiring, &r.turnover)?;
                Ok(if r.stationary { rotor.stationary() } else { rotor })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let reflector = Reflector::new(&alphabet, &self.reflector)?;

        let mut machine = EnigmaMachine::new(Arc::new(alphabet), stator, rotors, reflector)?
            .with_stepping(self.stepping)
            .with_auto_reset(self.auto_reset);

        for pair in &self.plugboard {
            let symbols: Vec<char> = pair.chars().collect();
            match symbols.as_slice() {
                [a, b] => machine.plug(*a, *b)?,
                _ => return Err(CipherError::MalformedPlug { pair: pair.clone() }),
            }
        }
        if let Some(key) = &self.key {
            machine.set_key(key)?;
        }
        Ok(machine)
    }
}
