//! classical-core
//!
//! Classical cipher engine: alphabets, Caesar / Vigenère / Playfair and a
//! rotor machine simulation.
//! No I/O, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Symbol space
pub mod alphabet;

// Ciphers
pub mod classical;
pub mod enigma;

pub mod config;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::alphabet::{Alphabet, Alphabets, Dimensions};
    pub use crate::classical::{
        create_cipher, resolve, Caesar, CipherKind, ClassicalCipher, DictionaryAttack, Playfair,
        PreferredOrientation, Transform, Vigenere,
    };
    pub use crate::config::{AlphabetConfig, CipherConfig, MachineConfig};
    pub use crate::enigma::{
        EnigmaMachine, EnigmaMachineBuilder, Plugboard, Reflector, Rotor, RotorState, StandardMachines,
        StandardWheels, Stator, SteppingRule,
    };
    pub use crate::telemetry::{TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
    pub use crate::types::{CipherError, ErrorKind};
}
