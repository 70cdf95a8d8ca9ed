//! classical/mod.rs
//! Stateless, key-parameterized classical ciphers.
//!
//! Notes:
//! - Every algorithm is a pure function of (alphabet, key, input, direction).
//! - `run(run(x, true), false) == x` holds for Caesar and Vigenère on any
//!   input, and for Playfair on even-length input.
//! - Input symbols are validated before any output is produced.
//! - Instances are `Send + Sync` and can be shared across threads.

pub mod attack;
pub mod caesar;
pub mod playfair;
pub mod registry;
pub mod vigenere;

pub use attack::*;
pub use caesar::*;
pub use playfair::*;
pub use registry::*;
pub use vigenere::*;

use std::time::Instant;

use crate::alphabet::Alphabet;
use crate::telemetry::{Stage, TelemetryCounters, TelemetryTimer};
use crate::types::CipherError;

/// The single "apply transform" interface all classical ciphers share.
pub trait Transform {
    fn alphabet(&self) -> &Alphabet;

    fn key(&self) -> &str;

    /// Run forward (encrypt) or backward (decrypt).
    fn run(&self, input: &str, forward: bool) -> Result<String, CipherError>;

    fn encrypt(&self, input: &str) -> Result<String, CipherError> {
        self.run(input, true)
    }

    fn decrypt(&self, input: &str) -> Result<String, CipherError> {
        self.run(input, false)
    }
}

/// Closed set of classical algorithms behind one dispatch point.
#[derive(Debug, Clone)]
pub enum ClassicalCipher {
    Caesar(Caesar),
    Vigenere(Vigenere),
    Playfair(Playfair),
}

impl ClassicalCipher {
    pub fn kind(&self) -> CipherKind {
        match self {
            ClassicalCipher::Caesar(_) => CipherKind::Caesar,
            ClassicalCipher::Vigenere(_) => CipherKind::Vigenere,
            ClassicalCipher::Playfair(_) => CipherKind::Playfair,
        }
    }

    fn inner(&self) -> &dyn Transform {
        match self {
            ClassicalCipher::Caesar(c) => c,
            ClassicalCipher::Vigenere(c) => c,
            ClassicalCipher::Playfair(c) => c,
        }
    }

    /// `run` plus timing and symbol accounting.
    pub fn run_instrumented(
        &self,
        input: &str,
        forward: bool,
        counters: &mut TelemetryCounters,
        timer: &mut TelemetryTimer,
    ) -> Result<String, CipherError> {
        let started = Instant::now();
        let output = self.run(input, forward)?;
        let stage = if forward { Stage::Encrypt } else { Stage::Decrypt };
        timer.add_stage_time(stage, started.elapsed());

        let symbols_in = input.chars().count();
        let symbols_out = output.chars().count();
        counters.add_message(symbols_in, symbols_out);
        counters.add_padding(symbols_out.saturating_sub(symbols_in));

        Ok(output)
    }
}

impl Transform for ClassicalCipher {
    fn alphabet(&self) -> &Alphabet {
        self.inner().alphabet()
    }

    fn key(&self) -> &str {
        self.inner().key()
    }

    fn run(&self, input: &str, forward: bool) -> Result<String, CipherError> {
        self.inner().run(input, forward)
    }
}
