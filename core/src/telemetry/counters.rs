//! telemetry/counters.rs
//! Mutable counters collected while ciphers run.
//!
//! Summary: symbol counts for every cipher, plus rotor activity for machines.
//! Converted into an immutable `TelemetrySnapshot` on demand.
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

#[derive(Default, Clone, Debug, Encode, Decode, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub messages: u64,
    pub symbols_in: u64,
    pub symbols_out: u64,
    /// Filler symbols appended to complete a digraph.
    pub padding_symbols: u64,
    /// Individual rotor advances, summed over all rotors.
    pub rotor_steps: u64,
    /// Advances caused by the double-stepping lever.
    pub double_steps: u64,
    pub resets: u64,
}

impl TelemetryCounters {
    /// Record one full `run` call.
    pub fn add_message(&mut self, symbols_in: usize, symbols_out: usize) {
        self.messages += 1;
        self.add_symbols(symbols_in, symbols_out);
    }

    /// Symbols processed outside a full message, e.g. single key presses.
    pub fn add_symbols(&mut self, symbols_in: usize, symbols_out: usize) {
        self.symbols_in += symbols_in as u64;
        self.symbols_out += symbols_out as u64;
    }

    pub fn add_padding(&mut self, count: usize) {
        self.padding_symbols += count as u64;
    }

    pub fn add_rotor_steps(&mut self, count: usize) {
        self.rotor_steps += count as u64;
    }

    pub fn add_double_step(&mut self) {
        self.double_steps += 1;
    }

    pub fn add_reset(&mut self) {
        self.resets += 1;
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        *self += other.clone();
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.messages        += rhs.messages;
        self.symbols_in      += rhs.symbols_in;
        self.symbols_out     += rhs.symbols_out;
        self.padding_symbols += rhs.padding_symbols;
        self.rotor_steps     += rhs.rotor_steps;
        self.double_steps    += rhs.double_steps;
        self.resets          += rhs.resets;
    }
}
