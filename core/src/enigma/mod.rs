//! enigma/mod.rs
//! Rotor machine simulation.
//!
//! Summary:
//! - `wheel`: wiring permutations, stator, rotors and reflector.
//! - `plugboard`: symmetric symbol swaps.
//! - `machine`: stepping state and the signal path.
//! - `builder`: randomly wired machines.
//! - `presets`: historical wheels and machines.

pub mod builder;
pub mod machine;
pub mod plugboard;
pub mod presets;
pub mod wheel;

pub use builder::*;
pub use machine::*;
pub use plugboard::*;
pub use presets::*;
pub use wheel::*;
