//! telemetry/mod.rs
//! Counters, stage timers, and immutable snapshots for cipher runs.
//!
//! Notes:
//! - Counters are plain integers owned by the caller or the machine; no
//!   atomics, no shared state.
//! - Snapshots are immutable and serializable for reporting.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
