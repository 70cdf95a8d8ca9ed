//! telemetry/snapshot.rs
//! Immutable view over counters and timers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub messages: u64,
    pub symbols_in: u64,
    pub symbols_out: u64,
    pub padding_symbols: u64,
    pub rotor_steps: u64,
    pub double_steps: u64,
    pub resets: u64,
    pub throughput_symbols_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();
        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.symbols_in as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            messages: counters.messages,
            symbols_in: counters.symbols_in,
            symbols_out: counters.symbols_out,
            padding_symbols: counters.padding_symbols,
            rotor_steps: counters.rotor_steps,
            double_steps: counters.double_steps,
            resets: counters.resets,
            throughput_symbols_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    /// Internal consistency:
    /// - output never shorter than input (only padding adds symbols)
    /// - padding accounts for the whole difference
    /// - stage time fits inside elapsed time
    pub fn sanity_check(&self) -> bool {
        self.symbols_out >= self.symbols_in
            && self.symbols_out - self.symbols_in == self.padding_symbols
            && self.total_stage_time() <= self.elapsed
    }
}
