//! telemetry/snapshot.rs
//!
//! Immutable record of one seal or open call.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub bytes_serialized: u64,
    pub bytes_compressed: u64,
    pub bytes_sealed: u64,
    pub bytes_token: u64,
    /// compressed / serialized. Can exceed 1.0 for tiny envelopes.
    pub compression_ratio: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let compression_ratio = if counters.bytes_serialized > 0 {
            counters.bytes_compressed as f64 / counters.bytes_serialized as f64
        } else {
            0.0
        };

        Self {
            bytes_serialized: counters.bytes_serialized,
            bytes_compressed: counters.bytes_compressed,
            bytes_sealed: counters.bytes_sealed,
            bytes_token: counters.bytes_token,
            compression_ratio,
            elapsed: timer.elapsed(),
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        self.stage_times.has_all(expected)
    }

    /// Internal invariants:
    /// - a sealed payload is never smaller than what was encrypted
    /// - stage times never exceed total elapsed
    pub fn sanity_check(&self) -> bool {
        self.bytes_sealed >= self.bytes_compressed && self.total_stage_time() <= self.elapsed
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
