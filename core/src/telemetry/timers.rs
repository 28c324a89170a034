//! telemetry/timers.rs
//! Stage labels and stage timers for the seal/open pipelines.
//!
//! Summary: `Stage` names every step of both pipelines. It labels errors and log
//! events, and keys the per-stage durations collected by `TelemetryTimer`.

use std::collections::{hash_map, HashMap};
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    // Seal
    Serialize,
    Compress,
    GenerateNonce,
    Encrypt,
    Encode,
    // Open
    Decode,
    ValidateLength,
    Decrypt,
    Decompress,
    Deserialize,
    CheckExpiry,
    // Both directions
    NewCipher,
}

impl Stage {
    /// Seal stages in execution order.
    pub const SEAL: [Stage; 6] = [
        Stage::Serialize,
        Stage::Compress,
        Stage::NewCipher,
        Stage::GenerateNonce,
        Stage::Encrypt,
        Stage::Encode,
    ];

    /// Open stages in execution order.
    pub const OPEN: [Stage; 7] = [
        Stage::Decode,
        Stage::ValidateLength,
        Stage::NewCipher,
        Stage::Decrypt,
        Stage::Decompress,
        Stage::Deserialize,
        Stage::CheckExpiry,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Serialize      => "serialize",
            Stage::Compress       => "compress",
            Stage::GenerateNonce  => "generate_nonce",
            Stage::Encrypt        => "encrypt",
            Stage::Encode         => "encode",
            Stage::Decode         => "decode",
            Stage::ValidateLength => "validate_length",
            Stage::Decrypt        => "decrypt",
            Stage::Decompress     => "decompress",
            Stage::Deserialize    => "deserialize",
            Stage::CheckExpiry    => "check_expiry",
            Stage::NewCipher      => "new_cipher",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimes {
    times: HashMap<Stage, Duration>,
}

impl StageTimes {
    /// Add duration to a stage (accumulates if already present).
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        *self.times.entry(stage).or_insert(Duration::ZERO) += dur;
    }

    /// Get total duration for a stage.
    pub fn get(&self, stage: Stage) -> Duration {
        self.times.get(&stage).copied().unwrap_or(Duration::ZERO)
    }

    /// Get duration in microseconds (f64).
    pub fn get_us(&self, stage: Stage) -> f64 {
        self.get(stage).as_secs_f64() * 1_000_000.0
    }

    /// Sum all stage durations.
    pub fn total(&self) -> Duration {
        self.times.values().copied().sum()
    }

    /// True when every stage in `expected` was recorded at least once.
    pub fn has_all(&self, expected: &[Stage]) -> bool {
        expected.iter().all(|s| self.times.contains_key(s))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Stage, &Duration)> {
        self.times.iter()
    }
}

impl<'a> IntoIterator for &'a StageTimes {
    type Item = (&'a Stage, &'a Duration);
    type IntoIter = hash_map::Iter<'a, Stage, Duration>;

    fn into_iter(self) -> Self::IntoIter {
        self.times.iter()
    }
}

/// Wall-clock timer for one seal or open call.
#[derive(Debug, Clone)]
pub struct TelemetryTimer {
    start_time: Instant,
    end_time: Option<Instant>,
    pub stage_times: StageTimes,
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryTimer {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            stage_times: StageTimes::default(),
        }
    }

    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Run `f`, charging its duration to `stage`.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        let out = f();
        self.stage_times.add(stage, started.elapsed());
        out
    }

    pub fn elapsed(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => Instant::now().duration_since(self.start_time),
        }
    }
}
