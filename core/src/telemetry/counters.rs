//! telemetry/counters.rs
//! Byte counters collected while a token is sealed or opened.
//!
//! Summary: one set of counters per call, converted into an immutable
//! `TelemetrySnapshot` when the pipeline ends.

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    /// Serialized envelope length (msgpack).
    pub bytes_serialized: u64,
    /// Envelope length after zstd.
    pub bytes_compressed: u64,
    /// nonce + ciphertext + tag.
    pub bytes_sealed: u64,
    /// Token text length.
    pub bytes_token: u64,
}

impl TelemetryCounters {
    /// Record sizes seen on the seal path.
    pub fn add_seal(&mut self, serialized: usize, compressed: usize, sealed: usize, token: usize) {
        self.bytes_serialized += serialized as u64;
        self.bytes_compressed += compressed as u64;
        self.bytes_sealed += sealed as u64;
        self.bytes_token += token as u64;
    }

    /// Record sizes seen on the open path.
    pub fn add_open(&mut self, token: usize, sealed: usize, compressed: usize, serialized: usize) {
        self.add_seal(serialized, compressed, sealed, token);
    }
}
