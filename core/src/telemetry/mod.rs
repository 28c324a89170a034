//! telemetry/mod.rs
//! Stage labels, stage timers, byte counters and immutable snapshots.
//!
//! Notes:
//! - `Stage` doubles as the label carried by `SealError` and log events.
//! - Snapshots never hold key, plaintext or token bytes; sizes only.

pub mod counters;
pub mod snapshot;
pub mod timers;

pub use counters::*;
pub use snapshot::*;
pub use timers::*;
