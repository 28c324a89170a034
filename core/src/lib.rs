//! envelope-core
//!
//! Sealed value envelopes for cookie transport.
//! A value plus an optional absolute expiry is serialized, compressed,
//! encrypted with XChaCha20-Poly1305 and encoded as unpadded URL-safe base64.
//! No HTTP, no I/O beyond the OS random source and the wall clock.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Pipeline stages
pub mod envelope;
pub mod compression;
pub mod crypto;
pub mod encoding;
pub mod telemetry;

// Orchestrators
pub mod sealer;

pub use sealer::{open, open_at, seal};
pub use sealer::{Sealer, SealerConfig};
pub use types::SealError;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::envelope::Envelope;
    pub use crate::sealer::{open, open_at, seal, Sealer, SealerConfig};
    pub use crate::telemetry::{Stage, TelemetrySnapshot};
    pub use crate::types::SealError;
}
