//! compression/mod.rs
//! Compression stage of the envelope pipeline.
//!
//! Notes:
//! - Runs on the serialized envelope, always before encryption on seal and
//!   after authentication on open.
//! - Stateless per call: no dictionaries, no cross-call context.
//! - Registry hands out the process-wide shared instances.

pub mod codecs;
pub mod constants;
pub mod registry;
pub mod types;

pub use constants::*;
pub use registry::*;
pub use types::*;
