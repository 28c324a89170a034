//! envelope/mod.rs
//! Envelope model: the `{value, expiry}` record and its binary codec.
//!
//! The record is self-describing MessagePack so a type mismatch on open is
//! detected by the decoder instead of silently reinterpreting bytes.

pub mod codec;
pub mod types;

pub use codec::*;
pub use types::*;
