//! sealer/mod.rs
//! Seal and open orchestrators.
//!
//! Token layout: `URL_SAFE_NO_PAD(nonce[24] ‖ XChaCha20-Poly1305(zstd(msgpack({V: value, E: expiry}))) ‖ tag[16])`.

pub mod core;
pub mod open;
pub mod seal;

pub use self::core::*;
