//! compression/codecs/mod.rs
//! Concrete codecs behind the `Compressor`/`Decompressor` seams.

pub mod zstd;

pub use self::zstd::*;
