//! compression/types.rs
//! Compressor/decompressor seams and their error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("codec {codec} process failed: {msg}")]
    CodecProcessFailed { codec: &'static str, msg: String },

    #[error("codec {codec} refused empty input")]
    EmptyInput { codec: &'static str },

    #[error("decompressed output exceeds {max} bytes")]
    OutputTooLarge { max: usize },

    #[error("invalid compression level {level}")]
    InvalidLevel { level: i32 },
}

/// One-shot compressor. Implementations keep no per-call state, so a single
/// instance is shared by every thread without locking.
pub trait Compressor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Compress a complete buffer into a self-contained frame.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError>;
}

pub trait Decompressor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Decompress a complete frame. Corrupted, truncated, empty or
    /// never-compressed input is an error.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError>;
}
