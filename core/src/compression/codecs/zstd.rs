//! src/compression/codecs/zstd.rs
//!
//! Zstd one-shot compressor/decompressor.
//!
//! Design notes:
//! - Each call builds its own zstd context and drops it on return; the structs
//!   only carry immutable settings, so they are `Send + Sync` and shareable.
//! - No dictionaries. Every frame stands alone.
//! - Decompression output is capped: bytes that passed authentication can still
//!   be a bomb if the key leaked, and cookies are never that large.

use std::io::Read;

use crate::compression::constants::codec_names;
use crate::compression::types::{CompressionError, Compressor, Decompressor};
use crate::constants::{DEFAULT_MAX_DECOMPRESSED_LEN, DEFAULT_ZSTD_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZstdCompressor {
    level: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZstdDecompressor {
    max_output: usize,
}

impl ZstdCompressor {
    /// # Errors
    /// - `CompressionError::InvalidLevel` if zstd does not accept `level`.
    pub fn new(level: i32) -> Result<Self, CompressionError> {
        if !zstd::compression_level_range().contains(&level) {
            return Err(CompressionError::InvalidLevel { level });
        }
        Ok(Self { level })
    }

    pub fn level(&self) -> i32 {
        self.level
    }
}

impl Default for ZstdCompressor {
    fn default() -> Self {
        Self { level: DEFAULT_ZSTD_LEVEL }
    }
}

impl Compressor for ZstdCompressor {
    fn name(&self) -> &'static str {
        codec_names::ZSTD
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        zstd::bulk::compress(input, self.level).map_err(|e| CompressionError::CodecProcessFailed {
            codec: codec_names::ZSTD,
            msg: e.to_string(),
        })
    }
}

impl ZstdDecompressor {
    pub fn new(max_output: usize) -> Self {
        Self { max_output }
    }

    pub fn max_output(&self) -> usize {
        self.max_output
    }
}

impl Default for ZstdDecompressor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DECOMPRESSED_LEN)
    }
}

impl Decompressor for ZstdDecompressor {
    fn name(&self) -> &'static str {
        codec_names::ZSTD
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        if input.is_empty() {
            return Err(CompressionError::EmptyInput { codec: codec_names::ZSTD });
        }

        let process_failed = |e: std::io::Error| CompressionError::CodecProcessFailed {
            codec: codec_names::ZSTD,
            msg: e.to_string(),
        };

        let decoder = zstd::stream::read::Decoder::new(input).map_err(process_failed)?;

        // Read one byte past the cap so "exactly max" and "over max" differ.
        let limit = (self.max_output as u64).saturating_add(1);
        let mut out = Vec::new();
        decoder.take(limit).read_to_end(&mut out).map_err(process_failed)?;

        if out.len() > self.max_output {
            return Err(CompressionError::OutputTooLarge { max: self.max_output });
        }
        Ok(out)
    }
}
