//! compression/registry.rs
//! Process-wide codec instances and factory functions.
//!
//! The default compressor and decompressor are created once, on first use, and
//! live for the rest of the process. Both are immutable and `Sync`, so every
//! seal and open call reads them concurrently without a lock.

use std::sync::{Arc, OnceLock};

use crate::compression::codecs::{ZstdCompressor, ZstdDecompressor};
use crate::compression::types::{CompressionError, Compressor, Decompressor};

static SHARED_COMPRESSOR: OnceLock<Arc<dyn Compressor>> = OnceLock::new();
static SHARED_DECOMPRESSOR: OnceLock<Arc<dyn Decompressor>> = OnceLock::new();

/// Default compressor (zstd, default level).
pub fn shared_compressor() -> Arc<dyn Compressor> {
    SHARED_COMPRESSOR
        .get_or_init(|| Arc::new(ZstdCompressor::default()))
        .clone()
}

/// Default decompressor (zstd, default output cap).
pub fn shared_decompressor() -> Arc<dyn Decompressor> {
    SHARED_DECOMPRESSOR
        .get_or_init(|| Arc::new(ZstdDecompressor::default()))
        .clone()
}

pub fn create_compressor(level: i32) -> Result<Arc<dyn Compressor>, CompressionError> {
    Ok(Arc::new(ZstdCompressor::new(level)?))
}

pub fn create_decompressor(max_output: usize) -> Arc<dyn Decompressor> {
    Arc::new(ZstdDecompressor::new(max_output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_instances_are_reused() {
        assert!(Arc::ptr_eq(&shared_compressor(), &shared_compressor()));
        assert!(Arc::ptr_eq(&shared_decompressor(), &shared_decompressor()));
    }

    #[test]
    fn shared_instances_work_across_threads() {
        let handles: Vec<_> = (0..8u8)
            .map(|i| {
                std::thread::spawn(move || {
                    let input = vec![i; 512];
                    let packed = shared_compressor().compress(&input).unwrap();
                    assert_eq!(shared_decompressor().decompress(&packed).unwrap(), input);
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
    }
}
