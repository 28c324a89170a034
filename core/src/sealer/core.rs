// ## `core.rs`: stable public API

use std::fmt;
use std::sync::{Arc, OnceLock};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::{
    compression::{
        create_compressor, create_decompressor, shared_compressor, shared_decompressor,
        CompressionError, Compressor, Decompressor,
    },
    constants::{DEFAULT_MAX_DECOMPRESSED_LEN, DEFAULT_ZSTD_LEVEL},
    types::SealError,
    utils::now_unix_seconds,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid compression settings: {0}")]
    Compression(#[from] CompressionError),

    #[error("max_decompressed_len must be greater than zero")]
    ZeroDecompressedLimit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealerConfig {
    /// Zstd level used on seal. Open accepts any level.
    pub compression_level: i32,

    /// Largest envelope open will decompress before giving up.
    pub max_decompressed_len: usize,
}

impl Default for SealerConfig {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_ZSTD_LEVEL,
            max_decompressed_len: DEFAULT_MAX_DECOMPRESSED_LEN,
        }
    }
}

impl SealerConfig {
    pub fn new(compression_level: Option<i32>, max_decompressed_len: Option<usize>) -> Self {
        Self {
            compression_level: compression_level.unwrap_or(DEFAULT_ZSTD_LEVEL),
            max_decompressed_len: max_decompressed_len.unwrap_or(DEFAULT_MAX_DECOMPRESSED_LEN),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_decompressed_len == 0 {
            return Err(ConfigError::ZeroDecompressedLimit);
        }
        create_compressor(self.compression_level)?;
        Ok(())
    }
}

/// Seals and opens envelopes with one fixed codec configuration.
///
/// Holds no key and no per-call state. Cloning is cheap (two `Arc`s) and a
/// single instance can serve any number of threads.
#[derive(Clone)]
pub struct Sealer {
    pub(crate) compressor: Arc<dyn Compressor>,
    pub(crate) decompressor: Arc<dyn Decompressor>,
}

impl fmt::Debug for Sealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sealer")
            .field("compressor", &self.compressor.name())
            .field("decompressor", &self.decompressor.name())
            .finish()
    }
}

impl Default for Sealer {
    /// Uses the process-wide shared codec instances.
    fn default() -> Self {
        Self {
            compressor: shared_compressor(),
            decompressor: shared_decompressor(),
        }
    }
}

impl Sealer {
    pub fn new(config: &SealerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            compressor: create_compressor(config.compression_level)?,
            decompressor: create_decompressor(config.max_decompressed_len),
        })
    }

    /// Build from caller-provided codecs.
    pub fn with_codecs(compressor: Arc<dyn Compressor>, decompressor: Arc<dyn Decompressor>) -> Self {
        Self { compressor, decompressor }
    }

    /// Open against the system clock.
    pub fn open<V: DeserializeOwned>(&self, secret: &[u8], token: &str) -> Result<V, SealError> {
        self.open_at(secret, token, now_unix_seconds())
    }
}

static DEFAULT_SEALER: OnceLock<Sealer> = OnceLock::new();

/// Process-wide sealer, initialised once on first use.
pub fn default_sealer() -> &'static Sealer {
    DEFAULT_SEALER.get_or_init(Sealer::default)
}

/// 🔐 Seal `value` with an optional absolute expiry (Unix seconds).
pub fn seal<V: Serialize + ?Sized>(
    secret: &[u8],
    expiry: Option<i64>,
    value: &V,
) -> Result<String, SealError> {
    default_sealer().seal(secret, expiry, value)
}

/// 🔓 Open a token minted by [`seal`], checking expiry against the system clock.
pub fn open<V: DeserializeOwned>(secret: &[u8], token: &str) -> Result<V, SealError> {
    default_sealer().open(secret, token)
}

/// Open a token, checking expiry against `now` (Unix seconds).
pub fn open_at<V: DeserializeOwned>(secret: &[u8], token: &str, now: i64) -> Result<V, SealError> {
    default_sealer().open_at(secret, token, now)
}
