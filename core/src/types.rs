use thiserror::Error;

use crate::{
    compression::CompressionError,
    crypto::{CryptoError, NonceError},
    encoding::EncodingError,
    envelope::EnvelopeError,
    telemetry::Stage,
};

/// Unified error for the seal and open pipelines.
/// - One variant per failure kind, so callers branch on the kind, not on strings.
/// - Every variant knows the `Stage` that produced it.
/// - Messages never include key, plaintext, ciphertext or token bytes.
#[derive(Debug, Error)]
pub enum SealError {
    /// The value has a shape the envelope codec cannot represent (seal only).
    #[error("failed to serialize value: {0}")]
    Serialization(#[source] EnvelopeError),

    /// Compression refused the serialized envelope (seal only).
    #[error("failed to compress envelope: {0}")]
    Compression(#[source] CompressionError),

    /// Secret has the wrong length for the cipher (both directions).
    #[error("failed to create AEAD: {0}")]
    Key(#[source] CryptoError),

    /// The OS random source failed; no weaker source is substituted (seal only).
    #[error("failed to read nonce: {0}")]
    RandomSource(#[source] NonceError),

    /// The cipher refused the plaintext (seal only).
    #[error("failed to encrypt envelope: {0}")]
    Encryption(#[source] CryptoError),

    /// Token text is not unpadded URL-safe base64 (open only).
    #[error("failed to decode token: {0}")]
    Encoding(#[source] EncodingError),

    /// Token shorter than the nonce prefix (open only).
    #[error("invalid token length: need at least {expected} bytes, got {actual}")]
    MalformedToken { expected: usize, actual: usize },

    /// Tag did not verify: tampering, wrong key or corruption (open only).
    #[error("failed to decrypt token")]
    Authentication,

    /// Authenticated bytes are not a valid compressed frame (open only).
    #[error("failed to decompress envelope: {0}")]
    Decompression(#[source] CompressionError),

    /// Decompressed bytes do not match the requested type (open only).
    #[error("failed to deserialize envelope: {0}")]
    Deserialization(#[source] EnvelopeError),

    /// Fully reconstructed and authentic, but past its expiry (open only).
    #[error("token expired")]
    Expired,
}

impl SealError {
    /// The pipeline stage that failed.
    pub fn stage(&self) -> Stage {
        match self {
            SealError::Serialization(_)      => Stage::Serialize,
            SealError::Compression(_)        => Stage::Compress,
            SealError::Key(_)                => Stage::NewCipher,
            SealError::RandomSource(_)       => Stage::GenerateNonce,
            SealError::Encryption(_)         => Stage::Encrypt,
            SealError::Encoding(_)           => Stage::Decode,
            SealError::MalformedToken { .. } => Stage::ValidateLength,
            SealError::Authentication        => Stage::Decrypt,
            SealError::Decompression(_)      => Stage::Decompress,
            SealError::Deserialization(_)    => Stage::Deserialize,
            SealError::Expired               => Stage::CheckExpiry,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, SealError::Expired)
    }

    /// Integrity or format failures: the token is not usable and was not issued
    /// with this key in its current form.
    pub fn is_invalid_token(&self) -> bool {
        matches!(
            self,
            SealError::Encoding(_)
                | SealError::MalformedToken { .. }
                | SealError::Authentication
                | SealError::Decompression(_)
                | SealError::Deserialization(_)
        )
    }
}
