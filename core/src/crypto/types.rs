// ## 📂 File: `src/crypto/types.rs`

use thiserror::Error;

pub use crate::constants::{KEY_LEN, TAG_LEN, XNONCE_LEN};

/// A freshly drawn extended nonce. Not secret; travels as the token prefix.
pub type XNonceBytes = [u8; XNONCE_LEN];

#[derive(Debug, Error)]
pub enum NonceError {
    /// The OS random source refused to produce bytes.
    #[error("secure random source failed: {0}")]
    RandomSource(String),

    /// Input too short to carry a nonce prefix.
    #[error("invalid nonce length: expected={expected}, actual={actual}")]
    InvalidNonceLen { expected: usize, actual: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Invalid key length provided to cipher.
    #[error("invalid key length: expected={expected}, actual={actual}")]
    InvalidKeyLen { expected: usize, actual: usize },

    /// Nonce length mismatch (must be 24 bytes for XChaCha20-Poly1305).
    #[error("invalid nonce length: expected={expected}, actual={actual}")]
    InvalidNonceLen { expected: usize, actual: usize },

    /// AEAD tag mismatch (authentication failure).
    #[error("AEAD tag mismatch")]
    TagMismatch,

    /// Encryption refused the input (plaintext beyond the cipher's limit).
    #[error("crypto failure: {0}")]
    Failure(String),
}
