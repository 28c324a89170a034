//! encoding/types.rs

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// A character outside the URL-safe base64 alphabet.
    #[error("invalid symbol {byte:#04x} at offset {offset}")]
    InvalidSymbol { offset: usize, byte: u8 },

    /// Tokens are unpadded; any `=` is rejected.
    #[error("unexpected padding at offset {offset}")]
    InvalidPadding { offset: usize },

    /// A dangling final symbol that cannot carry a whole byte.
    #[error("invalid token length {len}")]
    InvalidLength { len: usize },
}
