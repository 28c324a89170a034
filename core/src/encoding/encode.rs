//! encoding/encode.rs

use base64::Engine as _;

use crate::encoding::TOKEN_ENGINE;

/// Encode sealed bytes as cookie-safe text. Never fails.
#[inline]
pub fn encode(bytes: &[u8]) -> String {
    TOKEN_ENGINE.encode(bytes)
}
