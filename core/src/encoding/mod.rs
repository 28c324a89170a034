//! encoding/mod.rs
//! Text encoding stage: unpadded URL-safe base64.
//!
//! Notes:
//! - The alphabet (`A-Z a-z 0-9 - _`) contains nothing cookie syntax treats
//!   specially, so tokens go into `Set-Cookie` verbatim.
//! - Decoding tolerates non-zero trailing bits, matching tokens minted by
//!   lenient encoders; padding is never accepted.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

pub mod decode;
pub mod encode;
pub mod types;

pub use decode::*;
pub use encode::*;
pub use types::*;

/// Engine shared by both directions.
pub const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);
