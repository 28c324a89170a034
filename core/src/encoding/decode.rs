//! encoding/decode.rs
//!
//! Text -> bytes. The alphabet is checked here, symbol by symbol, before the
//! base64 engine runs, so the error names the offending symbol and the
//! engine only ever sees alphabet characters.

use base64::{DecodeError, Engine as _};

use crate::encoding::types::EncodingError;
use crate::encoding::TOKEN_ENGINE;

#[inline]
fn is_url_safe_symbol(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// Reject anything outside `A-Z a-z 0-9 - _`, reporting padding separately.
pub fn validate_alphabet(text: &str) -> Result<(), EncodingError> {
    match text.bytes().enumerate().find(|(_, b)| !is_url_safe_symbol(*b)) {
        None => Ok(()),
        Some((offset, b'=')) => Err(EncodingError::InvalidPadding { offset }),
        Some((offset, byte)) => Err(EncodingError::InvalidSymbol { offset, byte }),
    }
}

/// Number of whole bytes `len` alphabet symbols decode to.
#[inline]
pub fn decoded_len(len: usize) -> usize {
    len * 6 / 8
}

/// Decode token text into bytes.
pub fn decode(text: &str) -> Result<Vec<u8>, EncodingError> {
    validate_alphabet(text)?;

    // 1 mod 4 leaves a lone symbol: 6 bits, not a byte.
    if text.len() % 4 == 1 {
        return Err(EncodingError::InvalidLength { len: text.len() });
    }

    TOKEN_ENGINE.decode(text).map_err(|e| match e {
        DecodeError::InvalidByte(offset, byte) | DecodeError::InvalidLastSymbol(offset, byte) => {
            EncodingError::InvalidSymbol { offset, byte }
        }
        DecodeError::InvalidLength(_) => EncodingError::InvalidLength { len: text.len() },
        DecodeError::InvalidPadding => EncodingError::InvalidPadding { offset: text.len() },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::encode;

    #[test]
    fn roundtrip_all_byte_values() {
        let bytes: Vec<u8> = (0..=255u8).collect();
        let text = encode(&bytes);
        assert!(text.bytes().all(is_url_safe_symbol));
        assert_eq!(decode(&text).unwrap(), bytes);
    }

    #[test]
    fn rejects_standard_alphabet_and_padding() {
        assert_eq!(
            decode("ab+c"),
            Err(EncodingError::InvalidSymbol { offset: 2, byte: b'+' })
        );
        assert_eq!(
            decode("ab/c"),
            Err(EncodingError::InvalidSymbol { offset: 2, byte: b'/' })
        );
        assert_eq!(decode("YQ=="), Err(EncodingError::InvalidPadding { offset: 2 }));
        assert_eq!(decode("@"), Err(EncodingError::InvalidSymbol { offset: 0, byte: b'@' }));
    }

    #[test]
    fn rejects_cookie_syntax_characters() {
        for bad in ["a;b", "a b", "a,b", "a\"b", "a\\b"] {
            assert!(decode(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn dangling_symbol_is_invalid_length() {
        assert_eq!(decode("short"), Err(EncodingError::InvalidLength { len: 5 }));
    }

    #[test]
    fn non_zero_trailing_bits_are_tolerated() {
        // "invalid" = 7 symbols -> 5 bytes with 2 leftover bits set.
        assert_eq!(decode("invalid").unwrap().len(), 5);
    }

    #[test]
    fn decoded_len_matches_engine() {
        for n in 0..64usize {
            if n % 4 == 1 {
                continue;
            }
            let text = "A".repeat(n);
            assert_eq!(decode(&text).unwrap().len(), decoded_len(n));
        }
    }
}
