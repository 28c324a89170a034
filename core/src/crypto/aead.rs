// ## 📂 File: `src/crypto/aead.rs`

//! src/crypto/aead.rs
//! XChaCha20-Poly1305 interface for envelope sealing.
//!
//! Design notes:
//! - 32-byte key, 24-byte nonce, 16-byte tag appended to the ciphertext.
//! - Tag verification is constant-time and fails closed (no partial plaintext).
//! - The cipher is built per call from caller-owned key bytes and dropped afterwards.
//! - Caller provides nonce and AAD. Wire format v1 uses empty AAD.

use chacha20poly1305::aead::{Aead, KeyInit, Payload};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};

use crate::crypto::types::{CryptoError, KEY_LEN, TAG_LEN, XNONCE_LEN};

#[derive(Clone)]
pub struct EnvelopeCipher {
    inner: XChaCha20Poly1305,
}

impl std::fmt::Debug for EnvelopeCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EnvelopeCipher(XChaCha20-Poly1305)")
    }
}

impl EnvelopeCipher {
    /// Construct the cipher from the caller's secret.
    ///
    /// The same check guards the seal and open paths, so a bad key yields
    /// `CryptoError::InvalidKeyLen` in both directions and no cipher state exists.
    pub fn new(secret: &[u8]) -> Result<Self, CryptoError> {
        validate_key(secret)?;
        let inner = XChaCha20Poly1305::new_from_slice(secret).map_err(|_| {
            CryptoError::InvalidKeyLen {
                expected: KEY_LEN,
                actual: secret.len(),
            }
        })?;
        Ok(Self { inner })
    }

    /// AEAD seal (encrypt) plaintext with nonce and AAD. Output is ciphertext‖tag.
    pub fn seal(&self, nonce: &[u8], aad: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        validate_nonce(nonce)?;
        self.inner
            .encrypt(XNonce::from_slice(nonce), Payload { msg: plaintext, aad })
            .map_err(|_| CryptoError::Failure("XChaCha20-Poly1305 seal failed".into()))
    }

    /// AEAD open (decrypt) ciphertext‖tag with nonce and AAD.
    pub fn open(
        &self,
        nonce: &[u8],
        aad: &[u8],
        ciphertext_and_tag: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        validate_nonce(nonce)?;

        // Shorter than a tag can never verify.
        if ciphertext_and_tag.len() < TAG_LEN {
            return Err(CryptoError::TagMismatch);
        }

        self.inner
            .decrypt(XNonce::from_slice(nonce), Payload { msg: ciphertext_and_tag, aad })
            .map_err(|_| CryptoError::TagMismatch)
    }
}

#[inline]
pub fn validate_key(secret: &[u8]) -> Result<(), CryptoError> {
    if secret.len() != KEY_LEN {
        return Err(CryptoError::InvalidKeyLen {
            expected: KEY_LEN,
            actual: secret.len(),
        });
    }
    Ok(())
}

#[inline]
fn validate_nonce(nonce: &[u8]) -> Result<(), CryptoError> {
    if nonce.len() != XNONCE_LEN {
        return Err(CryptoError::InvalidNonceLen {
            expected: XNONCE_LEN,
            actual: nonce.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EMPTY_AAD;

    const KEY: &[u8; KEY_LEN] = b"274521B016094DBAB7093B257545A96E";

    #[test]
    fn seal_then_open() {
        let cipher = EnvelopeCipher::new(KEY).unwrap();
        let nonce = [7u8; XNONCE_LEN];
        let sealed = cipher.seal(&nonce, EMPTY_AAD, b"payload").unwrap();
        assert_eq!(sealed.len(), b"payload".len() + TAG_LEN);
        assert_eq!(cipher.open(&nonce, EMPTY_AAD, &sealed).unwrap(), b"payload");
    }

    #[test]
    fn rejects_short_and_long_keys() {
        for len in [0usize, 11, 31, 33, 64] {
            let err = EnvelopeCipher::new(&vec![1u8; len]).unwrap_err();
            assert_eq!(err, CryptoError::InvalidKeyLen { expected: KEY_LEN, actual: len });
        }
    }

    #[test]
    fn rejects_wrong_nonce_width() {
        let cipher = EnvelopeCipher::new(KEY).unwrap();
        let err = cipher.seal(&[0u8; 12], EMPTY_AAD, b"x").unwrap_err();
        assert_eq!(err, CryptoError::InvalidNonceLen { expected: XNONCE_LEN, actual: 12 });
    }

    #[test]
    fn aad_mismatch_fails_closed() {
        let cipher = EnvelopeCipher::new(KEY).unwrap();
        let nonce = [9u8; XNONCE_LEN];
        let sealed = cipher.seal(&nonce, b"flash", b"payload").unwrap();
        assert_eq!(cipher.open(&nonce, EMPTY_AAD, &sealed), Err(CryptoError::TagMismatch));
    }

    #[test]
    fn truncated_tag_is_tag_mismatch() {
        let cipher = EnvelopeCipher::new(KEY).unwrap();
        let nonce = [3u8; XNONCE_LEN];
        assert_eq!(cipher.open(&nonce, EMPTY_AAD, &[0u8; 5]), Err(CryptoError::TagMismatch));
    }
}
