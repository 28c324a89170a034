// ## 📂 File: `src/crypto/nonce.rs`

//! crypto/nonce.rs
//! Random extended nonces and nonce/ciphertext splitting.
//!
//! Design:
//! - Every seal draws 24 fresh bytes from the OS CSPRNG. At 192 bits the
//!   collision probability of random nonces is negligible, so no counter state exists.
//! - Nonces are never derived from content and are sent in the clear.
//!
//! Security notes:
//! - A failing random source is fatal for the call. There is no fallback RNG.

use rand::RngCore;

use crate::crypto::types::{NonceError, XNonceBytes, XNONCE_LEN};

/// Draw a nonce from `rng`. The sealer passes `OsRng` unless told otherwise.
pub fn fill_nonce<R: RngCore + ?Sized>(rng: &mut R) -> Result<XNonceBytes, NonceError> {
    let mut nonce = [0u8; XNONCE_LEN];
    rng.try_fill_bytes(&mut nonce)
        .map_err(|e| NonceError::RandomSource(e.to_string()))?;
    Ok(nonce)
}

/// Split decoded token bytes into `(nonce, ciphertext‖tag)`.
///
/// Callers validate the length first; this still refuses short input instead of panicking.
pub fn split_nonce(message: &[u8]) -> Result<(&[u8], &[u8]), NonceError> {
    if message.len() < XNONCE_LEN {
        return Err(NonceError::InvalidNonceLen {
            expected: XNONCE_LEN,
            actual: message.len(),
        });
    }
    Ok(message.split_at(XNONCE_LEN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {}
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy pool unavailable"))
        }
    }

    #[test]
    fn failing_source_is_reported() {
        let err = fill_nonce(&mut BrokenRng).unwrap_err();
        assert!(matches!(err, NonceError::RandomSource(_)));
    }

    #[test]
    fn consecutive_nonces_differ() {
        let a = fill_nonce(&mut OsRng).unwrap();
        let b = fill_nonce(&mut OsRng).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn split_requires_full_prefix() {
        assert!(split_nonce(&[0u8; XNONCE_LEN - 1]).is_err());

        let bytes = [1u8; XNONCE_LEN + 3];
        let (nonce, rest) = split_nonce(&bytes).unwrap();
        assert_eq!(nonce.len(), XNONCE_LEN);
        assert_eq!(rest.len(), 3);
    }
}
