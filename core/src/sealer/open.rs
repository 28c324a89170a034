//! sealer/open.rs
//! Open pipeline:
//! Decode → ValidateLength → NewCipher → Decrypt → Decompress → Deserialize → CheckExpiry.
//!
//! Invariants:
//! - length is checked before the nonce is sliced
//! - nothing is decompressed before its tag verified
//! - expiry is checked last, on a fully rebuilt envelope
//! - an expired value is withheld; the caller only gets `SealError::Expired`

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::{
    constants::{EMPTY_AAD, MIN_TOKEN_LEN, XNONCE_LEN},
    crypto::{split_nonce, EnvelopeCipher},
    encoding::{self, EncodingError},
    envelope::{deserialize_envelope, Envelope},
    sealer::core::Sealer,
    telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer},
    types::SealError,
    utils::now_unix_seconds,
};

impl Sealer {
    /// Open a token, checking expiry against `now` (Unix seconds).
    pub fn open_at<V: DeserializeOwned>(
        &self,
        secret: &[u8],
        token: &str,
        now: i64,
    ) -> Result<V, SealError> {
        let mut timer = TelemetryTimer::new();
        let envelope = self.run_open::<V>(secret, token, &mut timer, None)?;
        check_expiry(envelope, now, &mut timer)
    }

    /// Like [`Sealer::open`], also returning sizes and stage timings.
    pub fn open_with_telemetry<V: DeserializeOwned>(
        &self,
        secret: &[u8],
        token: &str,
    ) -> Result<(V, TelemetrySnapshot), SealError> {
        let mut timer = TelemetryTimer::new();
        let mut counters = TelemetryCounters::default();
        let envelope = self.run_open::<V>(secret, token, &mut timer, Some(&mut counters))?;
        let value = check_expiry(envelope, now_unix_seconds(), &mut timer)?;
        timer.finish();
        Ok((value, TelemetrySnapshot::from(&counters, &timer)))
    }

    /// Authenticate and rebuild the envelope without looking at its expiry.
    fn run_open<V: DeserializeOwned>(
        &self,
        secret: &[u8],
        token: &str,
        timer: &mut TelemetryTimer,
        counters: Option<&mut TelemetryCounters>,
    ) -> Result<Envelope<V>, SealError> {
        let message = timer
            .time(Stage::Decode, || encoding::decode(token))
            .map_err(|e| match e {
                // A dangling symbol on a token too short to hold a nonce is
                // a short token first and a bad encoding second.
                EncodingError::InvalidLength { len } if len < MIN_TOKEN_LEN => {
                    SealError::MalformedToken {
                        expected: XNONCE_LEN,
                        actual: encoding::decoded_len(len),
                    }
                }
                e => SealError::Encoding(e),
            })
            .map_err(log_failure)?;

        let (nonce, ciphertext) = timer
            .time(Stage::ValidateLength, || split_nonce(&message))
            .map_err(|_| SealError::MalformedToken {
                expected: XNONCE_LEN,
                actual: message.len(),
            })
            .map_err(log_failure)?;

        let cipher = timer
            .time(Stage::NewCipher, || EnvelopeCipher::new(secret))
            .map_err(SealError::Key)
            .map_err(log_failure)?;

        let compressed = timer
            .time(Stage::Decrypt, || cipher.open(nonce, EMPTY_AAD, ciphertext))
            .map_err(|_| SealError::Authentication)
            .map_err(log_failure)?;

        let serialized = timer
            .time(Stage::Decompress, || self.decompressor.decompress(&compressed))
            .map_err(SealError::Decompression)
            .map_err(log_failure)?;

        let envelope = timer
            .time(Stage::Deserialize, || deserialize_envelope::<V>(&serialized))
            .map_err(SealError::Deserialization)
            .map_err(log_failure)?;

        if let Some(counters) = counters {
            counters.add_open(token.len(), message.len(), compressed.len(), serialized.len());
        }
        trace!(
            token = token.len(),
            compressed = compressed.len(),
            serialized = serialized.len(),
            "opened envelope"
        );
        Ok(envelope)
    }
}

fn check_expiry<V>(envelope: Envelope<V>, now: i64, timer: &mut TelemetryTimer) -> Result<V, SealError> {
    let expired = timer.time(Stage::CheckExpiry, || envelope.is_expired_at(now));
    if expired {
        return Err(log_failure(SealError::Expired));
    }
    Ok(envelope.into_value())
}

fn log_failure(err: SealError) -> SealError {
    debug!(stage = %err.stage(), error = %err, "open failed");
    err
}
