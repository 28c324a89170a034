//! sealer/seal.rs
//! Seal pipeline: Serialize → Compress → NewCipher → GenerateNonce → Encrypt → Encode.
//!
//! Each stage either hands its output to the next or ends the call with an
//! error labelled for that stage. Nothing partial is returned.

use rand::rngs::OsRng;
use rand::RngCore;
use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    constants::{EMPTY_AAD, XNONCE_LEN},
    crypto::{fill_nonce, EnvelopeCipher},
    encoding,
    envelope::serialize_envelope,
    sealer::core::Sealer,
    telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer},
    types::SealError,
};

impl Sealer {
    /// Seal `value` with an optional absolute expiry (Unix seconds).
    ///
    /// # Errors
    /// - `Serialization` if the value cannot be represented
    /// - `Key` if `secret` is not 32 bytes
    /// - `RandomSource` if the OS random source fails
    /// - `Compression` / `Encryption` if a codec or the cipher fails
    pub fn seal<V: Serialize + ?Sized>(
        &self,
        secret: &[u8],
        expiry: Option<i64>,
        value: &V,
    ) -> Result<String, SealError> {
        self.seal_with_rng(&mut OsRng, secret, expiry, value)
    }

    /// Like [`Sealer::seal`], drawing the nonce from `rng` instead of the OS.
    ///
    /// `rng` must be a CSPRNG; a repeated nonce under one key breaks
    /// confidentiality of both tokens.
    pub fn seal_with_rng<R: RngCore + ?Sized, V: Serialize + ?Sized>(
        &self,
        rng: &mut R,
        secret: &[u8],
        expiry: Option<i64>,
        value: &V,
    ) -> Result<String, SealError> {
        let mut timer = TelemetryTimer::new();
        self.run_seal(rng, secret, expiry, value, &mut timer, None)
    }

    /// Like [`Sealer::seal`], also returning sizes and stage timings.
    pub fn seal_with_telemetry<V: Serialize + ?Sized>(
        &self,
        secret: &[u8],
        expiry: Option<i64>,
        value: &V,
    ) -> Result<(String, TelemetrySnapshot), SealError> {
        let mut timer = TelemetryTimer::new();
        let mut counters = TelemetryCounters::default();
        let token = self.run_seal(&mut OsRng, secret, expiry, value, &mut timer, Some(&mut counters))?;
        timer.finish();
        Ok((token, TelemetrySnapshot::from(&counters, &timer)))
    }

    fn run_seal<R: RngCore + ?Sized, V: Serialize + ?Sized>(
        &self,
        rng: &mut R,
        secret: &[u8],
        expiry: Option<i64>,
        value: &V,
        timer: &mut TelemetryTimer,
        counters: Option<&mut TelemetryCounters>,
    ) -> Result<String, SealError> {
        let serialized = timer
            .time(Stage::Serialize, || serialize_envelope(value, expiry))
            .map_err(SealError::Serialization)
            .map_err(log_failure)?;

        let compressed = timer
            .time(Stage::Compress, || self.compressor.compress(&serialized))
            .map_err(SealError::Compression)
            .map_err(log_failure)?;

        let cipher = timer
            .time(Stage::NewCipher, || EnvelopeCipher::new(secret))
            .map_err(SealError::Key)
            .map_err(log_failure)?;

        let nonce = timer
            .time(Stage::GenerateNonce, || fill_nonce(rng))
            .map_err(SealError::RandomSource)
            .map_err(log_failure)?;

        // nonce ‖ ciphertext ‖ tag, built in one buffer.
        let sealed = timer
            .time(Stage::Encrypt, || -> Result<Vec<u8>, SealError> {
                let ciphertext = cipher
                    .seal(&nonce, EMPTY_AAD, &compressed)
                    .map_err(SealError::Encryption)?;
                let mut message = Vec::with_capacity(XNONCE_LEN + ciphertext.len());
                message.extend_from_slice(&nonce);
                message.extend_from_slice(&ciphertext);
                Ok(message)
            })
            .map_err(log_failure)?;

        let token = timer.time(Stage::Encode, || encoding::encode(&sealed));

        if let Some(counters) = counters {
            counters.add_seal(serialized.len(), compressed.len(), sealed.len(), token.len());
        }
        trace!(
            serialized = serialized.len(),
            compressed = compressed.len(),
            token = token.len(),
            "sealed envelope"
        );
        Ok(token)
    }
}

fn log_failure(err: SealError) -> SealError {
    debug!(stage = %err.stage(), error = %err, "seal failed");
    err
}
