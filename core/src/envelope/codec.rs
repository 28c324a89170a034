//! envelope/codec.rs
//! MessagePack encoding of the envelope.
//!
//! Wire shape: a two-entry map `{"V": value, "E": expiry}`, expiry as a signed
//! integer with `-1` meaning "never". Structs inside `value` are written as
//! maps keyed by field name, so records from other msgpack encoders of the
//! same shape decode here and the other way round.

use std::io;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::envelope::types::{expiry_from_wire, expiry_to_wire, Envelope, EnvelopeError};

#[derive(Serialize)]
struct WireRef<'a, V: ?Sized> {
    #[serde(rename = "V")]
    value: &'a V,
    #[serde(rename = "E")]
    expiry: i64,
}

#[derive(Deserialize)]
struct WireOwned<V> {
    #[serde(rename = "V")]
    value: V,
    #[serde(rename = "E")]
    expiry: i64,
}

/// Serialize `value` with its expiry into an envelope record.
pub fn serialize_envelope<V: Serialize + ?Sized>(
    value: &V,
    expiry: Option<i64>,
) -> Result<Vec<u8>, EnvelopeError> {
    let wire = WireRef {
        value,
        expiry: expiry_to_wire(expiry),
    };
    rmp_serde::to_vec_named(&wire).map_err(map_encode_error)
}

/// Rebuild an envelope of `V` from its record bytes.
pub fn deserialize_envelope<V: DeserializeOwned>(bytes: &[u8]) -> Result<Envelope<V>, EnvelopeError> {
    let wire: WireOwned<V> = rmp_serde::from_slice(bytes).map_err(map_decode_error)?;
    Ok(Envelope::new(wire.value, expiry_from_wire(wire.expiry)))
}

fn map_encode_error(e: rmp_serde::encode::Error) -> EnvelopeError {
    match e {
        rmp_serde::encode::Error::InvalidValueWrite(_) => EnvelopeError::Write,
        _ => EnvelopeError::Unsupported,
    }
}

fn map_decode_error(e: rmp_serde::decode::Error) -> EnvelopeError {
    use rmp_serde::decode::Error;

    match e {
        Error::InvalidMarkerRead(err) | Error::InvalidDataRead(err)
            if err.kind() == io::ErrorKind::UnexpectedEof =>
        {
            EnvelopeError::Truncated
        }
        // serde reports wrong shapes and missing fields through `custom`,
        // which rmp files under `Syntax`.
        Error::TypeMismatch(_) | Error::OutOfRange | Error::LengthMismatch(_) | Error::Syntax(_) => {
            EnvelopeError::TypeMismatch
        }
        Error::DepthLimitExceeded => EnvelopeError::RecursionLimit,
        _ => EnvelopeError::Syntax,
    }
}
