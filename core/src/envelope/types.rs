//! envelope/types.rs
//! The `{value, expiry}` record and its error type.

use thiserror::Error;

use crate::constants::NO_EXPIRY;
use crate::utils::is_live;

/// A value bound to an optional absolute expiry (Unix seconds).
///
/// Built fresh for every seal, rebuilt by deserialization on open. `expiry` is
/// always an instant, never a duration; callers convert lifetimes beforehand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<V> {
    pub value: V,
    pub expiry: Option<i64>,
}

impl<V> Envelope<V> {
    pub fn new(value: V, expiry: Option<i64>) -> Self {
        Self { value, expiry }
    }

    /// Past its expiry at `now`. The expiry second itself is still valid.
    pub fn is_expired_at(&self, now: i64) -> bool {
        !is_live(self.expiry, now)
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

/// Map the optional expiry to its wire integer.
///
/// `None` becomes the `-1` sentinel. An explicit instant that happens to equal
/// the sentinel is nudged one second earlier so it still reads back as expired.
pub fn expiry_to_wire(expiry: Option<i64>) -> i64 {
    match expiry {
        None => NO_EXPIRY,
        Some(NO_EXPIRY) => NO_EXPIRY - 1,
        Some(e) => e,
    }
}

pub fn expiry_from_wire(raw: i64) -> Option<i64> {
    if raw == NO_EXPIRY {
        None
    } else {
        Some(raw)
    }
}

/// Envelope codec failures. Categories only: messages produced by serde
/// can quote payload content, so they are dropped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The value has a shape the codec cannot represent.
    #[error("value is not representable in the envelope format")]
    Unsupported,

    /// Writing to the output buffer failed.
    #[error("envelope write failed")]
    Write,

    /// Bytes are not a well-formed record.
    #[error("malformed envelope")]
    Syntax,

    /// Record is well-formed but does not match the requested type.
    #[error("envelope does not match the requested type")]
    TypeMismatch,

    /// Nesting deeper than the decoder allows.
    #[error("envelope nesting too deep")]
    RecursionLimit,

    /// Input ended before the record was complete.
    #[error("envelope truncated")]
    Truncated,
}
