//! types.rs
//! Errors raised while moving envelopes through cookie headers.

use thiserror::Error;

use envelope_core::SealError;

/// The attribute that made a cookie unfit for `Set-Cookie`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidCookie {
    #[error("invalid cookie name {0:?}")]
    Name(String),

    #[error("invalid byte {byte:#04x} in cookie value")]
    Value { byte: u8 },

    #[error("invalid byte {byte:#04x} in cookie path")]
    Path { byte: u8 },

    #[error("invalid cookie domain {0:?}")]
    Domain(String),

    #[error("cookie expires in year {0}, before 1601")]
    ExpiresTooEarly(i32),

    #[error("partitioned cookies must also be secure")]
    PartitionedWithoutSecure,
}

#[derive(Debug, Error)]
pub enum CookieError {
    #[error("cookie value must be empty")]
    ValueNotEmpty,

    #[error("invalid cookie: {0}")]
    Invalid(#[from] InvalidCookie),

    #[error("cookie {name:?} not present")]
    NotFound { name: String },

    #[error("cookie expired")]
    Expired,

    #[error("failed to build Set-Cookie header")]
    Header(#[from] http::header::InvalidHeaderValue),

    #[error(transparent)]
    Seal(SealError),
}

impl From<SealError> for CookieError {
    /// Expiry is lifted to the top level so callers can tell it apart with
    /// one match arm.
    fn from(err: SealError) -> Self {
        match err {
            SealError::Expired => CookieError::Expired,
            other => CookieError::Seal(other),
        }
    }
}

impl CookieError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CookieError::NotFound { .. })
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, CookieError::Expired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_lifted() {
        assert!(CookieError::from(SealError::Expired).is_expired());
        assert!(matches!(
            CookieError::from(SealError::Authentication),
            CookieError::Seal(SealError::Authentication)
        ));
    }

    #[test]
    fn seal_messages_pass_through() {
        let err = CookieError::from(SealError::Authentication);
        assert_eq!(err.to_string(), "failed to decrypt token");
        let err = CookieError::from(InvalidCookie::PartitionedWithoutSecure);
        assert!(err.to_string().starts_with("invalid cookie"));
    }
}
