//! adapter.rs
//! Set, read and delete sealed cookies over `http::HeaderMap`.
//!
//! The caller's `Cookie` carries name and attributes with an empty value; the
//! sealed token becomes the value. `Max-Age` wins over `Expires` when both
//! decide the envelope expiry.

use cookie::Cookie;
use http::header::{HeaderMap, HeaderValue, COOKIE, SET_COOKIE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use time::{Duration, OffsetDateTime};
use tracing::{debug, trace};

use envelope_core::utils::{expiry_after, now_unix_seconds};
use envelope_core::Sealer;

use crate::types::CookieError;
use crate::validate::{validate, validate_name};

/// Envelope expiry implied by `cookie`'s attributes at `now`.
///
/// A positive `Max-Age` counts from `now`; otherwise `Expires` is taken as is.
/// Session cookies never expire at the envelope level.
pub fn expiry_for(cookie: &Cookie<'_>, now: i64) -> Option<i64> {
    match cookie.max_age() {
        Some(max_age) if max_age.is_positive() => Some(expiry_after(now, max_age.whole_seconds())),
        _ => cookie.expires_datetime().map(OffsetDateTime::unix_timestamp),
    }
}

/// `Max-Age` of zero or less asks for deletion.
#[inline]
fn is_removal(cookie: &Cookie<'_>) -> bool {
    matches!(cookie.max_age(), Some(max_age) if !max_age.is_positive())
}

fn into_removal(mut cookie: Cookie<'_>) -> Cookie<'_> {
    cookie.set_value("");
    cookie.set_max_age(Duration::ZERO);
    cookie.set_expires(OffsetDateTime::UNIX_EPOCH);
    cookie
}

/// Removal cookies carry no value, only the name needs checking.
fn append_removal(headers: &mut HeaderMap, cookie: Cookie<'_>) -> Result<(), CookieError> {
    if let Err(e) = validate_name(cookie.name()) {
        debug!(error = %e, "refusing to write removal cookie");
        return Err(e.into());
    }
    append(headers, &into_removal(cookie))
}

fn append(headers: &mut HeaderMap, cookie: &Cookie<'_>) -> Result<(), CookieError> {
    let value = HeaderValue::from_str(&cookie.to_string())?;
    headers.append(SET_COOKIE, value);
    Ok(())
}

/// Values of every cookie called `name` across all `Cookie` headers, in order.
fn request_values<'h>(headers: &'h HeaderMap, name: &'h str) -> impl Iterator<Item = String> + 'h {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .filter(move |c| c.name() == name)
        .map(|c| c.value().to_string())
}

/// Reads and writes sealed cookies through one [`Sealer`].
#[derive(Debug, Clone, Default)]
pub struct CookieSealer {
    sealer: Sealer,
}

impl CookieSealer {
    pub fn new(sealer: Sealer) -> Self {
        Self { sealer }
    }

    pub fn sealer(&self) -> &Sealer {
        &self.sealer
    }

    /// Seal `value` into `cookie` and append it as a `Set-Cookie` header.
    ///
    /// # Errors
    /// - `ValueNotEmpty` if `cookie` already carries a value
    /// - `Seal` if sealing fails
    /// - `Invalid` if an attribute cannot go on the wire; removal cookies
    ///   are held to a valid name only
    pub fn set<V: Serialize + ?Sized>(
        &self,
        secret: &[u8],
        headers: &mut HeaderMap,
        value: &V,
        mut cookie: Cookie<'_>,
    ) -> Result<(), CookieError> {
        if !cookie.value().is_empty() {
            return Err(CookieError::ValueNotEmpty);
        }

        if is_removal(&cookie) {
            trace!(name = cookie.name(), "writing removal cookie");
            return append_removal(headers, cookie);
        }

        let expiry = expiry_for(&cookie, now_unix_seconds());
        let token = self.sealer.seal(secret, expiry, value)?;
        cookie.set_value(token);

        if let Err(e) = validate(&cookie) {
            debug!(name = cookie.name(), error = %e, "refusing to write cookie");
            return Err(e.into());
        }

        append(headers, &cookie)
    }

    /// Open the cookie called `name`.
    ///
    /// With several cookies of that name the first one that opens wins; if
    /// none opens, the first failure is returned.
    pub fn get<V: DeserializeOwned>(
        &self,
        secret: &[u8],
        headers: &HeaderMap,
        name: &str,
    ) -> Result<V, CookieError> {
        let mut first_err = None;
        for raw in request_values(headers, name) {
            match self.sealer.open::<V>(secret, &raw) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(name, stage = %e.stage(), "cookie did not open");
                    first_err.get_or_insert(e);
                }
            }
        }

        match first_err {
            Some(e) => Err(e.into()),
            None => Err(CookieError::NotFound { name: name.to_string() }),
        }
    }

    /// Ask the client to drop `cookie`, but only if `request` carried it.
    pub fn delete(
        &self,
        response: &mut HeaderMap,
        request: &HeaderMap,
        cookie: &Cookie<'_>,
    ) -> Result<bool, CookieError> {
        if request_values(request, cookie.name()).next().is_none() {
            return Ok(false);
        }
        append_removal(response, cookie.clone())?;
        Ok(true)
    }
}

/// [`CookieSealer::set`] with the default sealer.
pub fn set<V: Serialize + ?Sized>(
    secret: &[u8],
    headers: &mut HeaderMap,
    value: &V,
    cookie: Cookie<'_>,
) -> Result<(), CookieError> {
    CookieSealer::default().set(secret, headers, value, cookie)
}

/// [`CookieSealer::get`] with the default sealer.
pub fn get<V: DeserializeOwned>(secret: &[u8], headers: &HeaderMap, name: &str) -> Result<V, CookieError> {
    CookieSealer::default().get(secret, headers, name)
}

/// [`CookieSealer::delete`] with the default sealer.
pub fn delete(response: &mut HeaderMap, request: &HeaderMap, cookie: &Cookie<'_>) -> Result<bool, CookieError> {
    CookieSealer::default().delete(response, request, cookie)
}
