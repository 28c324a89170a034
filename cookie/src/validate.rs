//! validate.rs
//! Attribute checks applied before a cookie is written to `Set-Cookie`.
//!
//! Rules follow RFC 6265 as browsers apply it:
//! - name is an RFC 7230 token
//! - value and path bytes are printable ASCII without `;` (value also without `"` and `\`)
//! - domain is a dotted host name or IPv4 literal, optional leading dot
//! - `Expires` is not earlier than 1601
//! - `Partitioned` requires `Secure`

use cookie::Cookie;

use crate::types::InvalidCookie;

const MIN_EXPIRES_YEAR: i32 = 1601;
const MAX_DOMAIN_LEN: usize = 255;
const MAX_LABEL_LEN: usize = 63;

#[inline]
fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

#[inline]
fn is_value_byte(b: u8) -> bool {
    (0x20..0x7f).contains(&b) && b != b'"' && b != b';' && b != b'\\'
}

#[inline]
fn is_path_byte(b: u8) -> bool {
    (0x20..0x7f).contains(&b) && b != b';'
}

pub fn validate_name(name: &str) -> Result<(), InvalidCookie> {
    if name.is_empty() || !name.bytes().all(is_tchar) {
        return Err(InvalidCookie::Name(name.to_string()));
    }
    Ok(())
}

pub fn validate_value(value: &str) -> Result<(), InvalidCookie> {
    match value.bytes().find(|b| !is_value_byte(*b)) {
        Some(byte) => Err(InvalidCookie::Value { byte }),
        None => Ok(()),
    }
}

pub fn validate_path(path: &str) -> Result<(), InvalidCookie> {
    match path.bytes().find(|b| !is_path_byte(*b)) {
        Some(byte) => Err(InvalidCookie::Path { byte }),
        None => Ok(()),
    }
}

pub fn validate_domain(domain: &str) -> Result<(), InvalidCookie> {
    let invalid = || InvalidCookie::Domain(domain.to_string());

    let host = domain.strip_prefix('.').unwrap_or(domain);
    if host.is_empty() || host.len() > MAX_DOMAIN_LEN {
        return Err(invalid());
    }

    for label in host.split('.') {
        let bytes = label.as_bytes();
        let well_formed = !bytes.is_empty()
            && bytes.len() <= MAX_LABEL_LEN
            && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-' || *b == b'_')
            && bytes.first() != Some(&b'-')
            && bytes.last() != Some(&b'-');
        if !well_formed {
            return Err(invalid());
        }
    }
    Ok(())
}

/// Check every attribute `cookie` carries.
pub fn validate(cookie: &Cookie<'_>) -> Result<(), InvalidCookie> {
    validate_name(cookie.name())?;
    validate_value(cookie.value())?;

    if let Some(path) = cookie.path() {
        validate_path(path)?;
    }
    if let Some(domain) = cookie.domain() {
        validate_domain(domain)?;
    }
    if let Some(expires) = cookie.expires_datetime() {
        if expires.year() < MIN_EXPIRES_YEAR {
            return Err(InvalidCookie::ExpiresTooEarly(expires.year()));
        }
    }
    if cookie.partitioned() == Some(true) && cookie.secure() != Some(true) {
        return Err(InvalidCookie::PartitionedWithoutSecure);
    }
    Ok(())
}
