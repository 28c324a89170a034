//! envelope-cookie
//!
//! Carries sealed envelopes in HTTP cookies.
//! `set` seals a value into the cookie's value and appends `Set-Cookie`;
//! `get` finds the cookie in the request's `Cookie` headers and opens it;
//! `delete` clears a cookie the client sent.
//!
//! Works on `http::HeaderMap` only, so any framework built on `http` can use it.

#![forbid(unsafe_code)]

pub mod adapter;
pub mod types;
pub mod validate;

pub use adapter::{delete, expiry_for, get, set, CookieSealer};
pub use types::{CookieError, InvalidCookie};

pub use cookie::{Cookie, SameSite};
