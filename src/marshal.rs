//! Canonical byte form of canned responses.

use axum::body::Bytes;
use serde::Serialize;

use crate::error::Result;

/// Serialize a value to the JSON bytes served for it.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as JSON
/// (e.g. a map with non-string keys).
pub fn marshal<T: Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    Ok(Bytes::from(serde_json::to_vec(value)?))
}

/// Serialize a value to JSON bytes, panicking on failure.
///
/// Canned responses are configured up front; a value that cannot be
/// serialized would corrupt every assertion that follows, so setup stops
/// here instead.
///
/// # Panics
///
/// Panics if the value cannot be serialized.
pub fn must_marshal<T: Serialize + ?Sized>(value: &T) -> Bytes {
    match marshal(value) {
        Ok(bytes) => bytes,
        Err(e) => panic!("ghmock: cannot use value as a canned response: {e}"),
    }
}
