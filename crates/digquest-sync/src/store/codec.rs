//! JSON (de)serialization for cache payloads

use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;

/// Serialize a value to the JSON text stored in the cache
pub fn encode<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Parse JSON text read from the cache
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T> {
    Ok(serde_json::from_str(raw)?)
}

/// Parse a stored collection, falling back to empty on a missing or
/// undecodable value
///
/// A corrupt blob must never take a page down with it; the failure is logged
/// with the offending key and the caller proceeds with the fallback.
pub fn decode_or_default<T: DeserializeOwned>(key: &str, raw: Option<String>) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(error) => {
            tracing::warn!(key, %error, "discarding undecodable cache value");
            Vec::new()
        }
    }
}
