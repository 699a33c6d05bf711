//! Envelope import from JSON.
//!
//! Decoding is two-phase: the outer object is parsed with `data` kept as an
//! unparsed fragment and `error` decoded in full. Only when no error is
//! present is the fragment decoded into the caller's type.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::value::RawValue;
use std::io::Read;

use super::ErrorInfo;
use crate::types::{Error, Result};

/// Outer shape of an envelope with `data` deferred.
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    /// `None` only when the member is missing; `null` is kept as a fragment.
    #[serde(default, deserialize_with = "present")]
    data: Option<Box<RawValue>>,

    #[serde(default)]
    error: Option<ErrorInfo>,
}

/// Decode an envelope body and unwrap its payload.
pub fn from_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let raw = serde_json::from_slice(bytes).map_err(decode_failed)?;
    unwrap_data(raw)
}

/// Decode an envelope from a reader and unwrap its payload.
pub fn from_reader<T: DeserializeOwned, R: Read>(reader: R) -> Result<T> {
    let raw = serde_json::from_reader(reader).map_err(decode_failed)?;
    unwrap_data(raw)
}

fn unwrap_data<T: DeserializeOwned>(raw: RawEnvelope) -> Result<T> {
    if let Some(error) = raw.error {
        return Err(Error::Remote(error));
    }

    // A body with neither member carries nothing to decode: fails as empty input.
    let fragment = raw.data.as_deref().map_or("", RawValue::get);
    serde_json::from_str(fragment).map_err(decode_failed)
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Box<RawValue>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Box::<RawValue>::deserialize(deserializer).map(Some)
}

fn decode_failed(err: serde_json::Error) -> Error {
    tracing::warn!("failed to decode JSON response: {}", err);
    Error::Decode(err)
}
