//! Envelope export to JSON.

use serde::Serialize;

use super::Envelope;
use crate::types::{CodecConfig, Error, Result};

/// Encode an envelope into a fully buffered body.
///
/// Nothing is written anywhere until the whole envelope has serialized, so a
/// failure here leaves the destination untouched.
pub fn to_json<T: Serialize>(envelope: &Envelope<T>, config: &CodecConfig) -> Result<Vec<u8>> {
    let mut body = serde_json::to_vec(envelope).map_err(Error::Encode)?;
    if config.trailing_newline {
        body.push(b'\n');
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::new_error;
    use std::collections::HashMap;

    #[test]
    fn success_body_ends_with_newline() {
        let body = to_json(&Envelope::success(5), &CodecConfig::default()).unwrap();
        assert_eq!(body, b"{\"data\":5}\n");
    }

    #[test]
    fn newline_is_optional() {
        let config = CodecConfig {
            trailing_newline: false,
            ..CodecConfig::default()
        };
        let body = to_json(&Envelope::<()>::failure(new_error(400, "bad")), &config).unwrap();
        assert_eq!(body, br#"{"error":{"code":400,"message":"bad"}}"#);
    }

    #[test]
    fn unserializable_data_is_encode_error() {
        let mut data = HashMap::new();
        data.insert((1u8, 2u8), "tuple keys are not JSON keys");
        let err = to_json(&Envelope::success(data), &CodecConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Encode(_)));
    }
}
