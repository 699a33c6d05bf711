//! Client-side helpers for reading envelopes off async transports.
//!
//! The whole body is buffered (up to [`CodecConfig::max_body_bytes`]) and then
//! decoded exactly like [`read_response`](crate::read_response).

use serde::de::DeserializeOwned;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::codec::Codec;
use crate::envelope;
use crate::types::{CodecConfig, Error, Result};

impl Codec {
    /// Read an envelope from an async source and unwrap its payload.
    pub async fn read_response_async<T, R>(&self, source: R) -> Result<T>
    where
        T: DeserializeOwned,
        R: AsyncRead + Unpin,
    {
        let body = read_body(source, self.config()).await?;
        envelope::from_json(&body)
    }

    /// Read an envelope from a `reqwest` response and unwrap its payload.
    ///
    /// The HTTP status is not consulted: an error envelope is reported as
    /// [`Error::Remote`] whatever the status line said.
    #[cfg(feature = "reqwest")]
    pub async fn read_reqwest_response<T: DeserializeOwned>(
        &self,
        mut response: reqwest::Response,
    ) -> Result<T> {
        let limit = self.config().max_body_bytes;
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > limit {
                tracing::warn!("response body from {} exceeds {} bytes", response.url(), limit);
                return Err(Error::BodyTooLarge { limit });
            }
            body.extend_from_slice(&chunk);
        }
        envelope::from_json(&body)
    }
}

async fn read_body<R: AsyncRead + Unpin>(source: R, config: &CodecConfig) -> Result<Vec<u8>> {
    let limit = config.max_body_bytes;
    // One byte past the limit is enough to detect an oversized body.
    let mut capped = source.take((limit as u64).saturating_add(1));
    let mut body = Vec::new();
    capped.read_to_end(&mut body).await?;
    if body.len() > limit {
        tracing::warn!("response body exceeds {} bytes", limit);
        return Err(Error::BodyTooLarge { limit });
    }
    Ok(body)
}

/// Read an envelope from an async source with the default codec.
pub async fn read_response_async<T, R>(source: R) -> Result<T>
where
    T: DeserializeOwned,
    R: AsyncRead + Unpin,
{
    Codec::default().read_response_async(source).await
}

/// Read an envelope from a `reqwest` response with the default codec.
#[cfg(feature = "reqwest")]
pub async fn read_reqwest_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    Codec::default().read_reqwest_response(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::ErrorInfo;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[tokio::test]
    async fn reads_split_body() {
        let source = tokio_test::io::Builder::new()
            .read(br#"{"data":{"na"#)
            .read(br#"me":"foo"}}"#)
            .build();
        let named: Named = read_response_async(source).await.unwrap();
        assert_eq!(named, Named { name: "foo".into() });
    }

    #[tokio::test]
    async fn remote_error_over_async_source() {
        let source = tokio_test::io::Builder::new()
            .read(br#"{"error":{"code":503}}"#)
            .build();
        let err = read_response_async::<Named, _>(source).await.unwrap_err();
        assert_eq!(err.remote(), Some(&ErrorInfo::new(503, "")));
        assert_eq!(err.to_string(), "503 Service Unavailable");
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let codec = Codec::new(CodecConfig {
            max_body_bytes: 8,
            ..CodecConfig::default()
        });
        let body: &[u8] = br#"{"data":"0123456789"}"#;
        let err = codec.read_response_async::<String, _>(body).await.unwrap_err();
        assert!(matches!(err, Error::BodyTooLarge { limit: 8 }));
    }

    #[tokio::test]
    async fn body_at_limit_is_accepted() {
        let body: &[u8] = br#"{"data":1}"#;
        let codec = Codec::new(CodecConfig {
            max_body_bytes: body.len(),
            ..CodecConfig::default()
        });
        let n: u8 = codec.read_response_async(body).await.unwrap();
        assert_eq!(n, 1);
    }

    #[tokio::test]
    async fn unbounded_limit_reads_whole_body() {
        let codec = Codec::new(CodecConfig {
            max_body_bytes: usize::MAX,
            ..CodecConfig::default()
        });
        let n: u8 = codec.read_response_async(&br#"{"data":1}"#[..]).await.unwrap();
        assert_eq!(n, 1);
    }

    #[tokio::test]
    async fn read_failure_is_io_error() {
        let source = tokio_test::io::Builder::new()
            .read(b"{\"data\":")
            .read_error(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset"))
            .build();
        let err = read_response_async::<u8, _>(source).await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
