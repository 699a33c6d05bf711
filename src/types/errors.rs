//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation. Callers
//! tell a malformed body apart from a remote error by variant, never by
//! inspecting the message.

use thiserror::Error;

use crate::envelope::ErrorInfo;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for envelope reads and writes.
#[derive(Error, Debug)]
pub enum Error {
    /// The body was not a valid envelope, or `data` did not fit the target type.
    #[error("failed to decode JSON response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The envelope carried an `error` member.
    #[error(transparent)]
    Remote(#[from] ErrorInfo),

    /// The envelope could not be serialized.
    #[error("failed to encode JSON response: {0}")]
    Encode(#[source] serde_json::Error),

    /// I/O errors on the sink or source.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Async body read exceeded the configured cap.
    #[error("response body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    /// HTTP transport errors.
    #[cfg(feature = "reqwest")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// The remote error, if the envelope carried one.
    pub fn remote(&self) -> Option<&ErrorInfo> {
        match self {
            Error::Remote(info) => Some(info),
            _ => None,
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// HTTP status a server should answer with when this error escapes a handler.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Remote(info) => info.status().unwrap_or(500),
            Error::Decode(_) => 400,
            Error::BodyTooLarge { .. } => 413,
            #[cfg(feature = "reqwest")]
            Error::Http(_) => 502,
            _ => 500,
        }
    }
}
