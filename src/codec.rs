//! Envelope codec: write success and error responses, read them back.
//!
//! Writes encode the whole envelope before touching the sink. The `try_*`
//! functions return that failure to the caller; [`write_error`] and
//! [`write_response`] log it at `warn` and carry on, for handlers with no
//! better place to report it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

use crate::envelope::{self, Envelope, ErrorInfo};
use crate::sink::ResponseSink;
use crate::types::{CodecConfig, Result};

/// Content type of every envelope body.
pub const CONTENT_TYPE: &str = "application/json";

/// Envelope codec bound to a [`CodecConfig`].
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Write an error envelope, logging the message. Failures are logged only.
    pub fn write_error<S: ResponseSink>(&self, sink: S, message: &str, code: u16) {
        tracing::warn!("{}", message);
        if let Err(e) = self.try_write_error(sink, message, code) {
            tracing::warn!("failed to write JSON response: {}", e);
        }
    }

    /// Write a success envelope. Failures are logged only.
    pub fn write_response<S: ResponseSink, T: Serialize>(&self, sink: S, data: &T, code: u16) {
        if let Err(e) = self.try_write_response(sink, data, code) {
            tracing::warn!("failed to write JSON response: {}", e);
        }
    }

    /// Write an error envelope with `code` as both status and error code.
    pub fn try_write_error<S: ResponseSink>(
        &self,
        sink: S,
        message: &str,
        code: u16,
    ) -> Result<()> {
        let envelope = Envelope::<()>::failure(ErrorInfo::new(code.into(), message));
        self.write_envelope(sink, &envelope, code)
    }

    /// Write a success envelope with the given status.
    pub fn try_write_response<S: ResponseSink, T: Serialize>(
        &self,
        sink: S,
        data: &T,
        code: u16,
    ) -> Result<()> {
        self.write_envelope(sink, &Envelope::success(data), code)
    }

    fn write_envelope<S: ResponseSink, T: Serialize>(
        &self,
        mut sink: S,
        envelope: &Envelope<T>,
        code: u16,
    ) -> Result<()> {
        let body = envelope::to_json(envelope, &self.config)?;

        sink.set_header("Content-Type", CONTENT_TYPE);
        sink.set_status(code);
        sink.write_all(&body)?;
        sink.flush()?;
        Ok(())
    }

    /// Read an envelope and unwrap its payload.
    ///
    /// A non-null `error` member is returned as [`Error::Remote`](crate::Error::Remote)
    /// without looking at `data`.
    pub fn read_response<T: DeserializeOwned, R: Read>(&self, source: R) -> Result<T> {
        envelope::import::from_reader(source)
    }
}

/// Write an error envelope to `sink` with the default codec.
pub fn write_error<S: ResponseSink>(sink: S, message: &str, code: u16) {
    Codec::default().write_error(sink, message, code);
}

/// Write a success envelope to `sink` with the default codec.
pub fn write_response<S: ResponseSink, T: Serialize>(sink: S, data: &T, code: u16) {
    Codec::default().write_response(sink, data, code);
}

pub fn try_write_error<S: ResponseSink>(sink: S, message: &str, code: u16) -> Result<()> {
    Codec::default().try_write_error(sink, message, code)
}

pub fn try_write_response<S: ResponseSink, T: Serialize>(
    sink: S,
    data: &T,
    code: u16,
) -> Result<()> {
    Codec::default().try_write_response(sink, data, code)
}

/// Read an envelope from `source` and unwrap its payload into `T`.
pub fn read_response<T: DeserializeOwned, R: Read>(source: R) -> Result<T> {
    Codec::default().read_response(source)
}
