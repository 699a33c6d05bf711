//! Response sinks: where encoded envelopes are written.
//!
//! A sink is anything that accepts a status, headers, and a body stream.
//! [`RecordedResponse`] is the in-memory implementation used by handlers
//! that build a response before handing it to a server framework.

use http::header::{HeaderMap, HeaderName, HeaderValue};
use std::io;

#[cfg(feature = "axum")]
mod into_response;

/// Destination of an HTTP response.
pub trait ResponseSink: io::Write {
    /// Set a response header, replacing any previous value.
    fn set_header(&mut self, name: &str, value: &str);

    /// Set the response status code.
    fn set_status(&mut self, code: u16);
}

impl<S: ResponseSink + ?Sized> ResponseSink for &mut S {
    fn set_header(&mut self, name: &str, value: &str) {
        (**self).set_header(name, value);
    }

    fn set_status(&mut self, code: u16) {
        (**self).set_status(code);
    }
}

/// In-memory response.
#[derive(Debug, Clone)]
pub struct RecordedResponse {
    status: u16,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Default for RecordedResponse {
    fn default() -> Self {
        Self {
            status: 200,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }
}

impl RecordedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Header value, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

impl ResponseSink for RecordedResponse {
    fn set_header(&mut self, name: &str, value: &str) {
        let name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!("skipping invalid header name {:?}: {}", name, e);
                return;
            }
        };
        match HeaderValue::from_str(value) {
            Ok(value) => {
                self.headers.insert(name, value);
            }
            Err(e) => tracing::warn!("skipping invalid value for header {}: {}", name, e),
        }
    }

    fn set_status(&mut self, code: u16) {
        self.status = code;
    }
}

impl io::Write for RecordedResponse {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
