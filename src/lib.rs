//! # jsonresp - JSON response envelopes for HTTP APIs
//!
//! Every response body is wrapped in one uniform envelope:
//! - success: `{"data": <payload>}`
//! - failure: `{"error": {"code": <status>, "message": <text>}}`
//!
//! Servers write envelopes through a [`ResponseSink`] with [`write_response`]
//! and [`write_error`]; clients unwrap them with [`read_response`] (or the
//! async readers in [`client`]). A remote error comes back as
//! [`Error::Remote`] carrying the [`ErrorInfo`], so callers can tell it apart
//! from a body that failed to decode.
//!
//! ```text
//!   handler ── write_response ──▶ sink ══ HTTP ══▶ source ── read_response ──▶ T
//!           └─ write_error ────┘                           └─ Err(Remote(ErrorInfo))
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod client;
pub mod codec;
pub mod envelope;
pub mod sink;
pub mod status;
pub mod types;

// Internal utilities
pub mod observability;

pub use codec::{
    read_response, try_write_error, try_write_response, write_error, write_response, Codec,
    CONTENT_TYPE,
};
pub use envelope::{new_error, Envelope, ErrorInfo};
pub use sink::{RecordedResponse, ResponseSink};
pub use types::{CodecConfig, Config, Error, ObservabilityConfig, Result};
