//! Core types shared across the crate.
//!
//! - **Errors**: crate error type with thiserror derives
//! - **Config**: codec and observability configuration

mod config;
mod errors;

pub use config::{
    CodecConfig, Config, ObservabilityConfig, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_MAX_BODY_BYTES,
};
pub use errors::{Error, Result};
