//! Configuration structures.
//!
//! Configuration is loaded from defaults, optionally overridden by
//! environment variables.

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`ObservabilityConfig::log_level`].
pub const ENV_LOG_LEVEL: &str = "JSONRESP_LOG_LEVEL";
/// Environment variable selecting JSON log output when set to `json`.
pub const ENV_LOG_FORMAT: &str = "JSONRESP_LOG_FORMAT";
/// Environment variable overriding [`CodecConfig::max_body_bytes`].
pub const ENV_MAX_BODY_BYTES: &str = "JSONRESP_MAX_BODY_BYTES";

/// Global configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Envelope codec configuration.
    #[serde(default)]
    pub codec: CodecConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Defaults with environment overrides applied.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.observability.log_level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            config.observability.json_logs = format.eq_ignore_ascii_case("json");
        }
        if let Some(raw) = lookup(ENV_MAX_BODY_BYTES) {
            match raw.parse() {
                Ok(limit) => config.codec.max_body_bytes = limit,
                Err(e) => tracing::warn!("ignoring {}={:?}: {}", ENV_MAX_BODY_BYTES, raw, e),
            }
        }

        config
    }
}

/// Envelope codec configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Terminate encoded bodies with a newline.
    pub trailing_newline: bool,

    /// Maximum body size accepted by the async readers.
    pub max_body_bytes: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            trailing_newline: true,
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
