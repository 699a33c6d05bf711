//! Envelope - the on-wire container for every API response.
//!
//! An envelope carries either a success payload under `data` or a failure
//! under `error`, never both when produced by this crate:
//!
//! ```text
//! {"data": <any JSON value>}
//! {"error": {"code": 404, "message": "not found"}}
//! ```
//!
//! Absent members are omitted from the wire rather than written as `null`.
//! Within `error`, a zero `code` and an empty `message` are omitted as well.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::status::reason_phrase;

pub mod export;
pub mod import;

pub use export::to_json;
pub use import::from_json;

/// Describes an error condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// HTTP status code. Kept wide so any integer a peer sends still reads
    /// back as a remote error.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub code: i64,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

fn is_zero(code: &i64) -> bool {
    *code == 0
}

impl ErrorInfo {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The code as an HTTP status, if it is one.
    pub fn status(&self) -> Option<u16> {
        u16::try_from(self.code)
            .ok()
            .filter(|code| (100..=999).contains(code))
    }
}

/// Returns an error that contains the given code and message.
pub fn new_error(code: i64, message: impl Into<String>) -> ErrorInfo {
    ErrorInfo::new(code, message)
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = self.status().map_or("", reason_phrase);
        if self.message.is_empty() {
            write!(f, "{} {}", self.code, reason)
        } else {
            write!(f, "{} ({} {})", self.message, self.code, reason)
        }
    }
}

impl std::error::Error for ErrorInfo {}

/// Top level container of every response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: ErrorInfo) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Collapse into the payload or the carried error.
    pub fn into_result(self) -> Result<Option<T>, ErrorInfo> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.data),
        }
    }
}
