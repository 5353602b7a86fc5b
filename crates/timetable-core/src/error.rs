// ── Core error types ──
//
// User-facing errors from timetable-core. Consumers never see reqwest or
// serde errors directly: the `From<timetable_api::Error>` impl translates
// transport-layer failures into domain-appropriate variants.

use thiserror::Error;

/// Message shown when a retrieval fails without a more specific message.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Unable to load timetable.";

/// Unified error type for the core crate.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    // ── Retrieval errors ─────────────────────────────────────────────
    #[error("Cannot connect to timetable server at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Timetable request timed out")]
    Timeout,

    #[error("Request failed with status {status} ({reason})")]
    Status { status: u16, reason: String },

    #[error("Malformed timetable payload: {message}")]
    MalformedPayload { message: String },

    #[error("Cannot read timetable file {path}: {reason}")]
    Io { path: String, reason: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// The message a viewer shows for a failed retrieval.
    ///
    /// Status and file errors carry their own text; transport faults and
    /// everything else collapse to [`FALLBACK_FAILURE_MESSAGE`].
    pub fn failure_message(&self) -> String {
        match self {
            Self::Status { .. } | Self::Io { .. } => self.to_string(),
            _ => FALLBACK_FAILURE_MESSAGE.to_owned(),
        }
    }

    /// HTTP status, if the server answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<timetable_api::Error> for CoreError {
    fn from(err: timetable_api::Error) -> Self {
        match err {
            timetable_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_decode() {
                    CoreError::MalformedPayload {
                        message: e.to_string(),
                    }
                } else {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                }
            }
            timetable_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            timetable_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            timetable_api::Error::Status { status, reason } => CoreError::Status { status, reason },
            timetable_api::Error::Deserialization { message, body: _ } => {
                CoreError::MalformedPayload { message }
            }
        }
    }
}
