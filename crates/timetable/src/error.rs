//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help
//! text. The headline of every load failure is the same message a viewer
//! would show (`CoreError::failure_message`).

use miette::Diagnostic;
use thiserror::Error;

use timetable_config::ConfigError;
use timetable_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Retrieval ────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(timetable::connection_failed),
        help(
            "Could not reach the timetable server: {reason}\n\
             URL: {url}\n\
             Check that the server is running, or read a saved payload with --file <path>."
        )
    )]
    ConnectionFailed {
        message: String,
        url: String,
        reason: String,
    },

    #[error("{message}")]
    #[diagnostic(
        code(timetable::timeout),
        help("The request timed out. Increase the limit with --timeout <seconds>.")
    )]
    Timeout { message: String },

    #[error("{message}")]
    #[diagnostic(
        code(timetable::http_status),
        help("The server answered with HTTP {status}. Check the server logs.")
    )]
    HttpStatus { message: String, status: u16 },

    #[error("{message}")]
    #[diagnostic(
        code(timetable::not_found),
        help("Check the endpoint `path` in your profile (default: /api/timetable).")
    )]
    EndpointNotFound { message: String },

    #[error("{message}")]
    #[diagnostic(
        code(timetable::malformed_payload),
        help("The response was not a timetable payload: {detail}")
    )]
    MalformedPayload { message: String, detail: String },

    #[error("{message}")]
    #[diagnostic(code(timetable::file), help("Check that the file exists and is readable."))]
    FileUnreadable { message: String },

    #[error("{message}")]
    #[diagnostic(code(timetable::load_failed), help("{detail}"))]
    LoadFailed { message: String, detail: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(timetable::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(timetable::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: timetable config init --name {name} --url <server>"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(timetable::config_exists),
        help("Pass --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(timetable::config))]
    Config(#[from] ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(timetable::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(timetable::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to write CSV: {0}")]
    #[diagnostic(code(timetable::csv))]
    Csv(#[from] csv::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::EndpointNotFound { .. } | Self::FileUnreadable { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. }
            | Self::ProfileNotFound { .. }
            | Self::ConfigExists { .. }
            | Self::Config(ConfigError::Validation { .. }) => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let message = err.failure_message();
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                message,
                url,
                reason,
            },

            CoreError::Timeout => CliError::Timeout { message },

            CoreError::Status { status: 404, .. } => CliError::EndpointNotFound { message },

            CoreError::Status { status, .. } => CliError::HttpStatus { message, status },

            CoreError::MalformedPayload { message: detail } => {
                CliError::MalformedPayload { message, detail }
            }

            CoreError::Io { .. } => CliError::FileUnreadable { message },

            CoreError::Config { message: reason } => CliError::Validation {
                field: "server".into(),
                reason,
            },

            CoreError::Internal(detail) => CliError::LoadFailed { message, detail },
        }
    }
}
