// ── Source configuration ──
//
// Where the timetable lives and how to reach it. Built by the config crate
// (from a profile) or by the binaries (from flags).

use std::path::PathBuf;
use std::time::Duration;

use timetable_api::{DEFAULT_TIMETABLE_PATH, TlsMode, TransportConfig};
use url::Url;

/// TLS verification strategy for the timetable server.
#[derive(Debug, Clone, Default)]
pub enum TlsVerification {
    /// Use the operating system's trust store.
    #[default]
    SystemDefaults,
    /// Trust an additional CA certificate (PEM).
    CustomCa(PathBuf),
    /// Skip certificate verification entirely.
    DangerAcceptInvalid,
}

/// Connection settings for an HTTP timetable source.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Server root, e.g. `http://127.0.0.1:8000`.
    pub url: Url,
    /// Endpoint path resolved against `url`.
    pub path: String,
    pub tls: TlsVerification,
    pub timeout: Duration,
}

impl SourceConfig {
    /// Settings for `url` with the default endpoint path, system TLS and a
    /// 30 second timeout.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            path: DEFAULT_TIMETABLE_PATH.to_owned(),
            tls: TlsVerification::SystemDefaults,
            timeout: Duration::from_secs(30),
        }
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}
