// Timetable HTTP client
//
// Wraps `reqwest::Client` with endpoint URL construction, status
// interpretation and body decoding. One call, one GET: retries are the
// caller's decision.

use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::TimetableResponse;

/// Path the timetable server publishes its payload under.
pub const DEFAULT_TIMETABLE_PATH: &str = "/api/timetable";

/// Raw HTTP client for the timetable endpoint.
///
/// Any non-2xx status becomes [`Error::Status`]; a body that is not a valid
/// payload becomes [`Error::Deserialization`].
#[derive(Debug, Clone)]
pub struct TimetableClient {
    http: reqwest::Client,
    base_url: Url,
    path: String,
}

impl TimetableClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the server root (e.g. `http://127.0.0.1:8000`); `path`
    /// is resolved against it, so a leading `/` replaces any base path.
    pub fn new(
        base_url: Url,
        path: impl Into<String>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url, path))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url, path: impl Into<String>) -> Self {
        Self {
            http,
            base_url,
            path: path.into(),
        }
    }

    /// The server base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL of the payload endpoint.
    pub fn endpoint(&self) -> Result<Url, Error> {
        Ok(self.base_url.join(&self.path)?)
    }

    /// Fetch the timetable payload with a single GET.
    pub async fn fetch_timetable(&self) -> Result<TimetableResponse, Error> {
        let url = self.endpoint()?;
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_owned(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}
