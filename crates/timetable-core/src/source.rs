// ── Timetable sources ──
//
// Anything that can produce one timetable payload per call. The loader is
// generic over this seam so tests and the `--file` flag don't need HTTP.

use std::future::Future;
use std::path::PathBuf;

use timetable_api::{TimetableClient, TimetableResponse};
use tracing::debug;

use crate::config::SourceConfig;
use crate::error::CoreError;
use crate::model::Timetable;

/// A place a timetable payload can be retrieved from.
pub trait TimetableSource: Send + Sync + 'static {
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;

    /// Retrieve the payload once. Implementations must not retry.
    fn fetch(&self) -> impl Future<Output = Result<Timetable, CoreError>> + Send;
}

// ── HTTP ─────────────────────────────────────────────────────────────

/// Retrieves the payload with a single GET against the timetable server.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: TimetableClient,
}

impl HttpSource {
    pub fn new(config: &SourceConfig) -> Result<Self, CoreError> {
        let client = TimetableClient::new(config.url.clone(), &config.path, &config.transport())?;
        Ok(Self { client })
    }

    pub fn from_client(client: TimetableClient) -> Self {
        Self { client }
    }
}

impl TimetableSource for HttpSource {
    fn describe(&self) -> String {
        self.client
            .endpoint()
            .map_or_else(|_| self.client.base_url().to_string(), |u| u.to_string())
    }

    async fn fetch(&self) -> Result<Timetable, CoreError> {
        let resp = self.client.fetch_timetable().await?;
        Ok(Timetable::from(resp))
    }
}

// ── File ─────────────────────────────────────────────────────────────

/// Reads a payload previously saved as JSON (e.g. the solver's
/// `timetable.json`).
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TimetableSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Timetable, CoreError> {
        debug!(path = %self.path.display(), "reading timetable file");
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::Io {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
        let resp: TimetableResponse =
            serde_json::from_str(&body).map_err(|e| CoreError::MalformedPayload {
                message: e.to_string(),
            })?;
        Ok(Timetable::from(resp))
    }
}

// ── Either ───────────────────────────────────────────────────────────

/// Runtime choice between the concrete sources, for the binaries.
#[derive(Debug, Clone)]
pub enum Source {
    Http(HttpSource),
    File(FileSource),
}

impl TimetableSource for Source {
    fn describe(&self) -> String {
        match self {
            Self::Http(s) => s.describe(),
            Self::File(s) => s.describe(),
        }
    }

    async fn fetch(&self) -> Result<Timetable, CoreError> {
        match self {
            Self::Http(s) => s.fetch().await,
            Self::File(s) => s.fetch().await,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn file_source_reads_saved_payload() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"days":["Mon"],"slots":[1],"entries":[{{"day":"Mon","slot":1,"track":1,"code":"A1","teacher":"Sanya","subject":"Math","students":["Ravi"]}}],"teachers":["Sanya"],"students":["Ravi"]}}"#
        )
        .unwrap();

        let timetable = FileSource::new(file.path()).fetch().await.unwrap();
        assert_eq!(timetable.session_count(), 1);
        assert_eq!(timetable.entries[0].code, "A1");
    }

    #[tokio::test]
    async fn entry_without_day_is_kept_in_a_synthesized_cell() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"days":["Mon"],"slots":[1],"entries":[{{"day":"Mon","slot":1,"track":1,"code":"A1"}},{{"slot":1,"track":null,"code":"B1"}}]}}"#
        )
        .unwrap();

        let timetable = FileSource::new(file.path()).fetch().await.unwrap();
        assert_eq!(timetable.session_count(), 2);

        let grid = crate::Grid::build(&timetable.days, &timetable.slots, &timetable.entries);
        assert_eq!(grid.days().collect::<Vec<_>>(), ["Mon", ""]);
        assert_eq!(grid.cell("", 1)[0].code, "B1");
        assert_eq!(grid.cell("Mon", 1)[0].code, "A1");
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let err = FileSource::new("/nonexistent/timetable.json")
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }), "got: {err:?}");
        assert!(err.failure_message().contains("/nonexistent/timetable.json"));
    }

    #[tokio::test]
    async fn invalid_json_is_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = FileSource::new(file.path()).fetch().await.unwrap_err();
        assert!(matches!(err, CoreError::MalformedPayload { .. }));
    }
}
