// ── Payload loader ──
//
// One retrieval per mount. The fetch runs in a background task and its
// outcome is published through a `watch` channel. Dropping the loader
// cancels the task; a result that arrives after that point is discarded.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::model::Timetable;
use crate::source::TimetableSource;

/// Lifecycle of a single retrieval.
#[derive(Debug, Clone)]
pub enum LoadState {
    /// Request in flight.
    Loading,
    /// Payload received and parsed.
    Loaded {
        timetable: Arc<Timetable>,
        fetched_at: DateTime<Utc>,
    },
    /// Retrieval failed. `message` is what the viewer shows.
    Failed {
        message: String,
        error: Arc<CoreError>,
    },
}

impl LoadState {
    pub fn failed(error: CoreError) -> Self {
        Self::Failed {
            message: error.failure_message(),
            error: Arc::new(error),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn timetable(&self) -> Option<&Arc<Timetable>> {
        match self {
            Self::Loaded { timetable, .. } => Some(timetable),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CoreError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Handle to one mounted retrieval.
///
/// Starts in [`LoadState::Loading`] and moves to `Loaded` or `Failed`
/// exactly once. To reload, drop this handle and mount a new one.
pub struct PayloadLoader {
    state: watch::Receiver<LoadState>,
    cancel: CancellationToken,
}

impl PayloadLoader {
    /// Spawn the single fetch against `source`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount<S: TimetableSource>(source: Arc<S>) -> Self {
        let (tx, rx) = watch::channel(LoadState::Loading);
        let cancel = CancellationToken::new();

        let task_cancel = cancel.clone();
        tokio::spawn(async move {
            let origin = source.describe();
            debug!(source = %origin, "loading timetable");

            let result = tokio::select! {
                biased;
                () = task_cancel.cancelled() => {
                    debug!(source = %origin, "load cancelled before completion");
                    return;
                }
                result = source.fetch() => result,
            };

            let next = match result {
                Ok(timetable) => {
                    info!(
                        source = %origin,
                        sessions = timetable.session_count(),
                        "timetable loaded"
                    );
                    LoadState::Loaded {
                        timetable: Arc::new(timetable),
                        fetched_at: Utc::now(),
                    }
                }
                Err(e) => {
                    warn!(source = %origin, error = %e, "timetable retrieval failed");
                    LoadState::failed(e)
                }
            };
            // The cancellation check runs under the channel's write lock, so
            // an unmount that lands before the publish always wins. Dropping
            // the loader concurrently with the send itself is best-effort: the
            // value may be published, but nobody reads it after the drop.
            let published = tx.send_if_modified(|state| {
                if task_cancel.is_cancelled() {
                    return false;
                }
                *state = next;
                true
            });
            if !published {
                debug!(source = %origin, "discarding late timetable result");
            }
        });

        Self { state: rx, cancel }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// A receiver that observes every state change of this load.
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.clone()
    }

    /// Wait until the load leaves [`LoadState::Loading`].
    ///
    /// If the task ends without publishing (it panicked), this resolves to
    /// a failure with the fallback message.
    pub async fn settled(&mut self) -> LoadState {
        match self.state.wait_for(|s| !s.is_loading()).await {
            Ok(state) => state.clone(),
            Err(_) => LoadState::failed(CoreError::Internal(
                "load task ended without a result".into(),
            )),
        }
    }
}

impl Drop for PayloadLoader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
