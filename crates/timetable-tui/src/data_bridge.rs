//! Data bridge: connects a [`PayloadLoader`] to TUI actions.
//!
//! Runs as a background task per retrieval. Mounts the loader, waits for it
//! to settle, and forwards the outcome as an [`Action`] through the TUI's
//! action channel. Cancelling the token drops the loader, which cancels the
//! in-flight fetch; nothing is sent afterwards.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use timetable_core::{LoadState, PayloadLoader, Source, TimetableSource};

use crate::action::Action;

/// Perform one retrieval from `source` and report it as `generation`.
pub async fn spawn_data_bridge(
    source: Arc<Source>,
    generation: u64,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let _ = action_tx.send(Action::LoadStarted {
        generation,
        source: source.describe(),
    });

    let mut loader = PayloadLoader::mount(source);

    let state = tokio::select! {
        biased;
        () = cancel.cancelled() => {
            debug!(generation, "data bridge cancelled before load settled");
            return;
        }
        state = loader.settled() => state,
    };

    if cancel.is_cancelled() {
        debug!(generation, "discarding load result after cancellation");
        return;
    }

    let action = match state {
        LoadState::Loaded {
            timetable,
            fetched_at,
        } => {
            info!(
                generation,
                sessions = timetable.session_count(),
                "timetable loaded"
            );
            Action::Loaded {
                generation,
                timetable,
                fetched_at,
            }
        }
        LoadState::Failed { message, error } => {
            warn!(generation, error = %error, "timetable load failed");
            Action::LoadFailed {
                generation,
                message,
            }
        }
        // settled() never yields Loading
        LoadState::Loading => return,
    };
    let _ = action_tx.send(action);
}
