//! Actions: every state change in the TUI flows through one of these.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use timetable_core::Timetable;

/// Messages dispatched through the app's action channel.
///
/// Load results carry the `generation` of the retrieval that produced them
/// so results from a superseded retrieval can be recognised and dropped.
#[derive(Debug, Clone)]
pub enum Action {
    Tick,
    Render,
    Quit,
    ToggleHelp,

    // ── Filters ──
    CycleTeacher { forward: bool },
    CycleStudent { forward: bool },
    ClearFilters,

    // ── Loading ──
    Reload,
    LoadStarted {
        generation: u64,
        source: String,
    },
    Loaded {
        generation: u64,
        timetable: Arc<Timetable>,
        fetched_at: DateTime<Utc>,
    },
    LoadFailed {
        generation: u64,
        message: String,
    },
}

impl Action {
    /// The retrieval generation a load result belongs to, if any.
    pub fn generation(&self) -> Option<u64> {
        match self {
            Self::LoadStarted { generation, .. }
            | Self::Loaded { generation, .. }
            | Self::LoadFailed { generation, .. } => Some(*generation),
            _ => None,
        }
    }
}
