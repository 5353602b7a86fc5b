// ── Summary counts ──

use std::sync::Arc;

use serde::Serialize;

use crate::model::{FilterSelection, Session, Timetable};

/// Headline numbers shown above the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    /// All entries in the payload.
    pub total_sessions: usize,
    /// Length of the payload's teacher list.
    pub teacher_count: usize,
    /// Length of the payload's student list.
    pub student_count: usize,
    /// Filtered entries when a filter is active, otherwise the total.
    pub visible_sessions: usize,
}

impl Metrics {
    pub fn derive(
        timetable: Option<&Timetable>,
        filtered: &[Arc<Session>],
        selection: &FilterSelection,
    ) -> Self {
        let Some(t) = timetable else {
            return Self::default();
        };
        let total_sessions = t.session_count();
        Self {
            total_sessions,
            teacher_count: t.teachers.len(),
            student_count: t.students.len(),
            visible_sessions: if selection.is_active() {
                filtered.len()
            } else {
                total_sessions
            },
        }
    }
}
