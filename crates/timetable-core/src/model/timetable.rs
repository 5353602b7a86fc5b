use std::sync::Arc;

use serde::Serialize;

use super::Session;

/// A complete timetable as retrieved from its source.
///
/// Read-only once loaded; shared between consumers through `Arc`.
/// Entry teachers and students are not checked against `teachers` /
/// `students`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Timetable {
    /// Column order for rendering.
    pub days: Vec<String>,
    /// Row order for rendering.
    pub slots: Vec<u32>,
    pub entries: Vec<Arc<Session>>,
    pub teachers: Vec<String>,
    pub students: Vec<String>,
}

impl Timetable {
    pub fn session_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
