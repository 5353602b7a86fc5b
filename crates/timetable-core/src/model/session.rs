use serde::{Deserialize, Serialize};

/// One scheduled teaching block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Session {
    pub day: String,
    pub slot: u32,
    /// Only used to order sessions sharing a cell.
    pub track: i64,
    /// Unique within a cell.
    pub code: String,
    pub teacher: String,
    pub subject: String,
    /// Participants, in payload order. Not deduplicated.
    pub students: Vec<String>,
}

impl Session {
    /// Whether `name` is listed among the participants (exact match).
    pub fn has_student(&self, name: &str) -> bool {
        self.students.iter().any(|s| s == name)
    }
}
