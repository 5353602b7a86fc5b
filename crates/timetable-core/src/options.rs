// ── Selector options ──

use serde::Serialize;

use crate::model::{Choice, Timetable};

/// Selectable values for the teacher and student selectors.
///
/// Each list starts with [`Choice::Unfiltered`], then the payload's names in
/// payload order. Names are trusted to be unique and are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub teachers: Vec<Choice>,
    pub students: Vec<Choice>,
}

impl FilterOptions {
    /// Derive both option lists. Without a payload each list holds only the
    /// unfiltered sentinel.
    pub fn derive(timetable: Option<&Timetable>) -> Self {
        match timetable {
            Some(t) => Self {
                teachers: with_sentinel(&t.teachers),
                students: with_sentinel(&t.students),
            },
            None => Self {
                teachers: vec![Choice::Unfiltered],
                students: vec![Choice::Unfiltered],
            },
        }
    }

    pub fn has_teacher(&self, name: &str) -> bool {
        self.teachers.iter().any(|c| c.as_name() == Some(name))
    }

    pub fn has_student(&self, name: &str) -> bool {
        self.students.iter().any(|c| c.as_name() == Some(name))
    }
}

fn with_sentinel(names: &[String]) -> Vec<Choice> {
    std::iter::once(Choice::Unfiltered)
        .chain(names.iter().cloned().map(Choice::Named))
        .collect()
}

/// The option after (or before) `current`, wrapping around.
///
/// A `current` value missing from `options` restarts at the first option.
pub fn cycle(options: &[Choice], current: &Choice, forward: bool) -> Choice {
    let Some(first) = options.first() else {
        return Choice::Unfiltered;
    };
    let Some(idx) = options.iter().position(|c| c == current) else {
        return first.clone();
    };
    let len = options.len();
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    options[next].clone()
}
