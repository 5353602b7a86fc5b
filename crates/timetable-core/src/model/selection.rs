use std::fmt;

use serde::{Deserialize, Serialize};

/// One selector's value: everything, or a single concrete name.
///
/// Serializes as `null` for [`Choice::Unfiltered`] and as the bare name
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Choice {
    #[default]
    Unfiltered,
    Named(String),
}

impl Choice {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn is_unfiltered(&self) -> bool {
        matches!(self, Self::Unfiltered)
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Unfiltered => None,
            Self::Named(name) => Some(name),
        }
    }
}

impl From<Option<String>> for Choice {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Unfiltered, Self::Named)
    }
}

impl From<Choice> for Option<String> {
    fn from(value: Choice) -> Self {
        match value {
            Choice::Unfiltered => None,
            Choice::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unfiltered => f.write_str("All"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// The active (teacher, student) narrowing criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub teacher: Choice,
    pub student: Choice,
}

impl FilterSelection {
    pub fn new(teacher: Choice, student: Choice) -> Self {
        Self { teacher, student }
    }

    /// True when either selector holds a concrete name.
    pub fn is_active(&self) -> bool {
        !self.teacher.is_unfiltered() || !self.student.is_unfiltered()
    }

    /// Reset both selectors together.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_inactive() {
        let selection = FilterSelection::default();
        assert!(!selection.is_active());
        assert!(selection.teacher.is_unfiltered());
    }

    #[test]
    fn clear_resets_both_selectors() {
        let mut selection = FilterSelection::new(Choice::named("Sanya"), Choice::named("Ravi"));
        assert!(selection.is_active());
        selection.clear();
        assert_eq!(selection, FilterSelection::default());
    }

    #[test]
    fn choice_serializes_as_optional_name() {
        let selection = FilterSelection::new(Choice::named("Usha"), Choice::Unfiltered);
        let value = serde_json::to_value(&selection).unwrap();
        assert_eq!(value, serde_json::json!({ "teacher": "Usha", "student": null }));
    }
}
