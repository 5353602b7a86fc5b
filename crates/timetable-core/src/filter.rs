// ── Entry filtering ──
//
// Narrows the entry list to the active selection without re-querying the
// source.

use std::sync::Arc;

use crate::model::{FilterSelection, Session};

impl FilterSelection {
    /// Whether `session` passes both selectors.
    ///
    /// Teacher: exact, case-sensitive equality. Student: exact membership.
    pub fn matches(&self, session: &Session) -> bool {
        let teacher_ok = self
            .teacher
            .as_name()
            .is_none_or(|name| session.teacher == name);
        let student_ok = self
            .student
            .as_name()
            .is_none_or(|name| session.has_student(name));
        teacher_ok && student_ok
    }
}

/// Stable filter: keeps matching entries in their input order.
pub fn filter_entries(entries: &[Arc<Session>], selection: &FilterSelection) -> Vec<Arc<Session>> {
    entries
        .iter()
        .filter(|session| selection.matches(session))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Choice;

    fn session(code: &str, teacher: &str, students: &[&str]) -> Arc<Session> {
        Arc::new(Session {
            day: "Mon".into(),
            slot: 1,
            track: 1,
            code: code.into(),
            teacher: teacher.into(),
            subject: "Math".into(),
            students: students.iter().map(ToString::to_string).collect(),
        })
    }

    fn codes(entries: &[Arc<Session>]) -> Vec<&str> {
        entries.iter().map(|s| s.code.as_str()).collect()
    }

    fn sample() -> Vec<Arc<Session>> {
        vec![
            session("S1", "Sanya", &["Ravi", "Parth"]),
            session("U1", "Usha", &["Ravi"]),
            session("S2", "Sanya", &["Asmi"]),
            session("U2", "Usha", &["Parth"]),
        ]
    }

    #[test]
    fn unfiltered_returns_everything_in_order() {
        let entries = sample();
        let out = filter_entries(&entries, &FilterSelection::default());
        assert_eq!(codes(&out), ["S1", "U1", "S2", "U2"]);
    }

    #[test]
    fn teacher_filter_is_exact_and_case_sensitive() {
        let entries = sample();
        let sel = FilterSelection::new(Choice::named("Sanya"), Choice::Unfiltered);
        assert_eq!(codes(&filter_entries(&entries, &sel)), ["S1", "S2"]);

        let lower = FilterSelection::new(Choice::named("sanya"), Choice::Unfiltered);
        assert!(filter_entries(&entries, &lower).is_empty());

        let partial = FilterSelection::new(Choice::named("San"), Choice::Unfiltered);
        assert!(filter_entries(&entries, &partial).is_empty());
    }

    #[test]
    fn student_filter_checks_membership() {
        let entries = sample();
        let sel = FilterSelection::new(Choice::Unfiltered, Choice::named("Parth"));
        assert_eq!(codes(&filter_entries(&entries, &sel)), ["S1", "U2"]);
    }

    #[test]
    fn both_filters_are_conjunctive() {
        let entries = sample();
        let sel = FilterSelection::new(Choice::named("Usha"), Choice::named("Ravi"));
        assert_eq!(codes(&filter_entries(&entries, &sel)), ["U1"]);
    }

    #[test]
    fn filtering_twice_is_idempotent() {
        let entries = sample();
        let sel = FilterSelection::new(Choice::Unfiltered, Choice::named("Ravi"));
        let once = filter_entries(&entries, &sel);
        let twice = filter_entries(&once, &sel);
        assert_eq!(once, twice);
    }

    #[test]
    fn every_entry_is_classified_correctly() {
        let entries = sample();
        let sel = FilterSelection::new(Choice::named("Sanya"), Choice::named("Ravi"));
        let out = filter_entries(&entries, &sel);
        for entry in &entries {
            let expected = entry.teacher == "Sanya" && entry.students.iter().any(|s| s == "Ravi");
            assert_eq!(out.contains(entry), expected, "entry {}", entry.code);
        }
    }
}
