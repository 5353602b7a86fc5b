//! Shared helpers for command handlers.

use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use timetable_core::{
    Choice, FilterOptions, FilterSelection, Session, Timetable, TimetableView, ViewModel,
};
use tracing::warn;

use crate::cli::{FilterArgs, GlobalOpts, OutputFormat};

/// Turn `--teacher` / `--student` into a selection.
///
/// Names are not required to appear in the payload's lists; an unlisted
/// name is logged and still applied (it will usually match nothing).
pub fn selection(filter: &FilterArgs, options: &FilterOptions) -> FilterSelection {
    if let Some(ref name) = filter.teacher {
        if !options.has_teacher(name) {
            warn!(teacher = %name, "teacher is not listed in the timetable");
        }
    }
    if let Some(ref name) = filter.student {
        if !options.has_student(name) {
            warn!(student = %name, "student is not listed in the timetable");
        }
    }
    FilterSelection::new(
        Choice::from(filter.teacher.clone()),
        Choice::from(filter.student.clone()),
    )
}

/// Load `timetable` into a fresh view, apply the filter flags and render.
pub fn render_view(timetable: Arc<Timetable>, filter: &FilterArgs) -> ViewModel {
    let mut view = TimetableView::new();
    view.load(timetable);
    let selection = selection(filter, &view.options());
    view.set_selection(selection);
    view.render()
}

/// One-line description of a session for grid cells.
pub fn session_label(session: &Session) -> String {
    match (session.subject.is_empty(), session.teacher.is_empty()) {
        (true, true) => session.code.clone(),
        (true, false) => format!("{} ({})", session.code, session.teacher),
        (false, true) => format!("{} {}", session.code, session.subject),
        (false, false) => format!("{} {} ({})", session.code, session.subject, session.teacher),
    }
}

/// Spinner on stderr while the payload loads, for interactive table output.
pub fn spinner(global: &GlobalOpts, message: &str) -> Option<ProgressBar> {
    let interactive = io::stderr().is_terminal();
    if global.quiet || !interactive || !matches!(global.output, OutputFormat::Table) {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_owned());
    spinner.enable_steady_tick(Duration::from_millis(80));
    Some(spinner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(subject: &str, teacher: &str) -> Session {
        Session {
            day: "Mon".into(),
            slot: 1,
            track: 1,
            code: "A1".into(),
            teacher: teacher.into(),
            subject: subject.into(),
            students: Vec::new(),
        }
    }

    #[test]
    fn label_skips_missing_parts() {
        assert_eq!(session_label(&session("Math", "Sanya")), "A1 Math (Sanya)");
        assert_eq!(session_label(&session("", "Sanya")), "A1 (Sanya)");
        assert_eq!(session_label(&session("Math", "")), "A1 Math");
        assert_eq!(session_label(&session("", "")), "A1");
    }

    #[test]
    fn unlisted_names_are_still_applied() {
        let options = FilterOptions::derive(None);
        let filter = FilterArgs {
            teacher: Some("Ghost".into()),
            student: None,
        };
        let sel = selection(&filter, &options);
        assert_eq!(sel.teacher, Choice::named("Ghost"));
        assert!(sel.student.is_unfiltered());
    }
}
