//! Session list command handler.

use std::sync::Arc;

use tabled::Tabled;
use timetable_core::{Session, Timetable};

use crate::cli::{FilterArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SessionRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Slot")]
    slot: u32,
    #[tabled(rename = "Track")]
    track: i64,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Teacher")]
    teacher: String,
    #[tabled(rename = "Students")]
    students: String,
}

impl From<&Arc<Session>> for SessionRow {
    fn from(s: &Arc<Session>) -> Self {
        Self {
            day: s.day.clone(),
            slot: s.slot,
            track: s.track,
            code: s.code.clone(),
            subject: s.subject.clone(),
            teacher: s.teacher.clone(),
            students: s.students.join(", "),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(
    timetable: Arc<Timetable>,
    args: &FilterArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let vm = util::render_view(timetable, args);
    // Grid reading order: day, then slot, then in-cell order.
    let sessions: Vec<Arc<Session>> = vm.grid.sessions().cloned().collect();

    let out = output::render_list(
        &global.output,
        &sessions,
        |s| SessionRow::from(s),
        |s| s.code.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
