//! Statistics command handler.

use std::sync::Arc;

use serde::Serialize;
use timetable_core::{FilterSelection, Metrics, Timetable};

use crate::cli::{FilterArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Debug, Serialize)]
struct StatsReport {
    #[serde(flatten)]
    metrics: Metrics,
    selection: FilterSelection,
}

fn detail(r: &StatsReport) -> String {
    let m = &r.metrics;
    [
        format!("Sessions:  {}", m.total_sessions),
        format!("Visible:   {}", m.visible_sessions),
        format!("Teachers:  {}", m.teacher_count),
        format!("Students:  {}", m.student_count),
        format!("Teacher:   {}", r.selection.teacher),
        format!("Student:   {}", r.selection.student),
    ]
    .join("\n")
}

pub fn handle(
    timetable: Arc<Timetable>,
    args: &FilterArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let vm = util::render_view(timetable, args);
    let report = StatsReport {
        metrics: vm.metrics,
        selection: vm.selection,
    };

    let out = output::render_single(&global.output, &report, detail, |r| {
        r.metrics.visible_sessions.to_string()
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
