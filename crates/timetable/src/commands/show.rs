//! Grid command handler.

use std::fmt::Write as _;
use std::sync::Arc;

use owo_colors::OwoColorize;
use tabled::builder::Builder;
use tabled::settings::Style;
use timetable_core::{Metrics, Timetable, ViewModel};

use crate::cli::{FilterArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

/// Header line above the grid.
fn summary(vm: &ViewModel, color: bool) -> String {
    let Metrics {
        total_sessions,
        teacher_count,
        student_count,
        visible_sessions,
    } = vm.metrics;

    let mut line = format!(
        "Sessions: {visible_sessions}/{total_sessions}  Teachers: {teacher_count}  Students: {student_count}"
    );
    if vm.selection.is_active() {
        let _ = write!(
            line,
            "  Filter: teacher={} student={}",
            vm.selection.teacher, vm.selection.student
        );
    }
    if color {
        line.bold().to_string()
    } else {
        line
    }
}

/// Slots down, days across. Empty cells show `-`.
fn grid_table(vm: &ViewModel) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["Slot".to_owned()];
    header.extend(vm.days.iter().cloned());
    builder.push_record(header);

    for &slot in &vm.slots {
        let mut row = vec![slot.to_string()];
        for day in &vm.days {
            let cell = vm.cell(day, slot);
            row.push(if cell.is_empty() {
                "-".to_owned()
            } else {
                cell.iter()
                    .map(|s| util::session_label(s))
                    .collect::<Vec<_>>()
                    .join("\n")
            });
        }
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// `day<TAB>slot<TAB>code` per session, in reading order.
fn plain(vm: &ViewModel) -> String {
    vm.grid
        .cells()
        .flat_map(|(day, slot, cell)| {
            cell.iter()
                .map(move |s| format!("{day}\t{slot}\t{}", s.code))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn handle(
    timetable: Arc<Timetable>,
    args: &FilterArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let vm = util::render_view(timetable, args);
    let color = output::should_color(&global.color);

    let out = output::render_single(
        &global.output,
        &vm,
        |vm| format!("{}\n{}", summary(vm, color), grid_table(vm)),
        plain,
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
