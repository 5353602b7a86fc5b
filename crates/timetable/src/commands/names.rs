//! Teacher and student list handlers.
//!
//! Lists the selectable names (payload order, duplicates kept) with the
//! number of sessions each would select.

use serde::Serialize;
use tabled::Tabled;
use timetable_core::{Choice, FilterOptions, FilterSelection, Timetable, filter_entries};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Clone, Serialize, Tabled)]
struct NameRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Sessions")]
    sessions: usize,
}

fn rows(
    timetable: &Timetable,
    choices: &[Choice],
    select: impl Fn(Choice) -> FilterSelection,
) -> Vec<NameRow> {
    choices
        .iter()
        .filter(|c| !c.is_unfiltered())
        .map(|choice| NameRow {
            name: choice.to_string(),
            sessions: filter_entries(&timetable.entries, &select(choice.clone())).len(),
        })
        .collect()
}

fn render(rows: &[NameRow], global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_list(&global.output, rows, NameRow::clone, |r| r.name.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub fn handle_teachers(timetable: &Timetable, global: &GlobalOpts) -> Result<(), CliError> {
    let options = FilterOptions::derive(Some(timetable));
    let rows = rows(timetable, &options.teachers, |c| {
        FilterSelection::new(c, Choice::Unfiltered)
    });
    render(&rows, global)
}

pub fn handle_students(timetable: &Timetable, global: &GlobalOpts) -> Result<(), CliError> {
    let options = FilterOptions::derive(Some(timetable));
    let rows = rows(timetable, &options.students, |c| {
        FilterSelection::new(Choice::Unfiltered, c)
    });
    render(&rows, global)
}
