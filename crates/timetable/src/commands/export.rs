//! CSV export handler.

use std::io::{self, Write};
use std::sync::Arc;

use csv::Writer;
use timetable_core::{Session, Timetable};

use crate::cli::{ExportArgs, GlobalOpts};
use crate::error::CliError;

use super::util;

const HEADER: [&str; 7] = ["Day", "Slot", "Track", "Teacher", "Code", "Subject", "Students"];

/// Write `sessions` as CSV, header first. Students are joined with `", "`.
fn write_csv<W: Write>(out: W, sessions: &[Arc<Session>]) -> Result<(), CliError> {
    let mut wtr = Writer::from_writer(out);
    wtr.write_record(HEADER)?;

    for s in sessions {
        wtr.write_record([
            s.day.clone(),
            s.slot.to_string(),
            s.track.to_string(),
            s.teacher.clone(),
            s.code.clone(),
            s.subject.clone(),
            s.students.join(", "),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn handle(
    timetable: Arc<Timetable>,
    args: &ExportArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let vm = util::render_view(timetable, &args.filter);
    let sessions: Vec<Arc<Session>> = vm.grid.sessions().cloned().collect();

    match args.out {
        Some(ref path) => {
            write_csv(std::fs::File::create(path)?, &sessions)?;
            if !global.quiet {
                eprintln!("Wrote {} sessions to {}", sessions.len(), path.display());
            }
        }
        None => write_csv(io::stdout().lock(), &sessions)?,
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn students_are_joined_and_quoted() {
        let session = Arc::new(Session {
            day: "Mon".into(),
            slot: 1,
            track: 2,
            code: "A1".into(),
            teacher: "Sanya".into(),
            subject: "Math".into(),
            students: vec!["Ravi".into(), "Parth".into()],
        });
        let mut buf = Vec::new();
        write_csv(&mut buf, &[session]).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Day,Slot,Track,Teacher,Code,Subject,Students\n\
             Mon,1,2,Sanya,A1,Math,\"Ravi, Parth\"\n"
        );
    }

    #[test]
    fn empty_selection_writes_only_the_header() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Day,Slot,Track,Teacher,Code,Subject,Students\n");
    }
}
