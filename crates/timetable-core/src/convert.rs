// ── Wire → domain conversion ──

use std::sync::Arc;

use timetable_api::{EntryResponse, TimetableResponse};

use crate::model::{Session, Timetable};

impl From<EntryResponse> for Session {
    fn from(entry: EntryResponse) -> Self {
        Self {
            day: entry.day,
            slot: entry.slot,
            track: entry.track,
            code: entry.code,
            teacher: entry.teacher,
            subject: entry.subject,
            students: entry.students,
        }
    }
}

impl From<TimetableResponse> for Timetable {
    fn from(resp: TimetableResponse) -> Self {
        Self {
            days: resp.days,
            slots: resp.slots,
            entries: resp
                .entries
                .into_iter()
                .map(|e| Arc::new(Session::from(e)))
                .collect(),
            teachers: resp.teachers,
            students: resp.students,
        }
    }
}
