// ── Domain model ──
//
// Canonical timetable types. Wire types from `timetable-api` are converted
// into these in `convert.rs`.

mod selection;
mod session;
mod timetable;

pub use selection::{Choice, FilterSelection};
pub use session::Session;
pub use timetable::Timetable;
