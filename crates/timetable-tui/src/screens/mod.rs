//! Screen components.

pub mod timetable;
