// timetable-api: Async Rust client for the timetable payload endpoint

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{DEFAULT_TIMETABLE_PATH, TimetableClient};
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
pub use types::{EntryResponse, TimetableResponse};
