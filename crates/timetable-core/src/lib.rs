//! Data-shaping layer between `timetable-api` and the viewers (CLI / TUI).
//!
//! This crate turns a flat timetable payload into what a viewer draws:
//!
//! - **[`PayloadLoader`]**: Mounts a [`TimetableSource`], performs exactly
//!   one retrieval, and publishes [`LoadState`] through a `watch` channel.
//!   Dropping the loader cancels it; a late result is discarded.
//!
//! - **[`filter_entries`]**: Narrows entries to a [`FilterSelection`]
//!   (teacher and/or student, exact match, input order preserved).
//!
//! - **[`Grid`]**: Day → slot → ordered session list. Declared days and
//!   slots are always present; unknown ones are synthesized on demand.
//!   Cells are ordered by track, then code.
//!
//! - **[`FilterOptions`]** / **[`Metrics`]**: Selector option lists and
//!   summary counts.
//!
//! - **[`TimetableView`]**: Owns the loaded payload plus the selection and
//!   recomputes a [`ViewModel`] from scratch on demand.

pub mod collate;
pub mod config;
pub mod convert;
pub mod error;
pub mod filter;
pub mod grid;
pub mod loader;
pub mod metrics;
pub mod model;
pub mod options;
pub mod source;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use timetable_api::DEFAULT_TIMETABLE_PATH;
pub use config::{SourceConfig, TlsVerification};
pub use error::{CoreError, FALLBACK_FAILURE_MESSAGE};
pub use filter::filter_entries;
pub use grid::Grid;
pub use loader::{LoadState, PayloadLoader};
pub use metrics::Metrics;
pub use model::{Choice, FilterSelection, Session, Timetable};
pub use options::FilterOptions;
pub use source::{FileSource, HttpSource, Source, TimetableSource};
pub use view::{TimetableView, ViewModel};
