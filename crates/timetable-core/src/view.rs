// ── Timetable view ──
//
// Holds the loaded payload and the active selection. Everything a viewer
// draws is derived from those two values on demand; nothing derived is
// cached between renders.

use std::sync::Arc;

use serde::Serialize;

use crate::filter::filter_entries;
use crate::grid::Grid;
use crate::metrics::Metrics;
use crate::model::{Choice, FilterSelection, Session, Timetable};
use crate::options::FilterOptions;

/// Mutable viewer state: the payload (once loaded) plus the selection.
#[derive(Debug, Clone, Default)]
pub struct TimetableView {
    timetable: Option<Arc<Timetable>>,
    selection: FilterSelection,
}

impl TimetableView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly loaded payload. The selection starts unfiltered.
    pub fn load(&mut self, timetable: Arc<Timetable>) {
        self.timetable = Some(timetable);
        self.selection.clear();
    }

    /// Forget the payload (e.g. while reloading).
    pub fn unload(&mut self) {
        self.timetable = None;
    }

    pub fn timetable(&self) -> Option<&Arc<Timetable>> {
        self.timetable.as_ref()
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn select_teacher(&mut self, choice: Choice) {
        self.selection.teacher = choice;
    }

    pub fn select_student(&mut self, choice: Choice) {
        self.selection.student = choice;
    }

    pub fn set_selection(&mut self, selection: FilterSelection) {
        self.selection = selection;
    }

    /// Reset both selectors in one step.
    pub fn clear_filters(&mut self) {
        self.selection.clear();
    }

    pub fn options(&self) -> FilterOptions {
        FilterOptions::derive(self.timetable.as_deref())
    }

    /// Derive everything a viewer needs for the current state.
    pub fn render(&self) -> ViewModel {
        let timetable = self.timetable.as_deref();
        let visible = timetable
            .map(|t| filter_entries(&t.entries, &self.selection))
            .unwrap_or_default();
        let grid = match timetable {
            Some(t) => Grid::build(&t.days, &t.slots, &visible),
            None => Grid::default(),
        };

        ViewModel {
            days: grid.days().map(ToOwned::to_owned).collect(),
            slots: grid.slots(),
            metrics: Metrics::derive(timetable, &visible, &self.selection),
            options: FilterOptions::derive(timetable),
            selection: self.selection.clone(),
            grid,
            visible,
        }
    }
}

/// One render's worth of derived data.
///
/// `days` and `slots` are the grid's axes, which include anything
/// synthesized from entries outside the declared shape.
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    pub days: Vec<String>,
    pub slots: Vec<u32>,
    pub grid: Grid,
    pub metrics: Metrics,
    pub options: FilterOptions,
    pub selection: FilterSelection,
    /// Filtered entries in payload order.
    #[serde(skip)]
    pub visible: Vec<Arc<Session>>,
}

impl ViewModel {
    pub fn cell(&self, day: &str, slot: u32) -> &[Arc<Session>] {
        self.grid.cell(day, slot)
    }
}
