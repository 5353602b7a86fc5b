// ── Day × slot grid ──
//
// Rebuilt from scratch for every (payload, selection) pair. Declared days
// and slots fix the expected shape; entries that reference anything else
// grow the grid instead of being dropped.

use std::cmp::Ordering;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::collate::locale_cmp;
use crate::model::Session;

/// Sessions sharing one (day, slot) cell, in display order.
pub type Cell = Vec<Arc<Session>>;

/// Day → slot → ordered sessions.
///
/// Iteration follows the declared day and slot order; days or slots that
/// were only discovered through entries follow in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    days: IndexMap<String, IndexMap<u32, Cell>>,
}

impl Grid {
    /// Build the grid for `entries` over the declared `days` × `slots`.
    ///
    /// Every declared day gets every declared slot, even when empty. Each
    /// cell is then ordered with [`compare_sessions`]. Never fails.
    pub fn build(days: &[String], slots: &[u32], entries: &[Arc<Session>]) -> Self {
        let mut grid: IndexMap<String, IndexMap<u32, Cell>> = days
            .iter()
            .map(|day| {
                let row = slots.iter().map(|&slot| (slot, Cell::new())).collect();
                (day.clone(), row)
            })
            .collect();

        for session in entries {
            grid.entry(session.day.clone())
                .or_default()
                .entry(session.slot)
                .or_default()
                .push(Arc::clone(session));
        }

        for row in grid.values_mut() {
            for cell in row.values_mut() {
                cell.sort_by(|a, b| compare_sessions(a, b));
            }
        }

        Self { days: grid }
    }

    /// Day keys in column order.
    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    /// Every slot key used by any day, in row order.
    pub fn slots(&self) -> Vec<u32> {
        let slots: IndexSet<u32> = self
            .days
            .values()
            .flat_map(|row| row.keys().copied())
            .collect();
        slots.into_iter().collect()
    }

    /// Whether `day` has a row (declared or synthesized).
    pub fn contains_day(&self, day: &str) -> bool {
        self.days.contains_key(day)
    }

    /// The materialized cell, if this (day, slot) pair exists.
    pub fn get(&self, day: &str, slot: u32) -> Option<&Cell> {
        self.days.get(day)?.get(&slot)
    }

    /// Sessions at (day, slot); empty when the pair was never materialized.
    pub fn cell(&self, day: &str, slot: u32) -> &[Arc<Session>] {
        match self.get(day, slot) {
            Some(cell) => cell,
            None => &[],
        }
    }

    /// All materialized cells as `(day, slot, sessions)`, day-major.
    pub fn cells(&self) -> impl Iterator<Item = (&str, u32, &[Arc<Session>])> {
        self.days.iter().flat_map(|(day, row)| {
            row.iter()
                .map(move |(&slot, cell)| (day.as_str(), slot, cell.as_slice()))
        })
    }

    /// Sessions in reading order: day by day, slot by slot, cell order.
    pub fn sessions(&self) -> impl Iterator<Item = &Arc<Session>> {
        self.cells().flat_map(|(_, _, cell)| cell.iter())
    }

    pub fn session_count(&self) -> usize {
        self.days
            .values()
            .flat_map(IndexMap::values)
            .map(Vec::len)
            .sum()
    }

    /// True when no cell holds a session (the shape may still be non-empty).
    pub fn is_empty(&self) -> bool {
        self.session_count() == 0
    }
}

/// In-cell order: `track` ascending, then `code` by [`locale_cmp`].
pub fn compare_sessions(a: &Session, b: &Session) -> Ordering {
    a.track
        .cmp(&b.track)
        .then_with(|| locale_cmp(&a.code, &b.code))
}
