#![allow(clippy::unwrap_used)]
// End-to-end shaping tests: payload JSON → view model.

use std::cmp::Ordering;
use std::sync::Arc;

use serde_json::json;

use timetable_api::TimetableResponse;
use timetable_core::collate::locale_cmp;
use timetable_core::{Choice, Timetable, TimetableView};

// ── Helpers ─────────────────────────────────────────────────────────

fn timetable(body: serde_json::Value) -> Arc<Timetable> {
    let resp: TimetableResponse = serde_json::from_value(body).unwrap();
    Arc::new(Timetable::from(resp))
}

fn codes(cell: &[Arc<timetable_core::Session>]) -> Vec<&str> {
    cell.iter().map(|s| s.code.as_str()).collect()
}

fn school() -> Arc<Timetable> {
    timetable(json!({
        "days": ["Mon", "Tue"],
        "slots": [1, 2],
        "entries": [
            { "day": "Mon", "slot": 1, "track": 1, "code": "S1", "teacher": "Sanya",
              "subject": "Math", "students": ["Asmi"] },
            { "day": "Mon", "slot": 2, "track": 1, "code": "U1", "teacher": "Usha",
              "subject": "Physics", "students": ["Asmi", "Parth"] },
            { "day": "Tue", "slot": 1, "track": 2, "code": "S2", "teacher": "Sanya",
              "subject": "Math", "students": ["Parth"] },
            { "day": "Tue", "slot": 1, "track": 1, "code": "U2", "teacher": "Usha",
              "subject": "Chemistry", "students": ["Asmi"] }
        ],
        "teachers": ["Sanya", "Usha"],
        "students": ["Asmi", "Parth", "Ravi"]
    }))
}

// ── Grid shape ──────────────────────────────────────────────────────

#[test]
fn test_single_entry_fills_one_cell_of_the_declared_shape() {
    let mut view = TimetableView::new();
    view.load(timetable(json!({
        "days": ["Mon", "Tue"],
        "slots": [1, 2],
        "entries": [{ "day": "Mon", "slot": 1, "track": 1, "code": "A1",
                      "teacher": "Sanya", "students": ["Ravi"] }],
        "teachers": ["Sanya"],
        "students": ["Ravi"]
    })));

    let vm = view.render();
    assert_eq!(codes(vm.cell("Mon", 1)), ["A1"]);
    assert!(vm.grid.get("Mon", 2).unwrap().is_empty());
    assert!(vm.grid.get("Tue", 1).unwrap().is_empty());
    assert!(vm.grid.get("Tue", 2).unwrap().is_empty());
}

#[test]
fn test_cell_is_ordered_by_track_regardless_of_input_order() {
    let vm = {
        let mut view = TimetableView::new();
        view.load(school());
        view.render()
    };
    assert_eq!(codes(vm.cell("Tue", 1)), ["U2", "S2"]);
}

#[test]
fn test_cell_order_law_holds_for_every_cell() {
    // Shared tracks force the code tie-break, mixing case and punctuation.
    let crowded = timetable(json!({
        "days": ["Mon"],
        "slots": [1],
        "entries": [
            { "day": "Mon", "slot": 1, "track": 2, "code": "b_2" },
            { "day": "Mon", "slot": 1, "track": 1, "code": "Eng_1" },
            { "day": "Mon", "slot": 1, "track": 2, "code": "A_2" },
            { "day": "Mon", "slot": 1, "track": 1, "code": "eng_1" },
            { "day": "Mon", "slot": 1, "track": 1, "code": "Eng1" }
        ]
    }));

    for payload in [school(), crowded] {
        let mut view = TimetableView::new();
        view.load(payload);
        let vm = view.render();

        for (day, slot, cell) in vm.grid.cells() {
            for pair in cell.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                assert!(a.track <= b.track, "{day}/{slot}: {} before {}", a.code, b.code);
                if a.track == b.track {
                    assert_ne!(
                        locale_cmp(&a.code, &b.code),
                        Ordering::Greater,
                        "{day}/{slot}: {} before {}",
                        a.code,
                        b.code
                    );
                }
            }
        }
    }
}

#[test]
fn test_shared_track_is_ordered_by_code() {
    let mut view = TimetableView::new();
    view.load(timetable(json!({
        "days": ["Mon"],
        "slots": [1],
        "entries": [
            { "day": "Mon", "slot": 1, "track": 1, "code": "Eng1" },
            { "day": "Mon", "slot": 1, "track": 1, "code": "Eng_1" },
            { "day": "Mon", "slot": 1, "track": 1, "code": "eng_1" }
        ]
    })));
    let vm = view.render();
    assert_eq!(codes(vm.cell("Mon", 1)), ["eng_1", "Eng_1", "Eng1"]);
}

#[test]
fn test_entries_outside_declared_shape_are_kept() {
    let mut view = TimetableView::new();
    view.load(timetable(json!({
        "days": ["Mon"],
        "slots": [1],
        "entries": [
            { "day": "Sat", "slot": 1, "track": 1, "code": "W1", "teacher": "Sanya" },
            { "day": "Mon", "slot": 9, "track": 1, "code": "L9", "teacher": "Sanya" }
        ],
        "teachers": ["Sanya"]
    })));

    let vm = view.render();
    assert_eq!(vm.days, ["Mon", "Sat"]);
    assert_eq!(vm.slots, [1, 9]);
    assert_eq!(vm.grid.session_count(), 2);
}

// ── Filtering ───────────────────────────────────────────────────────

#[test]
fn test_teacher_filter_keeps_only_that_teacher() {
    let mut view = TimetableView::new();
    view.load(school());
    view.select_teacher(Choice::named("Sanya"));

    let vm = view.render();
    assert!(vm.visible.iter().all(|s| s.teacher == "Sanya"));
    assert_eq!(vm.visible.len(), 2);
    assert_eq!(vm.metrics.visible_sessions, vm.visible.len());
    assert_eq!(vm.metrics.total_sessions, 4);
}

#[test]
fn test_unmatched_student_empties_every_cell() {
    let mut view = TimetableView::new();
    view.load(school());
    view.select_student(Choice::named("Ravi"));

    let vm = view.render();
    assert!(vm.visible.is_empty());
    assert_eq!(vm.metrics.visible_sessions, 0);
    for day in ["Mon", "Tue"] {
        for slot in [1, 2] {
            assert_eq!(vm.grid.get(day, slot).map(Vec::len), Some(0));
        }
    }
}

#[test]
fn test_filters_combine_conjunctively() {
    let mut view = TimetableView::new();
    view.load(school());
    view.select_teacher(Choice::named("Usha"));
    view.select_student(Choice::named("Parth"));

    let vm = view.render();
    assert_eq!(codes(&vm.visible), ["U1"]);
}

#[test]
fn test_render_is_deterministic() {
    let mut view = TimetableView::new();
    view.load(school());
    view.select_student(Choice::named("Asmi"));

    let a = serde_json::to_value(view.render()).unwrap();
    let b = serde_json::to_value(view.render()).unwrap();
    assert_eq!(a, b);
}

// ── Options ─────────────────────────────────────────────────────────

#[test]
fn test_options_start_with_the_sentinel() {
    let mut view = TimetableView::new();
    view.load(school());

    let options = view.options();
    assert_eq!(
        options.students,
        [
            Choice::Unfiltered,
            Choice::named("Asmi"),
            Choice::named("Parth"),
            Choice::named("Ravi"),
        ]
    );
    assert_eq!(options.teachers.len(), 3);
}
