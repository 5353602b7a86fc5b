//! Timetable screen: metrics header, filter bar, and the day × slot grid.
//!
//! While a retrieval is in flight the grid area shows a spinner; a failed
//! retrieval replaces it with an error panel carrying the failure message.

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Wrap},
};
use tracing::debug;

use timetable_core::options::cycle;
use timetable_core::{Choice, Session, TimetableView, ViewModel};

use crate::action::Action;
use crate::component::Component;
use crate::theme;

#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadStatus {
    Loading { source: String },
    Ready { fetched_at: DateTime<Utc> },
    Failed { message: String },
}

pub struct TimetableScreen {
    view: TimetableView,
    status: LoadStatus,
    throbber_state: throbber_widgets_tui::ThrobberState,
}

impl TimetableScreen {
    pub fn new() -> Self {
        Self {
            view: TimetableView::new(),
            status: LoadStatus::Loading {
                source: String::new(),
            },
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, vm: &ViewModel) {
        let m = &vm.metrics;
        let status = match &self.status {
            LoadStatus::Loading { .. } => Span::styled("◐ loading", theme::loading()),
            LoadStatus::Ready { fetched_at } => Span::styled(
                format!("● loaded {}", fetched_at.with_timezone(&Local).format("%H:%M:%S")),
                theme::loaded(),
            ),
            LoadStatus::Failed { .. } => Span::styled("○ failed", theme::failed()),
        };

        let line = Line::from(vec![
            Span::styled(" Sessions ", theme::hint()),
            Span::styled(
                format!("{}/{}", m.visible_sessions, m.total_sessions),
                theme::hint_key(),
            ),
            Span::styled("   Teachers ", theme::hint()),
            Span::styled(m.teacher_count.to_string(), theme::hint_key()),
            Span::styled("   Students ", theme::hint()),
            Span::styled(m.student_count.to_string(), theme::hint_key()),
            Span::styled("   │ ", theme::hint()),
            status,
        ]);

        frame.render_widget(Paragraph::new(line).block(theme::panel("Timetable", false)), area);
    }

    fn render_filter_bar(&self, frame: &mut Frame, area: Rect) {
        let selection = self.view.selection();
        let choice =
            |c: &Choice| Span::styled(format!("◂ {c} ▸"), theme::choice(!c.is_unfiltered()));

        let line = Line::from(vec![
            Span::styled(" Teacher ", theme::hint()),
            choice(&selection.teacher),
            Span::styled(" t/T", theme::hint_key()),
            Span::styled("    Student ", theme::hint()),
            choice(&selection.student),
            Span::styled(" s/S", theme::hint_key()),
            Span::styled("    c ", theme::hint_key()),
            Span::styled("clear", theme::hint()),
        ]);

        let block = theme::panel("Filters", selection.is_active());
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect, source: &str) {
        let [_, spinner_row, source_row, _] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let throbber = throbber_widgets_tui::Throbber::default()
            .label("  Loading timetable...")
            .style(theme::hint_key())
            .throbber_style(theme::spinner());
        frame.render_stateful_widget(throbber, spinner_row, &mut self.throbber_state.clone());

        if !source.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(format!("  from {source}"), theme::hint())),
                source_row,
            );
        }
    }

    fn render_error(frame: &mut Frame, area: Rect, message: &str) {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(format!("  {message}"), theme::error_text())),
            Line::from(""),
            Line::from(vec![
                Span::styled("  r ", theme::hint_key()),
                Span::styled("retry", theme::hint()),
            ]),
        ];

        frame.render_widget(
            Paragraph::new(text)
                .block(theme::error_panel("Error"))
                .wrap(Wrap { trim: false }),
            area,
        );
    }

    /// One line per session: code (colored by track), subject, teacher.
    fn cell_lines(sessions: &[Arc<Session>]) -> Vec<Line<'static>> {
        if sessions.is_empty() {
            return vec![Line::from(Span::styled("·", theme::hint()))];
        }
        sessions
            .iter()
            .map(|s| {
                Line::from(vec![
                    Span::styled(s.code.clone(), theme::session_code(s.track)),
                    Span::styled(format!(" {}", s.subject), theme::text()),
                    Span::styled(format!(" ({})", s.teacher), theme::hint()),
                ])
            })
            .collect()
    }

    fn render_grid(frame: &mut Frame, area: Rect, vm: &ViewModel) {
        let header = Row::new(
            std::iter::once(Cell::from("Slot"))
                .chain(vm.days.iter().map(|d| Cell::from(d.as_str()))),
        )
        .style(theme::table_header())
        .bottom_margin(1);

        let rows = vm.slots.iter().map(|&slot| {
            let cells: Vec<&[Arc<Session>]> =
                vm.days.iter().map(|day| vm.cell(day, slot)).collect();
            let height = cells.iter().fold(1, |h, cell| h.max(cell.len()));

            Row::new(
                std::iter::once(Cell::from(Span::styled(slot.to_string(), theme::hint_key())))
                    .chain(cells.into_iter().map(|c| Cell::from(Self::cell_lines(c)))),
            )
            .height(u16::try_from(height).unwrap_or(u16::MAX))
        });

        let widths = std::iter::once(Constraint::Length(5))
            .chain(vm.days.iter().map(|_| Constraint::Fill(1)));

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(2)
            .block(theme::panel("Grid", false));

        frame.render_widget(table, area);
    }
}

impl Default for TimetableScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TimetableScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('t') => Some(Action::CycleTeacher { forward: true }),
            KeyCode::Char('T') => Some(Action::CycleTeacher { forward: false }),
            KeyCode::Char('s') => Some(Action::CycleStudent { forward: true }),
            KeyCode::Char('S') => Some(Action::CycleStudent { forward: false }),
            KeyCode::Char('c') => Some(Action::ClearFilters),
            KeyCode::Char('r') => Some(Action::Reload),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                if matches!(self.status, LoadStatus::Loading { .. }) {
                    self.throbber_state.calc_next();
                }
            }

            Action::CycleTeacher { forward } => {
                let options = self.view.options();
                let next = cycle(&options.teachers, &self.view.selection().teacher, *forward);
                debug!(teacher = %next, "teacher filter changed");
                self.view.select_teacher(next);
            }

            Action::CycleStudent { forward } => {
                let options = self.view.options();
                let next = cycle(&options.students, &self.view.selection().student, *forward);
                debug!(student = %next, "student filter changed");
                self.view.select_student(next);
            }

            Action::ClearFilters => self.view.clear_filters(),

            Action::LoadStarted { source, .. } => {
                self.view.unload();
                self.status = LoadStatus::Loading {
                    source: source.clone(),
                };
            }

            Action::Loaded {
                timetable,
                fetched_at,
                ..
            } => {
                self.view.load(timetable.clone());
                self.status = LoadStatus::Ready {
                    fetched_at: *fetched_at,
                };
            }

            Action::LoadFailed { message, .. } => {
                self.view.unload();
                self.status = LoadStatus::Failed {
                    message: message.clone(),
                };
            }

            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let vm = self.view.render();

        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

        self.render_header(frame, layout[0], &vm);
        self.render_filter_bar(frame, layout[1]);

        match &self.status {
            LoadStatus::Loading { source } => self.render_loading(frame, layout[2], source),
            LoadStatus::Failed { message } => Self::render_error(frame, layout[2], message),
            LoadStatus::Ready { .. } => Self::render_grid(frame, layout[2], &vm),
        }
    }
}
