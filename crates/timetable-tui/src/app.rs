//! Application core: owns the event loop, the action channel, the timetable
//! screen, and the lifetime of the background retrieval.
//!
//! Each retrieval runs in its own data bridge task under a fresh
//! [`CancellationToken`] and a new generation number. Reloading cancels the
//! previous bridge first; any result it already queued is recognised by its
//! stale generation and dropped.

use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use timetable_core::Source;

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screens::timetable::TimetableScreen;
use crate::theme;
use crate::tui::Tui;

pub struct App {
    running: bool,
    help_visible: bool,
    source: Arc<Source>,
    generation: u64,
    data_cancel: CancellationToken,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    screen: TimetableScreen,
}

impl App {
    pub fn new(source: Source) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            running: true,
            help_visible: false,
            source: Arc::new(source),
            generation: 0,
            data_cancel: CancellationToken::new(),
            action_tx,
            action_rx,
            screen: TimetableScreen::new(),
        }
    }

    /// Cancel any in-flight retrieval and start a new one.
    fn start_load(&mut self) {
        self.data_cancel.cancel();
        self.data_cancel = CancellationToken::new();
        self.generation += 1;
        debug!(generation = self.generation, "starting timetable retrieval");

        let source = Arc::clone(&self.source);
        let generation = self.generation;
        let tx = self.action_tx.clone();
        let cancel = self.data_cancel.clone();
        tokio::spawn(async move {
            crate::data_bridge::spawn_data_bridge(source, generation, tx, cancel).await;
        });
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::enter()?;

        self.start_load();

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render | Event::Resize => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        self.data_cancel.cancel();
        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here;
    /// everything else goes to the screen.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Help overlay swallows keys until closed
        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            });
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Char('q')) => {
                return Ok(Some(Action::Quit));
            }
            (_, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),
            _ => {}
        }

        self.screen.handle_key_event(key)
    }

    /// Process a single action: update app state and propagate to the screen.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action.generation() {
            Some(generation) if generation != self.generation => {
                debug!(generation, current = self.generation, "dropping stale load result");
                return Ok(());
            }
            _ => {}
        }

        match action {
            Action::Quit => self.running = false,
            Action::ToggleHelp => self.help_visible = !self.help_visible,
            Action::Reload => self.start_load(),
            Action::Render => {}
            other => {
                if let Some(follow_up) = self.screen.update(other)? {
                    self.action_tx.send(follow_up)?;
                }
            }
        }
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

        self.screen.render(frame, layout[0]);
        Self::render_status_bar(frame, layout[1]);

        if self.help_visible {
            Self::render_help_overlay(frame, area);
        }
    }

    fn render_status_bar(frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(" r ", theme::hint_key()),
            Span::styled("reload  ", theme::hint()),
            Span::styled("? ", theme::hint_key()),
            Span::styled("help  ", theme::hint()),
            Span::styled("q ", theme::hint_key()),
            Span::styled("quit", theme::hint()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_help_overlay(frame: &mut Frame, area: Rect) {
        let help_width = 44u16.min(area.width.saturating_sub(4));
        let help_height = 13u16.min(area.height.saturating_sub(2));
        let x = area.width.saturating_sub(help_width) / 2;
        let y = area.height.saturating_sub(help_height) / 2;
        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        frame.render_widget(Clear, help_area);

        let block = theme::panel("Keyboard Shortcuts", true)
            .style(Style::default().bg(theme::BG_DARK));

        let entry = |keys: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {keys:<10}"), theme::hint_key()),
                Span::styled(what, theme::hint()),
            ])
        };

        let help_text = vec![
            Line::from(""),
            entry("t / T", "Next / previous teacher"),
            entry("s / S", "Next / previous student"),
            entry("c", "Clear filters"),
            entry("r", "Reload timetable"),
            entry("?", "This help"),
            entry("q", "Quit"),
            Line::from(""),
            Line::from(Span::styled("        Esc or ? to close", theme::hint())),
        ];

        frame.render_widget(Paragraph::new(help_text).block(block), help_area);
    }
}
