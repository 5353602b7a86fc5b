//! Neon palette and the few styles the timetable screen is built from.

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders},
};

pub const ELECTRIC_PURPLE: Color = Color::Rgb(225, 53, 255); // #e135ff
pub const NEON_CYAN: Color = Color::Rgb(128, 255, 234); // #80ffea
pub const CORAL: Color = Color::Rgb(255, 106, 193); // #ff6ac1
pub const ELECTRIC_YELLOW: Color = Color::Rgb(241, 250, 140); // #f1fa8c
pub const SUCCESS_GREEN: Color = Color::Rgb(80, 250, 123); // #50fa7b
pub const ERROR_RED: Color = Color::Rgb(255, 99, 99); // #ff6363
pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const BORDER_GRAY: Color = Color::Rgb(98, 114, 164); // #6272a4
pub const BG_DARK: Color = Color::Rgb(30, 31, 41); // #1e1f29

/// Session code colors, indexed by track.
const TRACK_COLORS: [Color; 4] = [NEON_CYAN, CORAL, SUCCESS_GREEN, ELECTRIC_YELLOW];

fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Rounded, titled panel. `highlight` switches the border to the accent.
pub fn panel(title: &str, highlight: bool) -> Block<'static> {
    let border = if highlight { ELECTRIC_PURPLE } else { BORDER_GRAY };
    Block::default()
        .title(format!(" {title} "))
        .title_style(bold(NEON_CYAN))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

/// Panel for failures: red border and title.
pub fn error_panel(title: &str) -> Block<'static> {
    panel(title, false)
        .title_style(bold(ERROR_RED))
        .border_style(Style::default().fg(ERROR_RED))
}

pub fn table_header() -> Style {
    bold(NEON_CYAN).add_modifier(Modifier::UNDERLINED)
}

pub fn text() -> Style {
    Style::default().fg(DIM_WHITE)
}

pub fn hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

pub fn hint_key() -> Style {
    bold(NEON_CYAN)
}

pub fn error_text() -> Style {
    bold(ERROR_RED)
}

/// An active filter value stands out; "All" stays muted.
pub fn choice(active: bool) -> Style {
    if active { bold(ELECTRIC_PURPLE) } else { text() }
}

pub fn loading() -> Style {
    Style::default().fg(ELECTRIC_YELLOW)
}

pub fn loaded() -> Style {
    Style::default().fg(SUCCESS_GREEN)
}

pub fn failed() -> Style {
    Style::default().fg(ERROR_RED)
}

pub fn spinner() -> Style {
    Style::default().fg(ELECTRIC_PURPLE)
}

pub fn session_code(track: i64) -> Style {
    let idx = track.rem_euclid(4).unsigned_abs();
    let color = usize::try_from(idx)
        .ok()
        .and_then(|i| TRACK_COLORS.get(i))
        .copied()
        .unwrap_or(NEON_CYAN);
    bold(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_colors_wrap_and_tolerate_negative_tracks() {
        assert_eq!(session_code(1), session_code(5));
        assert_eq!(session_code(-1), session_code(3));
    }
}
