//! Bottom help bar with per-screen key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::text_entry_active;
use crate::state::{AppState, Screen};

pub fn render_help_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = if text_entry_active(state) {
        match state.screen {
            Screen::Booking(_) => "type to edit · enter continue · tab field · esc back",
            Screen::Contact => "type to edit · enter send · tab field",
            Screen::PackageDetail(_) => "type to edit · enter submit · tab field · esc close",
            _ => "type to search · enter done · tab list",
        }
    } else {
        match state.screen {
            Screen::Packages => "j/k move · enter open · tab filters · r refresh · q quit",
            Screen::PackageDetail(_) => "b book · e enquire · esc back · q quit",
            Screen::BookingConfirmed => "d ticket · 6 profile · esc packages · q quit",
            Screen::Profile => "j/k move · d ticket · r refresh · q quit",
            Screen::Gallery => "j/k move · y year · r refresh · q quit",
            Screen::Blogs => "j/k move · enter read · r refresh · q quit",
            Screen::BlogDetail(_) => "esc back · q quit",
            _ => "1-6 screens · esc back · q quit",
        }
    };

    frame.render_widget(
        Paragraph::new(Line::styled(
            format!(" {}", hints),
            Style::default().fg(Color::DarkGray),
        )),
        area,
    );
}
