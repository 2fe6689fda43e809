//! Confirmation screen shown after a booking is created
//!
//! Reads the booking carried in `state.bookings.current`; `d` writes the
//! PDF ticket for it. Opening this screen without a booking (a direct
//! navigation) shows a fallback instead.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use wayfarer_core::{Component, EventKind};

use super::{format_inr, render_status_line};
use crate::action::Action;
use crate::state::AppState;

pub struct BookingConfirmedScreen;

impl Component<Action> for BookingConfirmedScreen {
    type Props<'a> = &'a AppState;

    fn handle_event(
        &mut self,
        event: &EventKind,
        state: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let EventKind::Key(key) = event else {
            return None;
        };
        if key.code != KeyCode::Char('d') {
            return None;
        }

        state.bookings.current.as_ref().and_then(|current| {
            state
                .bookings
                .slice
                .items
                .iter()
                .position(|b| b.id == current.id)
                .map(Action::TicketSave)
        })
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: Self::Props<'_>) {
        let Some(booking) = &state.bookings.current else {
            render_status_line(
                frame,
                area,
                "No booking found (esc to browse packages)",
                Style::default().fg(Color::Red),
            );
            return;
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Length(14),
                Constraint::Min(0),
            ])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(52),
                Constraint::Min(0),
            ])
            .split(rows[1]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));
        let inner = block.inner(columns[1]);
        frame.render_widget(block, columns[1]);

        let lines = vec![
            Line::styled(
                "Booking Confirmed!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .centered(),
            Line::raw(""),
            Line::raw(format!("Booking ID  #{}", booking.id)),
            Line::raw(format!(
                "Package     {}",
                booking.package_title.as_deref().unwrap_or("N/A")
            )),
            Line::raw(format!("Traveler    {}", booking.traveler_name())),
            Line::raw(format!(
                "Date        {}",
                booking.date.as_deref().unwrap_or("N/A")
            )),
            Line::raw(format!("Travelers   {}", booking.travelers.unwrap_or(0))),
            Line::raw(format!(
                "Total       {}",
                booking
                    .total_amount
                    .map(format_inr)
                    .unwrap_or_else(|| "₹0".to_string())
            )),
            Line::raw(format!(
                "Status      {}",
                booking.status.as_deref().unwrap_or("Pending")
            )),
            Line::raw(""),
            Line::styled(
                "d download ticket · 6 profile · esc browse packages",
                Style::default().fg(Color::DarkGray),
            )
            .centered(),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
