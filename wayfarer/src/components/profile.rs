//! Profile screen: identity block plus booking history
//!
//! The account is a fixed demo identity; only the booking history is real
//! data. Enter or `d` on a booking writes its PDF ticket.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use wayfarer_core::{Component, EventKind};
use wayfarer_components::{SelectList, SelectListProps};

use super::{format_inr, render_status_line, spinner};
use crate::action::Action;
use crate::model::Booking;
use crate::state::{AppState, MOCK_USER};

#[derive(Default)]
pub struct ProfileScreen {
    list: SelectList,
}

fn booking_row(booking: &Booking) -> String {
    format!(
        "#{} · {} · {} · {} · {}",
        booking.id,
        booking.package_title.as_deref().unwrap_or("N/A"),
        booking.date.as_deref().unwrap_or("N/A"),
        booking
            .total_amount
            .map(format_inr)
            .unwrap_or_else(|| "₹0".to_string()),
        booking.status.as_deref().unwrap_or("Pending"),
    )
}

impl Component<Action> for ProfileScreen {
    type Props<'a> = &'a AppState;

    fn handle_event(
        &mut self,
        event: &EventKind,
        state: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if let EventKind::Key(key) = event {
            match key.code {
                KeyCode::Char('d') if !state.bookings.slice.items.is_empty() => {
                    return vec![Action::TicketSave(state.profile_selected)];
                }
                KeyCode::Char('r') => return vec![Action::BookingsFetch],
                _ => {}
            }
        }

        let rows: Vec<String> = state.bookings.slice.items.iter().map(booking_row).collect();
        self.list
            .handle_event(
                event,
                SelectListProps {
                    items: &rows,
                    title: "",
                    selected: state.profile_selected,
                    is_focused: true,
                    on_select: Action::ProfileSelect,
                    on_activate: Action::TicketSave,
                },
            )
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: Self::Props<'_>) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(area);

        let block = Block::default().borders(Borders::ALL).title("Account");
        let inner = block.inner(rows[0]);
        frame.render_widget(block, rows[0]);
        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(
                    MOCK_USER.name,
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Line::raw(MOCK_USER.email),
                Line::raw(format!("Member since {}", MOCK_USER.member_since)),
                Line::raw(format!(
                    "Bookings: {}",
                    state.bookings.slice.items.len()
                )),
            ]),
            inner,
        );

        let slice = &state.bookings.slice;
        if slice.loading && slice.items.is_empty() {
            let block = Block::default().borders(Borders::ALL).title("Bookings");
            let inner = block.inner(rows[1]);
            frame.render_widget(block, rows[1]);
            render_status_line(
                frame,
                inner,
                &format!("{} Loading bookings...", spinner(state.tick_count)),
                Style::default().fg(Color::Yellow),
            );
            return;
        }
        if slice.items.is_empty() {
            let block = Block::default().borders(Borders::ALL).title("Bookings");
            let inner = block.inner(rows[1]);
            frame.render_widget(block, rows[1]);
            let (text, style) = match &slice.error {
                Some(error) => (
                    format!("{}  (r to retry)", error),
                    Style::default().fg(Color::Red),
                ),
                None => (
                    "No bookings yet. Book a package to see it here.".to_string(),
                    Style::default().fg(Color::Gray),
                ),
            };
            render_status_line(frame, inner, &text, style);
            return;
        }

        let items: Vec<String> = slice.items.iter().map(booking_row).collect();
        let title = format!("Bookings ({}) · d ticket", items.len());
        self.list.render(
            frame,
            rows[1],
            SelectListProps::<Action> {
                items: &items,
                title: &title,
                selected: state.profile_selected,
                is_focused: true,
                on_select: Action::ProfileSelect,
                on_activate: Action::TicketSave,
            },
        );
    }
}
