//! Package detail screen
//!
//! Shows the full package record plus a generated day-by-day itinerary.
//! `b` starts the booking wizard, `e` opens the enquiry panel with the
//! destination prefilled from the package.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use wayfarer_core::{Component, EventKind};
use wayfarer_components::{TextInput, TextInputProps};

use super::{format_inr, render_status_line, spinner};
use crate::action::{Action, EnquiryField};
use crate::model::Package;
use crate::state::{AppState, Screen};

#[derive(Default)]
pub struct PackageDetailScreen {
    enquiry_inputs: [TextInput; 7],
}

fn change_name(v: String) -> Action {
    Action::EnquiryFieldChange(EnquiryField::Name, v)
}
fn change_email(v: String) -> Action {
    Action::EnquiryFieldChange(EnquiryField::Email, v)
}
fn change_phone(v: String) -> Action {
    Action::EnquiryFieldChange(EnquiryField::Phone, v)
}
fn change_destination(v: String) -> Action {
    Action::EnquiryFieldChange(EnquiryField::Destination, v)
}
fn change_date(v: String) -> Action {
    Action::EnquiryFieldChange(EnquiryField::Date, v)
}
fn change_guests(v: String) -> Action {
    Action::EnquiryFieldChange(EnquiryField::Guests, v)
}
fn change_message(v: String) -> Action {
    Action::EnquiryFieldChange(EnquiryField::Message, v)
}
fn submit_enquiry(_: String) -> Action {
    Action::EnquirySubmit
}

/// Field metadata in focus order: label, placeholder, error key, on_change.
const ENQUIRY_FIELDS: [(&str, &str, &str, fn(String) -> Action); 7] = [
    ("Name", "your full name", "name", change_name),
    ("Email", "you@example.com", "email", change_email),
    ("Phone", "10-digit mobile", "phone", change_phone),
    ("Destination", "", "destination", change_destination),
    ("Travel date", "YYYY-MM-DD", "date", change_date),
    ("Guests", "1", "guests", change_guests),
    ("Message", "anything we should know?", "message", change_message),
];

fn enquiry_value<'a>(state: &'a AppState, index: usize) -> &'a str {
    let form = &state.enquiry_form;
    match index {
        0 => &form.name,
        1 => &form.email,
        2 => &form.phone,
        3 => &form.destination,
        4 => &form.date,
        5 => &form.guests,
        _ => &form.message,
    }
}

/// Day-by-day outline derived from the package duration.
fn itinerary_lines(package: &Package) -> Vec<String> {
    let days = package.itinerary_days();
    (1..=days)
        .map(|day| {
            let activity = if day == 1 {
                "Arrival, transfer and check-in"
            } else if day == days {
                "Check-out and departure"
            } else {
                "Sightseeing and local experiences"
            };
            format!("Day {}: {}", day, activity)
        })
        .collect()
}

impl PackageDetailScreen {
    fn handle_enquiry_key(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        let focus = state.enquiry_form.focus.min(ENQUIRY_FIELDS.len() - 1);
        let (label, placeholder, error_key, on_change) = ENQUIRY_FIELDS[focus];

        let actions: Vec<Action> = self.enquiry_inputs[focus]
            .handle_event(
                event,
                TextInputProps {
                    value: enquiry_value(state, focus),
                    label,
                    placeholder,
                    is_focused: true,
                    error: state.enquiry_form.error_for(error_key),
                    on_change,
                    on_submit: submit_enquiry,
                },
            )
            .into_iter()
            .collect();
        if !actions.is_empty() {
            return actions;
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        match key.code {
            KeyCode::Tab | KeyCode::Down => vec![Action::EnquiryFocusNext],
            KeyCode::BackTab | KeyCode::Up => vec![Action::EnquiryFocusPrev],
            _ => Vec::new(),
        }
    }

    fn render_info(&self, frame: &mut Frame, area: Rect, package: &Package, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(package.title.as_str());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let accent = Style::default().fg(Color::Rgb(255, 87, 34));
        let mut lines = vec![
            Line::from(vec![
                Span::styled(format_inr(package.price), accent.add_modifier(Modifier::BOLD)),
                Span::raw(" per person  ·  "),
                Span::raw(format!("{:.1}★", package.rating)),
                Span::raw(if package.featured { "  ·  ★ FEATURED" } else { "" }),
            ]),
            Line::raw(format!("Location: {}", package.location)),
            Line::raw(format!("Duration: {}", package.duration)),
            Line::raw(format!(
                "Category: {}{}{}",
                package.category,
                package
                    .region
                    .as_deref()
                    .map(|r| format!(" · {}", r))
                    .unwrap_or_default(),
                package
                    .sub_category
                    .as_deref()
                    .map(|s| format!(" · {}", s))
                    .unwrap_or_default(),
            )),
            Line::raw(""),
            Line::raw(package.description.as_str()),
            Line::raw(""),
            Line::styled("Itinerary", Style::default().add_modifier(Modifier::BOLD)),
        ];
        for item in itinerary_lines(package) {
            lines.push(Line::raw(format!("  {}", item)));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            if state.enquiry_open {
                "b book this package"
            } else {
                "b book this package · e enquire"
            },
            Style::default().fg(Color::DarkGray),
        ));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn render_enquiry(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Enquire")
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints = vec![Constraint::Length(3); ENQUIRY_FIELDS.len()];
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (i, (label, placeholder, error_key, on_change)) in
            ENQUIRY_FIELDS.into_iter().enumerate()
        {
            self.enquiry_inputs[i].render(
                frame,
                rows[i],
                TextInputProps {
                    value: enquiry_value(state, i),
                    label,
                    placeholder,
                    is_focused: state.enquiry_form.focus == i,
                    error: state.enquiry_form.error_for(error_key),
                    on_change,
                    on_submit: submit_enquiry,
                },
            );
        }

        let status = if state.enquiry_status.loading {
            Line::styled(
                format!("{} Submitting...", spinner(state.tick_count)),
                Style::default().fg(Color::Yellow),
            )
        } else {
            Line::styled("enter submit · esc close", Style::default().fg(Color::DarkGray))
        };
        frame.render_widget(Paragraph::new(status), rows[ENQUIRY_FIELDS.len()]);
    }
}

impl Component<Action> for PackageDetailScreen {
    type Props<'a> = &'a AppState;

    fn handle_event(
        &mut self,
        event: &EventKind,
        state: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if state.enquiry_open {
            return self.handle_enquiry_key(event, state);
        }

        let Screen::PackageDetail(id) = state.screen else {
            return Vec::new();
        };
        if state.package(id).is_none() {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        match key.code {
            KeyCode::Char('b') => vec![Action::WizardStart(id)],
            KeyCode::Char('e') => vec![Action::EnquiryToggle],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: Self::Props<'_>) {
        let Screen::PackageDetail(id) = state.screen else {
            return;
        };

        let Some(package) = state.package(id) else {
            if state.packages.loading {
                render_status_line(
                    frame,
                    area,
                    &format!("{} Loading package...", spinner(state.tick_count)),
                    Style::default().fg(Color::Yellow),
                );
            } else {
                render_status_line(
                    frame,
                    area,
                    "Package not found (esc to go back)",
                    Style::default().fg(Color::Red),
                );
            }
            return;
        };

        if state.enquiry_open {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0), Constraint::Length(44)])
                .split(area);
            self.render_info(frame, columns[0], package, state);
            self.render_enquiry(frame, columns[1], state);
        } else {
            self.render_info(frame, area, package, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::testing::key;

    fn detail_state() -> AppState {
        let mut state = AppState::new();
        state.packages.loaded(vec![Package {
            id: 5,
            title: "Kerala Backwaters".into(),
            description: "Houseboat cruise".into(),
            image: String::new(),
            price: 30_000,
            rating: 4.6,
            location: "Alleppey, India".into(),
            region: Some("Asia".into()),
            category: "Domestic".into(),
            sub_category: Some("Nature".into()),
            duration: "4 Days / 3 Nights".into(),
            featured: false,
        }]);
        state.screen = Screen::PackageDetail(5);
        state
    }

    #[test]
    fn b_starts_the_wizard_for_this_package() {
        let mut screen = PackageDetailScreen::default();
        let state = detail_state();

        let actions: Vec<Action> = screen
            .handle_event(&EventKind::Key(key("b")), &state)
            .into_iter()
            .collect();
        assert_eq!(actions, vec![Action::WizardStart(5)]);
    }

    #[test]
    fn booking_keys_are_inert_for_a_missing_package() {
        let mut screen = PackageDetailScreen::default();
        let mut state = detail_state();
        state.screen = Screen::PackageDetail(99);

        let actions: Vec<Action> = screen
            .handle_event(&EventKind::Key(key("b")), &state)
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn open_enquiry_panel_routes_typing_into_the_focused_field() {
        let mut screen = PackageDetailScreen::default();
        let mut state = detail_state();
        state.enquiry_open = true;
        state.enquiry_form.focus = 0;

        let actions: Vec<Action> = screen
            .handle_event(&EventKind::Key(key("b")), &state)
            .into_iter()
            .collect();
        // 'b' is text here, not a shortcut
        assert_eq!(
            actions,
            vec![Action::EnquiryFieldChange(EnquiryField::Name, "b".into())]
        );
    }

    #[test]
    fn tab_moves_enquiry_focus() {
        let mut screen = PackageDetailScreen::default();
        let mut state = detail_state();
        state.enquiry_open = true;

        let actions: Vec<Action> = screen
            .handle_event(&EventKind::Key(key("tab")), &state)
            .into_iter()
            .collect();
        assert_eq!(actions, vec![Action::EnquiryFocusNext]);
    }

    #[test]
    fn itinerary_covers_each_day() {
        let state = detail_state();
        let lines = itinerary_lines(&state.packages.items[0]);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Arrival"));
        assert!(lines[3].contains("departure"));
    }
}
