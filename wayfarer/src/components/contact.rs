//! Contact page: agency details next to a general enquiry form
//!
//! Submissions post to the same enquiries endpoint as package enquiries,
//! tagged as general.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use wayfarer_core::{Component, EventKind};
use wayfarer_components::{TextInput, TextInputProps};

use super::spinner;
use crate::action::{Action, ContactField};
use crate::state::AppState;
use crate::ticket::{AGENCY_NAME, SUPPORT_EMAIL};

#[derive(Default)]
pub struct ContactScreen {
    inputs: [TextInput; 4],
}

fn change_first_name(v: String) -> Action {
    Action::ContactFieldChange(ContactField::FirstName, v)
}
fn change_last_name(v: String) -> Action {
    Action::ContactFieldChange(ContactField::LastName, v)
}
fn change_email(v: String) -> Action {
    Action::ContactFieldChange(ContactField::Email, v)
}
fn change_message(v: String) -> Action {
    Action::ContactFieldChange(ContactField::Message, v)
}
fn submit(_: String) -> Action {
    Action::ContactSubmit
}

const FIELDS: [(&str, &str, &str, fn(String) -> Action); 4] = [
    ("First name", "", "first_name", change_first_name),
    ("Last name", "", "last_name", change_last_name),
    ("Email", "you@example.com", "email", change_email),
    ("Message", "how can we help?", "message", change_message),
];

fn field_value<'a>(state: &'a AppState, index: usize) -> &'a str {
    let form = &state.contact_form;
    match index {
        0 => &form.first_name,
        1 => &form.last_name,
        2 => &form.email,
        _ => &form.message,
    }
}

impl Component<Action> for ContactScreen {
    type Props<'a> = &'a AppState;

    fn handle_event(
        &mut self,
        event: &EventKind,
        state: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let focus = state.contact_form.focus.min(FIELDS.len() - 1);
        let (label, placeholder, error_key, on_change) = FIELDS[focus];

        let actions: Vec<Action> = self.inputs[focus]
            .handle_event(
                event,
                TextInputProps {
                    value: field_value(state, focus),
                    label,
                    placeholder,
                    is_focused: true,
                    error: state.contact_form.error_for(error_key),
                    on_change,
                    on_submit: submit,
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
            KeyCode::Tab | KeyCode::Down => vec![Action::ContactFocusNext],
            KeyCode::BackTab | KeyCode::Up => vec![Action::ContactFocusPrev],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: Self::Props<'_>) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(40), Constraint::Min(0)])
            .split(area);

        let block = Block::default().borders(Borders::ALL).title("Reach us");
        let inner = block.inner(columns[0]);
        frame.render_widget(block, columns[0]);
        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(
                    AGENCY_NAME,
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Line::raw(""),
                Line::raw("42 MG Road, Bengaluru 560001"),
                Line::raw("+91 98765 43210"),
                Line::raw(SUPPORT_EMAIL),
                Line::raw(""),
                Line::raw("Mon-Sat, 9:00-18:00 IST"),
            ]),
            inner,
        );

        let block = Block::default().borders(Borders::ALL).title("Send a message");
        let inner = block.inner(columns[1]);
        frame.render_widget(block, columns[1]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        for (i, (label, placeholder, error_key, on_change)) in FIELDS.into_iter().enumerate() {
            self.inputs[i].render(
                frame,
                rows[i],
                TextInputProps {
                    value: field_value(state, i),
                    label,
                    placeholder,
                    is_focused: state.contact_form.focus == i,
                    error: state.contact_form.error_for(error_key),
                    on_change,
                    on_submit: submit,
                },
            );
        }

        let status = if state.enquiry_status.loading {
            Line::styled(
                format!("{} Sending...", spinner(state.tick_count)),
                Style::default().fg(Color::Yellow),
            )
        } else {
            Line::styled(
                "enter send · tab next field",
                Style::default().fg(Color::DarkGray),
            )
        };
        frame.render_widget(Paragraph::new(status), rows[4]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::testing::key;

    #[test]
    fn typing_fills_the_focused_field() {
        let mut screen = ContactScreen::default();
        let mut state = AppState::new();
        state.contact_form.focus = 2;

        let actions: Vec<Action> = screen
            .handle_event(&EventKind::Key(key("p")), &state)
            .into_iter()
            .collect();
        assert_eq!(
            actions,
            vec![Action::ContactFieldChange(ContactField::Email, "p".into())]
        );
    }

    #[test]
    fn enter_submits_from_any_field() {
        let mut screen = ContactScreen::default();
        let state = AppState::new();

        let actions: Vec<Action> = screen
            .handle_event(&EventKind::Key(key("enter")), &state)
            .into_iter()
            .collect();
        assert_eq!(actions, vec![Action::ContactSubmit]);
    }

    #[test]
    fn tab_moves_between_fields() {
        let mut screen = ContactScreen::default();
        let state = AppState::new();

        let actions: Vec<Action> = screen
            .handle_event(&EventKind::Key(key("shift+tab")), &state)
            .into_iter()
            .collect();
        assert_eq!(actions, vec![Action::ContactFocusPrev]);
    }
}
