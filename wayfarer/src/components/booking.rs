//! Booking wizard screen: traveler details, then mock payment
//!
//! The wizard state machine lives in `crate::wizard`; this component only
//! routes keys into the focused field and renders the current step next to
//! a price summary sidebar. No card data is validated or sent anywhere.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use wayfarer_core::{Component, EventKind};
use wayfarer_components::{TextInput, TextInputProps};

use super::{format_inr, render_status_line};
use crate::action::{Action, WizardField};
use crate::model::Package;
use crate::state::{AppState, Screen};
use crate::wizard::{total, Wizard};

#[derive(Default)]
pub struct BookingScreen {
    traveler_inputs: [TextInput; 6],
    payment_inputs: [TextInput; 3],
}

fn change_first_name(v: String) -> Action {
    Action::WizardFieldChange(WizardField::FirstName, v)
}
fn change_last_name(v: String) -> Action {
    Action::WizardFieldChange(WizardField::LastName, v)
}
fn change_email(v: String) -> Action {
    Action::WizardFieldChange(WizardField::Email, v)
}
fn change_phone(v: String) -> Action {
    Action::WizardFieldChange(WizardField::Phone, v)
}
fn change_date(v: String) -> Action {
    Action::WizardFieldChange(WizardField::Date, v)
}
fn change_travelers(v: String) -> Action {
    Action::WizardFieldChange(WizardField::Travelers, v)
}
fn change_card_number(v: String) -> Action {
    Action::WizardFieldChange(WizardField::CardNumber, v)
}
fn change_expiry(v: String) -> Action {
    Action::WizardFieldChange(WizardField::Expiry, v)
}
fn change_cvv(v: String) -> Action {
    Action::WizardFieldChange(WizardField::Cvv, v)
}
fn submit_traveler(_: String) -> Action {
    Action::WizardSubmitTraveler
}
fn submit_payment(_: String) -> Action {
    Action::WizardSubmitPayment
}

/// Step-1 fields in focus order: label, placeholder, missing key, on_change.
const TRAVELER_FIELDS: [(&str, &str, &str, fn(String) -> Action); 6] = [
    ("First name", "", "first_name", change_first_name),
    ("Last name", "", "last_name", change_last_name),
    ("Email", "you@example.com", "email", change_email),
    ("Phone", "10-digit mobile", "phone", change_phone),
    ("Travel date", "YYYY-MM-DD", "date", change_date),
    ("Travelers", "2", "travelers", change_travelers),
];

const PAYMENT_FIELDS: [(&str, &str, &str, fn(String) -> Action); 3] = [
    ("Card number", "4111 1111 1111 1111", "card_number", change_card_number),
    ("Expiry", "MM/YY", "expiry", change_expiry),
    ("CVV", "123", "cvv", change_cvv),
];

fn missing_error(state: &AppState, key: &'static str) -> Option<&'static str> {
    if !state.wizard_ui.missing.contains(&key) {
        return None;
    }
    Some(if key == "travelers" {
        "Enter at least 1"
    } else {
        "Required"
    })
}

impl BookingScreen {
    fn render_progress(&self, frame: &mut Frame, area: Rect, step: u8) {
        let dot = |n: u8| if step >= n { "●" } else { "○" };
        let label = match step {
            1 => "Traveler details",
            2 => "Payment",
            _ => "Confirmed",
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    format!("Step {} of 3  {} {} {}", step, dot(1), dot(2), dot(3)),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  ·  "),
                Span::raw(label),
            ])),
            area,
        );
    }

    fn render_summary(
        &self,
        frame: &mut Frame,
        area: Rect,
        package: &Package,
        travelers: u32,
    ) {
        let block = Block::default().borders(Borders::ALL).title("Summary");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let accent = Style::default()
            .fg(Color::Rgb(255, 87, 34))
            .add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::styled(
                package.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw(package.location.clone()),
            Line::raw(package.duration.clone()),
            Line::raw(""),
            Line::raw(format!("Price      {}", format_inr(package.price))),
            Line::raw(format!("Travelers  x{}", travelers)),
            Line::raw("─".repeat(inner.width.saturating_sub(1) as usize)),
            Line::from(vec![
                Span::raw("Total      "),
                Span::styled(format_inr(total(package.price, travelers)), accent),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_fields(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        step: u8,
        values: &[&str],
    ) {
        let fields: &[(&str, &str, &str, fn(String) -> Action)] = if step == 1 {
            &TRAVELER_FIELDS
        } else {
            &PAYMENT_FIELDS
        };

        let mut constraints = vec![Constraint::Length(3); fields.len()];
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (i, (label, placeholder, key, on_change)) in fields.iter().enumerate() {
            let on_submit = if step == 1 { submit_traveler } else { submit_payment };
            let input = if step == 1 {
                &mut self.traveler_inputs[i]
            } else {
                &mut self.payment_inputs[i]
            };
            input.render(
                frame,
                rows[i],
                TextInputProps {
                    value: values[i],
                    label,
                    placeholder,
                    is_focused: state.wizard_ui.focus == i,
                    error: missing_error(state, key),
                    on_change: *on_change,
                    on_submit,
                },
            );
        }

        let hint = if step == 1 {
            "enter continue · tab next field"
        } else {
            "enter pay (demo, no card is charged) · esc back"
        };
        frame.render_widget(
            Paragraph::new(Line::styled(hint, Style::default().fg(Color::DarkGray))),
            rows[fields.len()],
        );
    }
}

impl Component<Action> for BookingScreen {
    type Props<'a> = &'a AppState;

    fn handle_event(
        &mut self,
        event: &EventKind,
        state: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let Some(wizard) = &state.wizard else {
            return Vec::new();
        };

        let actions: Vec<Action> = match wizard {
            Wizard::TravelerInfo(form) => {
                let focus = state.wizard_ui.focus.min(TRAVELER_FIELDS.len() - 1);
                let (label, placeholder, key, on_change) = TRAVELER_FIELDS[focus];
                let values = [
                    form.first_name.as_str(),
                    form.last_name.as_str(),
                    form.email.as_str(),
                    form.phone.as_str(),
                    form.date.as_str(),
                    form.travelers.as_str(),
                ];
                self.traveler_inputs[focus]
                    .handle_event(
                        event,
                        TextInputProps {
                            value: values[focus],
                            label,
                            placeholder,
                            is_focused: true,
                            error: missing_error(state, key),
                            on_change,
                            on_submit: submit_traveler,
                        },
                    )
                    .into_iter()
                    .collect()
            }
            Wizard::Payment { payment, .. } => {
                let focus = state.wizard_ui.focus.min(PAYMENT_FIELDS.len() - 1);
                let (label, placeholder, key, on_change) = PAYMENT_FIELDS[focus];
                let values = [
                    payment.card_number.as_str(),
                    payment.expiry.as_str(),
                    payment.cvv.as_str(),
                ];
                self.payment_inputs[focus]
                    .handle_event(
                        event,
                        TextInputProps {
                            value: values[focus],
                            label,
                            placeholder,
                            is_focused: true,
                            error: missing_error(state, key),
                            on_change,
                            on_submit: submit_payment,
                        },
                    )
                    .into_iter()
                    .collect()
            }
            Wizard::Confirmed(_) => Vec::new(),
        };
        if !actions.is_empty() {
            return actions;
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        match key.code {
            KeyCode::Tab | KeyCode::Down => vec![Action::WizardFocusNext],
            KeyCode::BackTab | KeyCode::Up => vec![Action::WizardFocusPrev],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: Self::Props<'_>) {
        let Screen::Booking(id) = state.screen else {
            return;
        };
        let Some(package) = state.package(id).cloned() else {
            render_status_line(
                frame,
                area,
                "Package not found (esc to go back)",
                Style::default().fg(Color::Red),
            );
            return;
        };
        let Some(wizard) = &state.wizard else {
            return;
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);
        self.render_progress(frame, rows[0], wizard.step());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(36)])
            .split(rows[1]);

        match wizard {
            Wizard::TravelerInfo(form) => {
                let travelers = form.travelers.trim().parse::<u32>().unwrap_or(1).max(1);
                let values = [
                    form.first_name.as_str(),
                    form.last_name.as_str(),
                    form.email.as_str(),
                    form.phone.as_str(),
                    form.date.as_str(),
                    form.travelers.as_str(),
                ];
                self.render_fields(frame, columns[0], state, 1, &values);
                self.render_summary(frame, columns[1], &package, travelers);
            }
            Wizard::Payment { traveler, payment } => {
                let values = [
                    payment.card_number.as_str(),
                    payment.expiry.as_str(),
                    payment.cvv.as_str(),
                ];
                self.render_fields(frame, columns[0], state, 2, &values);
                self.render_summary(frame, columns[1], &package, traveler.travelers);
            }
            Wizard::Confirmed(_) => {}
        }
    }
}
