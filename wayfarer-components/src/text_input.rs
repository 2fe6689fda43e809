//! Single-line labeled text input
//!
//! Used for every form field in the app: traveler details, payment fields,
//! the enquiry form, and the package search box. Carries an optional
//! validation error which is rendered below the border in red.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use wayfarer_core::{Component, EventKind};

/// Props for [`TextInput`].
pub struct TextInputProps<'a, A> {
    /// Current input value
    pub value: &'a str,
    /// Field label, shown as the block title
    pub label: &'a str,
    /// Placeholder text when empty
    pub placeholder: &'a str,
    /// Whether this field has focus
    pub is_focused: bool,
    /// Validation error for this field, if any
    pub error: Option<&'a str>,
    /// Callback when value changes
    pub on_change: fn(String) -> A,
    /// Callback when user submits (Enter)
    pub on_submit: fn(String) -> A,
}

/// A single-line text input with cursor tracking.
///
/// Emits `on_change` for each edit and `on_submit` for Enter. The value
/// itself lives in app state; the component only owns the cursor.
#[derive(Default)]
pub struct TextInput {
    /// Cursor position (byte index into the value)
    cursor: usize,
}

/// Byte index of the char boundary before `pos`.
fn prev_boundary(value: &str, pos: usize) -> usize {
    let mut p = pos.saturating_sub(1);
    while p > 0 && !value.is_char_boundary(p) {
        p -= 1;
    }
    p
}

/// Byte index of the char boundary after `pos`.
fn next_boundary(value: &str, pos: usize) -> usize {
    let mut p = (pos + 1).min(value.len());
    while p < value.len() && !value.is_char_boundary(p) {
        p += 1;
    }
    p
}

impl TextInput {
    /// Create a new input with the cursor at the start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the cursor to the end of `value`, for focusing a pre-filled field.
    pub fn cursor_to_end(&mut self, value: &str) {
        self.cursor = value.len();
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut next = String::with_capacity(value.len() + c.len_utf8());
        next.push_str(&value[..self.cursor]);
        next.push(c);
        next.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        next
    }

    fn delete_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let start = prev_boundary(value, self.cursor);
        let mut next = String::with_capacity(value.len());
        next.push_str(&value[..start]);
        next.push_str(&value[self.cursor..]);
        self.cursor = start;
        Some(next)
    }

    fn delete_at(&self, value: &str) -> Option<String> {
        if self.cursor >= value.len() {
            return None;
        }
        let end = next_boundary(value, self.cursor);
        let mut next = String::with_capacity(value.len());
        next.push_str(&value[..self.cursor]);
        next.push_str(&value[end..]);
        Some(next)
    }
}

impl<A> Component<A> for TextInput {
    type Props<'a> = TextInputProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused {
            return None;
        }

        self.clamp_cursor(props.value);

        let EventKind::Key(key) = event else {
            return None;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = props.value.len();
                    None
                }
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some((props.on_change)(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let next = self.insert_char(props.value, c);
                Some((props.on_change)(next))
            }
            KeyCode::Backspace => self.delete_before(props.value).map(|v| (props.on_change)(v)),
            KeyCode::Delete => self.delete_at(props.value).map(|v| (props.on_change)(v)),
            KeyCode::Left => {
                self.cursor = prev_boundary(props.value, self.cursor);
                None
            }
            KeyCode::Right => {
                if self.cursor < props.value.len() {
                    self.cursor = next_boundary(props.value, self.cursor);
                }
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            KeyCode::Enter => Some((props.on_submit)(props.value.to_string())),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let border_style = if props.error.is_some() {
            Style::default().fg(Color::Red)
        } else if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let display = if props.value.is_empty() {
            props.placeholder
        } else {
            props.value
        };
        let text_style = if props.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        // Reserve the last row for the error line when present
        let (input_area, error_area) = if props.error.is_some() && area.height > 3 {
            let input = Rect { height: area.height - 1, ..area };
            let error = Rect {
                y: area.y + area.height - 1,
                height: 1,
                ..area
            };
            (input, Some(error))
        } else {
            (area, None)
        };

        let paragraph = Paragraph::new(display).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(props.label),
        );
        frame.render_widget(paragraph, input_area);

        if let (Some(error_area), Some(message)) = (error_area, props.error) {
            let line = Line::styled(message, Style::default().fg(Color::Red));
            frame.render_widget(Paragraph::new(line), error_area);
        }

        if props.is_focused {
            let cursor_x = input_area.x + 1 + self.cursor as u16;
            if cursor_x < input_area.x + input_area.width.saturating_sub(1) {
                frame.set_cursor_position((cursor_x, input_area.y + 1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::testing::{key, RenderHarness};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Change(String),
        Submit(String),
    }

    fn props(value: &str) -> TextInputProps<'_, TestAction> {
        TextInputProps {
            value,
            label: "Name",
            placeholder: "Full name",
            is_focused: true,
            error: None,
            on_change: TestAction::Change,
            on_submit: TestAction::Submit,
        }
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut input = TextInput::new();

        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(key("a")), props(""))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![TestAction::Change("a".into())]);
    }

    #[test]
    fn typing_appends_at_end() {
        let mut input = TextInput::new();
        input.cursor_to_end("Priya");

        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(key("!")), props("Priya"))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![TestAction::Change("Priya!".into())]);
    }

    #[test]
    fn backspace_removes_previous_char() {
        let mut input = TextInput::new();
        input.cursor_to_end("Priya");

        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(key("backspace")), props("Priya"))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![TestAction::Change("Priy".into())]);
        assert_eq!(input.cursor, 4);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = TextInput::new();

        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(key("backspace")), props("Priya"))
            .into_iter()
            .collect();

        assert!(actions.is_empty());
    }

    #[test]
    fn multibyte_editing_stays_on_boundaries() {
        let mut input = TextInput::new();
        input.cursor_to_end("café");

        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(key("backspace")), props("café"))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![TestAction::Change("caf".into())]);
    }

    #[test]
    fn enter_submits_current_value() {
        let mut input = TextInput::new();

        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(key("enter")), props("Priya"))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![TestAction::Submit("Priya".into())]);
    }

    #[test]
    fn ctrl_u_clears_line() {
        let mut input = TextInput::new();
        input.cursor_to_end("Priya");

        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(key("ctrl+u")), props("Priya"))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![TestAction::Change(String::new())]);
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn unfocused_ignores_input() {
        let mut input = TextInput::new();
        let mut p = props("");
        p.is_focused = false;

        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(key("a")), p)
            .into_iter()
            .collect();

        assert!(actions.is_empty());
    }

    #[test]
    fn renders_label_and_placeholder() {
        let mut render = RenderHarness::new(30, 3);
        let mut input = TextInput::new();

        let output = render.render_to_string_plain(|frame| {
            input.render(frame, frame.area(), props(""));
        });

        assert!(output.contains("Name"));
        assert!(output.contains("Full name"));
    }

    #[test]
    fn renders_error_line() {
        let mut render = RenderHarness::new(40, 4);
        let mut input = TextInput::new();

        let output = render.render_to_string_plain(|frame| {
            let mut p = props("not-an-email");
            p.error = Some("Email is invalid");
            input.render(frame, frame.area(), p);
        });

        assert!(output.contains("not-an-email"));
        assert!(output.contains("Email is invalid"));
    }
}
