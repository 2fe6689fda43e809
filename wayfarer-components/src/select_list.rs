//! Scrollable selection list
//!
//! Backs the package list, the blog index, the gallery year picker, and the
//! profile booking history. Navigation moves the highlight (`on_select`);
//! Enter activates the highlighted row (`on_activate`), which the screens map
//! to opening a detail view.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use wayfarer_core::{Component, EventKind};

/// Props for [`SelectList`].
pub struct SelectListProps<'a, A> {
    /// Rows to display
    pub items: &'a [String],
    /// Block title (e.g. "Packages (12)")
    pub title: &'a str,
    /// Currently highlighted index
    pub selected: usize,
    /// Whether this list has focus
    pub is_focused: bool,
    /// Callback when the highlight moves
    pub on_select: fn(usize) -> A,
    /// Callback when a row is activated with Enter
    pub on_activate: fn(usize) -> A,
}

/// A scrollable list with vim-style navigation.
///
/// j/k/up/down and mouse scroll move, g/G jump to the ends, Enter activates.
#[derive(Default)]
pub struct SelectList {
    /// Scroll offset for the viewport
    scroll_offset: usize,
}

impl SelectList {
    /// Create a new SelectList.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the highlighted row inside the viewport.
    fn ensure_visible(&mut self, selected: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + viewport_height {
            self.scroll_offset = selected.saturating_sub(viewport_height - 1);
        }
    }
}

impl<A> Component<A> for SelectList {
    type Props<'a> = SelectListProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused || props.items.is_empty() {
            return None;
        }

        let last = props.items.len() - 1;

        if let EventKind::Scroll { delta, .. } = event {
            let next = if *delta > 0 {
                (props.selected + 1).min(last)
            } else {
                props.selected.saturating_sub(1)
            };
            return (next != props.selected).then(|| (props.on_select)(next));
        }

        let EventKind::Key(key) = event else {
            return None;
        };

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let next = (props.selected + 1).min(last);
                (next != props.selected).then(|| (props.on_select)(next))
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let next = props.selected.saturating_sub(1);
                (next != props.selected).then(|| (props.on_select)(next))
            }
            KeyCode::Char('g') | KeyCode::Home => {
                (props.selected != 0).then(|| (props.on_select)(0))
            }
            KeyCode::Char('G') | KeyCode::End => {
                (props.selected != last).then(|| (props.on_select)(last))
            }
            KeyCode::Enter => Some((props.on_activate)(props.selected)),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let viewport_height = area.height.saturating_sub(2) as usize;
        self.ensure_visible(props.selected, viewport_height);

        let items: Vec<ListItem> = props
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if i == props.selected && props.is_focused {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else if i == props.selected {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::raw(item.as_str())).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(props.title)
                .border_style(if props.is_focused {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                }),
        );

        let mut state = ListState::default().with_selected(Some(props.selected));
        *state.offset_mut() = self.scroll_offset;

        frame.render_stateful_widget(list, area, &mut state);
    }
}
