//! Destination gallery, filterable by year
//!
//! `y` cycles through the years present in the data (newest first) and
//! back to all.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};
use wayfarer_core::{Component, EventKind};
use wayfarer_components::{SelectList, SelectListProps};

use super::{render_status_line, spinner};
use crate::action::Action;
use crate::model::GalleryItem;
use crate::state::AppState;

#[derive(Default)]
pub struct GalleryScreen {
    list: SelectList,
}

fn gallery_row(item: &GalleryItem) -> String {
    let mut row = format!("{} ({})", item.title, item.year);
    if !item.location.is_empty() {
        row.push_str(&format!(" · {}", item.location));
    }
    if !item.category.is_empty() {
        row.push_str(&format!(" · {}", item.category));
    }
    row
}

impl Component<Action> for GalleryScreen {
    type Props<'a> = &'a AppState;

    fn handle_event(
        &mut self,
        event: &EventKind,
        state: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if let EventKind::Key(key) = event {
            match key.code {
                KeyCode::Char('y') => return vec![Action::GalleryYearCycle],
                KeyCode::Char('r') => return vec![Action::GalleryFetch],
                _ => {}
            }
        }

        let rows: Vec<String> = state.visible_gallery().iter().map(|i| gallery_row(i)).collect();
        self.list
            .handle_event(
                event,
                SelectListProps {
                    items: &rows,
                    title: "",
                    selected: state.gallery_selected,
                    is_focused: true,
                    on_select: Action::GallerySelect,
                    on_activate: Action::GallerySelect,
                },
            )
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: Self::Props<'_>) {
        let year = state
            .gallery_filter
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "all".to_string());

        if state.gallery.loading && state.gallery.items.is_empty() {
            let block = Block::default().borders(Borders::ALL).title("Gallery");
            let inner = block.inner(area);
            frame.render_widget(block, area);
            render_status_line(
                frame,
                inner,
                &format!("{} Loading gallery...", spinner(state.tick_count)),
                Style::default().fg(Color::Yellow),
            );
            return;
        }
        if state.gallery.items.is_empty() {
            let block = Block::default().borders(Borders::ALL).title("Gallery");
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let (text, style) = match &state.gallery.error {
                Some(error) => (
                    format!("{}  (r to retry)", error),
                    Style::default().fg(Color::Red),
                ),
                None => ("Gallery is empty".to_string(), Style::default().fg(Color::Gray)),
            };
            render_status_line(frame, inner, &text, style);
            return;
        }

        let rows: Vec<String> = state.visible_gallery().iter().map(|i| gallery_row(i)).collect();
        let title = format!("Gallery ({}) · year: {} · y cycle", rows.len(), year);
        self.list.render(
            frame,
            area,
            SelectListProps::<Action> {
                items: &rows,
                title: &title,
                selected: state.gallery_selected,
                is_focused: true,
                on_select: Action::GallerySelect,
                on_activate: Action::GallerySelect,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::testing::key;

    #[test]
    fn y_cycles_the_year_filter() {
        let mut screen = GalleryScreen::default();
        let state = AppState::new();

        let actions: Vec<Action> = screen
            .handle_event(&EventKind::Key(key("y")), &state)
            .into_iter()
            .collect();
        assert_eq!(actions, vec![Action::GalleryYearCycle]);
    }

    #[test]
    fn rows_include_year_and_location() {
        let item = GalleryItem {
            id: 1,
            title: "Taj Mahal at dawn".into(),
            image: String::new(),
            year: 2024,
            category: "Heritage".into(),
            location: "Agra".into(),
        };
        assert_eq!(gallery_row(&item), "Taj Mahal at dawn (2024) · Agra · Heritage");
    }
}
