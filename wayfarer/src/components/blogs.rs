//! Blog index

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
use crate::model::Blog;
use crate::state::AppState;

#[derive(Default)]
pub struct BlogsScreen {
    list: SelectList,
}

fn blog_row(blog: &Blog) -> String {
    let mut row = blog.title.clone();
    if !blog.author.is_empty() {
        row.push_str(&format!(" · {}", blog.author));
    }
    if !blog.date.is_empty() {
        row.push_str(&format!(" · {}", blog.date));
    }
    row
}

impl Component<Action> for BlogsScreen {
    type Props<'a> = &'a AppState;

    fn handle_event(
        &mut self,
        event: &EventKind,
        state: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if let EventKind::Key(key) = event {
            if key.code == KeyCode::Char('r') {
                return vec![Action::BlogsFetch];
            }
        }

        let rows: Vec<String> = state.blogs.items.iter().map(blog_row).collect();
        self.list
            .handle_event(
                event,
                SelectListProps {
                    items: &rows,
                    title: "",
                    selected: state.blogs_selected,
                    is_focused: true,
                    on_select: Action::BlogSelect,
                    on_activate: Action::BlogOpen,
                },
            )
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: Self::Props<'_>) {
        if state.blogs.loading && state.blogs.items.is_empty() {
            let block = Block::default().borders(Borders::ALL).title("Blogs");
            let inner = block.inner(area);
            frame.render_widget(block, area);
            render_status_line(
                frame,
                inner,
                &format!("{} Loading blogs...", spinner(state.tick_count)),
                Style::default().fg(Color::Yellow),
            );
            return;
        }
        if state.blogs.items.is_empty() {
            let block = Block::default().borders(Borders::ALL).title("Blogs");
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let (text, style) = match &state.blogs.error {
                Some(error) => (
                    format!("{}  (r to retry)", error),
                    Style::default().fg(Color::Red),
                ),
                None => ("No posts yet".to_string(), Style::default().fg(Color::Gray)),
            };
            render_status_line(frame, inner, &text, style);
            return;
        }

        let rows: Vec<String> = state.blogs.items.iter().map(blog_row).collect();
        let title = format!("Blogs ({})", rows.len());
        self.list.render(
            frame,
            area,
            SelectListProps::<Action> {
                items: &rows,
                title: &title,
                selected: state.blogs_selected,
                is_focused: true,
                on_select: Action::BlogSelect,
                on_activate: Action::BlogOpen,
            },
        );
    }
}
