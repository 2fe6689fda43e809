//! Single blog post view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use wayfarer_core::Component;

use super::render_status_line;
use crate::action::Action;
use crate::state::{AppState, Screen};

pub struct BlogDetailScreen;

impl Component<Action> for BlogDetailScreen {
    type Props<'a> = &'a AppState;

    fn render(&mut self, frame: &mut Frame, area: Rect, state: Self::Props<'_>) {
        let Screen::BlogDetail(id) = state.screen else {
            return;
        };
        let Some(blog) = state.blog(id) else {
            render_status_line(
                frame,
                area,
                "Blog not found (esc to go back)",
                Style::default().fg(Color::Red),
            );
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(blog.title.as_str());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let byline = match (blog.author.is_empty(), blog.date.is_empty()) {
            (false, false) => format!("{} · {}", blog.author, blog.date),
            (false, true) => blog.author.clone(),
            (true, false) => blog.date.clone(),
            (true, true) => String::new(),
        };
        let body = if blog.content.is_empty() {
            blog.summary.as_str()
        } else {
            blog.content.as_str()
        };

        let mut lines = Vec::new();
        if !byline.is_empty() {
            lines.push(Line::styled(
                byline,
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            ));
            lines.push(Line::raw(""));
        }
        lines.push(Line::raw(body));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
