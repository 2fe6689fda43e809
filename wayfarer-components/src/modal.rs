//! Centered notice overlay
//!
//! Used for transient banners: booking confirmations, enquiry success, and
//! API errors. Rendered last so it sits above the active screen.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

/// Visual flavor of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    fn color(self) -> Color {
        match self {
            NoticeKind::Info => Color::Cyan,
            NoticeKind::Success => Color::Green,
            NoticeKind::Error => Color::Red,
        }
    }

    fn title(self) -> &'static str {
        match self {
            NoticeKind::Info => " Info ",
            NoticeKind::Success => " Success ",
            NoticeKind::Error => " Error ",
        }
    }
}

/// Render a centered notice box over whatever was drawn before it.
///
/// Clears the cells underneath so screen content does not bleed through.
pub fn render_notice(frame: &mut Frame, area: Rect, kind: NoticeKind, message: &str) {
    let width = (message.len() as u16 + 6).clamp(30, area.width.saturating_sub(4));
    let height = 5;
    let modal_area = centered_rect(width, height, area);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(kind.color()))
        .title(kind.title())
        .padding(Padding::horizontal(1));

    let body = Paragraph::new(Line::raw(message))
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(body, modal_area);
}

/// Calculate a centered rectangle within an area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;
    use wayfarer_core::testing::RenderHarness;

    #[test]
    fn notice_covers_background() {
        let mut harness = RenderHarness::new(80, 24);

        let output = harness.render_to_string_plain(|frame| {
            frame.render_widget(Paragraph::new("Background content"), frame.area());
            render_notice(
                frame,
                frame.area(),
                NoticeKind::Success,
                "Enquiry submitted successfully",
            );
        });

        assert!(output.contains("Enquiry submitted successfully"));
        assert!(output.contains("Success"));
    }

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let centered = centered_rect(40, 10, area);

        assert_eq!(centered.width, 40);
        assert_eq!(centered.height, 10);
        assert_eq!(centered.x, 20);
        assert_eq!(centered.y, 7);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let centered = centered_rect(100, 50, area);

        assert!(centered.width <= 28);
        assert!(centered.height <= 8);
    }
}
