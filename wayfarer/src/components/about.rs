//! About page, static copy

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use wayfarer_core::Component;

use crate::action::Action;
use crate::state::AppState;
use crate::ticket::AGENCY_NAME;

pub struct AboutScreen;

impl Component<Action> for AboutScreen {
    type Props<'a> = &'a AppState;

    fn render(&mut self, frame: &mut Frame, area: Rect, _state: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("About {}", AGENCY_NAME));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let accent = Style::default()
            .fg(Color::Rgb(255, 87, 34))
            .add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::styled("Travel far, travel light.", accent),
            Line::raw(""),
            Line::raw(
                "WanderLux started in 2012 as two friends planning weekend getaways \
                 out of Bengaluru. Today we curate escapes across India and beyond, \
                 from backwater houseboats to alpine treks, with every itinerary \
                 walked by one of our own planners first.",
            ),
            Line::raw(""),
            Line::raw("  10+   years of curated travel"),
            Line::raw("  120+  destinations across four continents"),
            Line::raw("  25k+  travelers hosted"),
            Line::raw(""),
            Line::raw(
                "Every booking includes airport transfers, handpicked stays and a \
                 24/7 trip line. No hidden charges, no tourist traps.",
            ),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
