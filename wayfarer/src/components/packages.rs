//! Package catalog screen: filter panel on the left, result list on the right
//!
//! Tab moves focus between the panes. While the filter panel has focus the
//! cursor walks its rows: search box, price ceiling, one row per category,
//! region. Every filter edit re-derives the visible list immediately.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use wayfarer_core::{Component, EventKind};
use wayfarer_components::{SelectList, SelectListProps, TextInput, TextInputProps};

use super::{format_inr, render_status_line, spinner};
use crate::action::Action;
use crate::model::Package;
use crate::state::{AppState, PackagesFocus};

/// Filter panel rows addressed by `filter_cursor`.
const ROW_SEARCH: usize = 0;
const ROW_PRICE: usize = 1;
const ROW_CATEGORY_FIRST: usize = 2;
const ROW_REGION: usize = 5;

#[derive(Default)]
pub struct PackagesScreen {
    list: SelectList,
    search: TextInput,
}

fn filter_query_change(value: String) -> Action {
    Action::FilterQueryChange(value)
}

/// Enter in the search box hands focus back to the list.
fn search_submit(_: String) -> Action {
    Action::PackagesFocusToggle
}

/// Category rows shown in the filter panel. Falls back to the catalog's
/// three standing categories until `/categories` arrives.
fn category_rows(state: &AppState) -> Vec<String> {
    if state.categories.items.is_empty() {
        vec!["Weekend".into(), "Domestic".into(), "International".into()]
    } else {
        state
            .categories
            .items
            .iter()
            .take(3)
            .map(|c| c.name.clone())
            .collect()
    }
}

fn package_row(package: &Package) -> String {
    let featured = if package.featured { "  ★ FEATURED" } else { "" };
    format!(
        "{} · {} · {} · {:.1}★{}",
        package.title,
        package.location,
        format_inr(package.price),
        package.rating,
        featured
    )
}

impl PackagesScreen {
    fn handle_filter_key(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        let cursor = state.filter_cursor;

        if cursor == ROW_SEARCH {
            let actions: Vec<Action> = self
                .search
                .handle_event(
                    event,
                    TextInputProps {
                        value: &state.filter.query,
                        label: "Search",
                        placeholder: "title or destination",
                        is_focused: true,
                        error: None,
                        on_change: filter_query_change,
                        on_submit: search_submit,
                    },
                )
                .into_iter()
                .collect();
            if !actions.is_empty() {
                return actions;
            }
        }

        let categories = category_rows(state);
        match key.code {
            KeyCode::Tab | KeyCode::Esc => vec![Action::PackagesFocusToggle],
            KeyCode::Down => vec![Action::FilterCursorMove(1)],
            KeyCode::Up => vec![Action::FilterCursorMove(-1)],
            KeyCode::Char('j') if cursor != ROW_SEARCH => vec![Action::FilterCursorMove(1)],
            KeyCode::Char('k') if cursor != ROW_SEARCH => vec![Action::FilterCursorMove(-1)],
            KeyCode::Left | KeyCode::Char('h') if cursor == ROW_PRICE => {
                vec![Action::FilterPriceLower]
            }
            KeyCode::Right | KeyCode::Char('l') if cursor == ROW_PRICE => {
                vec![Action::FilterPriceRaise]
            }
            KeyCode::Enter | KeyCode::Char(' ') => match cursor {
                ROW_REGION => vec![Action::FilterCycleRegion],
                c if (ROW_CATEGORY_FIRST..ROW_REGION).contains(&c) => categories
                    .get(c - ROW_CATEGORY_FIRST)
                    .map(|name| vec![Action::FilterToggleCategory(name.clone())])
                    .unwrap_or_default(),
                _ => Vec::new(),
            },
            KeyCode::Char('s') if cursor != ROW_SEARCH => vec![Action::FilterCycleSubCategory],
            KeyCode::Char('x') if cursor != ROW_SEARCH => vec![Action::FilterClear],
            _ => Vec::new(),
        }
    }

    fn handle_list_key(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        if let EventKind::Key(key) = event {
            match key.code {
                KeyCode::Tab | KeyCode::Char('/') => return vec![Action::PackagesFocusToggle],
                KeyCode::Char('r') => return vec![Action::PackagesFetch],
                _ => {}
            }
        }

        let rows: Vec<String> = state
            .visible_packages()
            .iter()
            .map(|p| package_row(p))
            .collect();
        self.list
            .handle_event(
                event,
                SelectListProps {
                    items: &rows,
                    title: "",
                    selected: state.packages_selected,
                    is_focused: true,
                    on_select: Action::PackageSelect,
                    on_activate: Action::PackageOpen,
                },
            )
            .into_iter()
            .collect()
    }

    fn render_filter_panel(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.packages_focus == PackagesFocus::Filters;
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Filters")
            .border_style(if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let categories = category_rows(state);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // search box
                Constraint::Length(1), // price
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1), // category rows
                Constraint::Length(1), // region
                Constraint::Length(1), // sub-category (cycled with s)
                Constraint::Length(1), // spacer
                Constraint::Min(0),    // hints
            ])
            .split(inner);

        self.search.render(
            frame,
            rows[0],
            TextInputProps::<Action> {
                value: &state.filter.query,
                label: "Search",
                placeholder: "title or destination",
                is_focused: focused && state.filter_cursor == ROW_SEARCH,
                error: None,
                on_change: filter_query_change,
                on_submit: search_submit,
            },
        );

        let cursor_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let row_style = |row: usize| {
            if focused && state.filter_cursor == row {
                cursor_style
            } else {
                Style::default()
            }
        };
        let marker = |row: usize| if focused && state.filter_cursor == row { "▸ " } else { "  " };

        let price = if state.filter.price_ceiling.is_some() {
            format!("up to {}", format_inr(state.effective_price_ceiling()))
        } else {
            "any".to_string()
        };
        frame.render_widget(
            Paragraph::new(Line::styled(
                format!("{}Price    ◂ {} ▸", marker(ROW_PRICE), price),
                row_style(ROW_PRICE),
            )),
            rows[1],
        );

        for (i, name) in categories.iter().enumerate() {
            let row = ROW_CATEGORY_FIRST + i;
            let checked = if state
                .filter
                .categories
                .iter()
                .any(|c| c.eq_ignore_ascii_case(name))
            {
                "[x]"
            } else {
                "[ ]"
            };
            frame.render_widget(
                Paragraph::new(Line::styled(
                    format!("{}{} {}", marker(row), checked, name),
                    row_style(row),
                )),
                rows[2 + i],
            );
        }

        frame.render_widget(
            Paragraph::new(Line::styled(
                format!(
                    "{}Region   {}",
                    marker(ROW_REGION),
                    state.filter.region.as_deref().unwrap_or("all")
                ),
                row_style(ROW_REGION),
            )),
            rows[5],
        );
        frame.render_widget(
            Paragraph::new(Line::styled(
                format!(
                    "  Type     {}  (s)",
                    state.filter.sub_category.as_deref().unwrap_or("all")
                ),
                Style::default().fg(Color::Gray),
            )),
            rows[6],
        );

        let hint = if state.filter.is_active() {
            "enter toggle · x clear all"
        } else {
            "enter toggle"
        };
        frame.render_widget(
            Paragraph::new(Line::styled(hint, Style::default().fg(Color::DarkGray))),
            rows[8],
        );
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        if state.packages.loading && state.packages.items.is_empty() {
            let block = Block::default().borders(Borders::ALL).title("Packages");
            let inner = block.inner(area);
            frame.render_widget(block, area);
            render_status_line(
                frame,
                inner,
                &format!("{} Loading packages...", spinner(state.tick_count)),
                Style::default().fg(Color::Yellow),
            );
            return;
        }
        if let Some(error) = &state.packages.error {
            if state.packages.items.is_empty() {
                let block = Block::default().borders(Borders::ALL).title("Packages");
                let inner = block.inner(area);
                frame.render_widget(block, area);
                render_status_line(
                    frame,
                    inner,
                    &format!("{}  (r to retry)", error),
                    Style::default().fg(Color::Red),
                );
                return;
            }
        }

        let rows: Vec<String> = state
            .visible_packages()
            .iter()
            .map(|p| package_row(p))
            .collect();

        if rows.is_empty() {
            let block = Block::default().borders(Borders::ALL).title("Packages (0)");
            let inner = block.inner(area);
            frame.render_widget(block, area);
            render_status_line(
                frame,
                inner,
                "No packages match the current filters (x to clear)",
                Style::default().fg(Color::Gray),
            );
            return;
        }

        let title = format!("Packages ({})", rows.len());
        self.list.render(
            frame,
            area,
            SelectListProps::<Action> {
                items: &rows,
                title: &title,
                selected: state.packages_selected,
                is_focused: state.packages_focus == PackagesFocus::List,
                on_select: Action::PackageSelect,
                on_activate: Action::PackageOpen,
            },
        );
    }
}

impl Component<Action> for PackagesScreen {
    type Props<'a> = &'a AppState;

    fn handle_event(
        &mut self,
        event: &EventKind,
        state: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        match state.packages_focus {
            PackagesFocus::Filters => self.handle_filter_key(event, state),
            PackagesFocus::List => self.handle_list_key(event, state),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: Self::Props<'_>) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(0)])
            .split(area);

        self.render_filter_panel(frame, columns[0], state);
        self.render_list(frame, columns[1], state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FILTER_CONTROLS;
    use wayfarer_core::testing::key;

    fn state_with_packages() -> AppState {
        let mut state = AppState::new();
        state.packages.loaded(vec![
            Package {
                id: 1,
                title: "Goa Weekend".into(),
                description: String::new(),
                image: String::new(),
                price: 12_000,
                rating: 4.2,
                location: "Goa, India".into(),
                region: Some("Asia".into()),
                category: "Weekend".into(),
                sub_category: Some("Beach".into()),
                duration: "3 Days".into(),
                featured: true,
            },
            Package {
                id: 2,
                title: "Swiss Alps".into(),
                description: String::new(),
                image: String::new(),
                price: 95_000,
                rating: 4.8,
                location: "Interlaken".into(),
                region: Some("Europe".into()),
                category: "International".into(),
                sub_category: None,
                duration: "7 Days".into(),
                featured: false,
            },
        ]);
        state
    }

    #[test]
    fn enter_on_list_opens_the_selected_package() {
        let mut screen = PackagesScreen::default();
        let mut state = state_with_packages();
        state.packages_selected = 1;

        let actions: Vec<Action> = screen
            .handle_event(&EventKind::Key(key("enter")), &state)
            .into_iter()
            .collect();
        assert_eq!(actions, vec![Action::PackageOpen(1)]);
    }

    #[test]
    fn tab_toggles_pane_focus() {
        let mut screen = PackagesScreen::default();
        let state = state_with_packages();

        let actions: Vec<Action> = screen
            .handle_event(&EventKind::Key(key("tab")), &state)
            .into_iter()
            .collect();
        assert_eq!(actions, vec![Action::PackagesFocusToggle]);
    }

    #[test]
    fn typing_in_search_emits_query_changes() {
        let mut screen = PackagesScreen::default();
        let mut state = state_with_packages();
        state.packages_focus = PackagesFocus::Filters;
        state.filter_cursor = ROW_SEARCH;

        let actions: Vec<Action> = screen
            .handle_event(&EventKind::Key(key("g")), &state)
            .into_iter()
            .collect();
        assert_eq!(actions, vec![Action::FilterQueryChange("g".into())]);
    }

    #[test]
    fn price_row_arrows_step_the_ceiling() {
        let mut screen = PackagesScreen::default();
        let mut state = state_with_packages();
        state.packages_focus = PackagesFocus::Filters;
        state.filter_cursor = ROW_PRICE;

        let left: Vec<Action> = screen
            .handle_event(&EventKind::Key(key("left")), &state)
            .into_iter()
            .collect();
        assert_eq!(left, vec![Action::FilterPriceLower]);

        let right: Vec<Action> = screen
            .handle_event(&EventKind::Key(key("right")), &state)
            .into_iter()
            .collect();
        assert_eq!(right, vec![Action::FilterPriceRaise]);
    }

    #[test]
    fn enter_on_a_category_row_toggles_it() {
        let mut screen = PackagesScreen::default();
        let mut state = state_with_packages();
        state.packages_focus = PackagesFocus::Filters;
        state.filter_cursor = ROW_CATEGORY_FIRST;

        let actions: Vec<Action> = screen
            .handle_event(&EventKind::Key(key("enter")), &state)
            .into_iter()
            .collect();
        assert_eq!(actions, vec![Action::FilterToggleCategory("Weekend".into())]);
    }

    #[test]
    fn filter_cursor_rows_cover_all_controls() {
        // search + price + 3 categories + region
        assert_eq!(ROW_REGION + 1, FILTER_CONTROLS);
    }

    #[test]
    fn featured_packages_are_badged() {
        let state = state_with_packages();
        let row = package_row(&state.packages.items[0]);
        assert!(row.contains("FEATURED"));
        let row = package_row(&state.packages.items[1]);
        assert!(!row.contains("FEATURED"));
    }
}
