//! Screen components
//!
//! One component per screen, each implementing `Component<Action>` with
//! `&AppState` as props. [`AppUi`] owns them all and routes events and
//! rendering to whichever screen is active, after handling the global
//! keys (tab-bar navigation, Esc, quit).

mod about;
mod blog_detail;
mod blogs;
mod booking;
mod booking_confirmed;
mod contact;
mod gallery;
mod help;
mod package_detail;
mod packages;
mod profile;

pub use about::AboutScreen;
pub use blog_detail::BlogDetailScreen;
pub use blogs::BlogsScreen;
pub use booking::BookingScreen;
pub use booking_confirmed::BookingConfirmedScreen;
pub use contact::ContactScreen;
pub use gallery::GalleryScreen;
pub use package_detail::PackageDetailScreen;
pub use packages::PackagesScreen;
pub use profile::ProfileScreen;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use wayfarer_core::{Component, EventKind, EventOutcome};
use wayfarer_components::{render_notice, NoticeKind};

use crate::action::Action;
use crate::state::{AppState, NoticeLevel, PackagesFocus, Screen};
use crate::ticket::AGENCY_NAME;

/// Braille spinner shown while a request is in flight.
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(tick: u32) -> &'static str {
    SPINNER[(tick as usize) % SPINNER.len()]
}

/// "₹1,35,000"-style price, grouped in threes: 135000 -> "₹135,000".
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("₹{}", grouped)
}

/// Centered placeholder line for loading / error / empty list bodies.
pub fn render_status_line(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    frame.render_widget(
        Paragraph::new(Line::styled(text, style)).centered(),
        rows[1],
    );
}

const TABS: [(char, &str, Screen); 6] = [
    ('1', "Packages", Screen::Packages),
    ('2', "Gallery", Screen::Gallery),
    ('3', "Blogs", Screen::Blogs),
    ('4', "Contact", Screen::Contact),
    ('5', "About", Screen::About),
    ('6', "Profile", Screen::Profile),
];

/// Owns every screen component and routes events to the active one.
///
/// Event order: the active screen gets the event first; keys it does not
/// consume fall through to the global bindings. Text inputs consume the
/// printable keys they see, so typing never triggers navigation.
pub struct AppUi {
    packages: PackagesScreen,
    detail: PackageDetailScreen,
    booking: BookingScreen,
    confirmed: BookingConfirmedScreen,
    profile: ProfileScreen,
    gallery: GalleryScreen,
    blogs: BlogsScreen,
    blog_detail: BlogDetailScreen,
    contact: ContactScreen,
    about: AboutScreen,
}

impl AppUi {
    pub fn new() -> Self {
        Self {
            packages: PackagesScreen::default(),
            detail: PackageDetailScreen::default(),
            booking: BookingScreen::default(),
            confirmed: BookingConfirmedScreen,
            profile: ProfileScreen::default(),
            gallery: GalleryScreen::default(),
            blogs: BlogsScreen::default(),
            blog_detail: BlogDetailScreen,
            contact: ContactScreen::default(),
            about: AboutScreen,
        }
    }

    pub fn handle_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
        match event {
            EventKind::Tick => EventOutcome::action(Action::Tick),
            EventKind::Resize(_, _) => EventOutcome::needs_render(),
            EventKind::Key(key) => {
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    return EventOutcome::action(Action::Quit);
                }

                let consumed = self.route_to_screen(event, state);
                if !consumed.is_empty() {
                    return EventOutcome::from(consumed);
                }

                EventOutcome::from(global_key(key.code, state))
            }
            EventKind::Scroll { .. } => EventOutcome::from(self.route_to_screen(event, state)),
            _ => EventOutcome::ignored(),
        }
    }

    fn route_to_screen(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        match state.screen {
            Screen::Packages => self.packages.handle_event(event, state).into_iter().collect(),
            Screen::PackageDetail(_) => {
                self.detail.handle_event(event, state).into_iter().collect()
            }
            Screen::Booking(_) => self.booking.handle_event(event, state).into_iter().collect(),
            Screen::BookingConfirmed => {
                self.confirmed.handle_event(event, state).into_iter().collect()
            }
            Screen::Profile => self.profile.handle_event(event, state).into_iter().collect(),
            Screen::Gallery => self.gallery.handle_event(event, state).into_iter().collect(),
            Screen::Blogs => self.blogs.handle_event(event, state).into_iter().collect(),
            Screen::BlogDetail(_) => {
                self.blog_detail.handle_event(event, state).into_iter().collect()
            }
            Screen::Contact => self.contact.handle_event(event, state).into_iter().collect(),
            Screen::About => self.about.handle_event(event, state).into_iter().collect(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        render_header(frame, rows[0], state);

        match state.screen {
            Screen::Packages => self.packages.render(frame, rows[1], state),
            Screen::PackageDetail(_) => self.detail.render(frame, rows[1], state),
            Screen::Booking(_) => self.booking.render(frame, rows[1], state),
            Screen::BookingConfirmed => self.confirmed.render(frame, rows[1], state),
            Screen::Profile => self.profile.render(frame, rows[1], state),
            Screen::Gallery => self.gallery.render(frame, rows[1], state),
            Screen::Blogs => self.blogs.render(frame, rows[1], state),
            Screen::BlogDetail(_) => self.blog_detail.render(frame, rows[1], state),
            Screen::Contact => self.contact.render(frame, rows[1], state),
            Screen::About => self.about.render(frame, rows[1], state),
        }

        help::render_help_bar(frame, rows[2], state);

        if let Some(notice) = &state.notice {
            let kind = match notice.level {
                NoticeLevel::Success => NoticeKind::Success,
                NoticeLevel::Error => NoticeKind::Error,
            };
            render_notice(frame, area, kind, &notice.message);
        }
    }
}

impl Default for AppUi {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys active everywhere a text input has not consumed them.
fn global_key(code: KeyCode, state: &AppState) -> Vec<Action> {
    if let KeyCode::Char(c) = code {
        for (key, _, screen) in TABS {
            if c == key && state.screen != screen {
                return vec![Action::NavGoto(screen)];
            }
        }
        if c == 'q' {
            return vec![Action::Quit];
        }
    }

    if code == KeyCode::Esc {
        // Esc is contextual: close the enquiry panel, step the wizard
        // back, otherwise leave the screen.
        if state.enquiry_open {
            return vec![Action::EnquiryToggle];
        }
        if matches!(state.screen, Screen::Booking(_))
            && matches!(state.wizard, Some(crate::wizard::Wizard::Payment { .. }))
        {
            return vec![Action::WizardBack];
        }
        if state.screen != Screen::Packages {
            return vec![Action::NavBack];
        }
    }

    Vec::new()
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", AGENCY_NAME),
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(255, 87, 34))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    for (key, label, screen) in TABS {
        let active = screen_matches_tab(state.screen, screen);
        let style = if active {
            Style::default()
                .fg(Color::Rgb(255, 87, 34))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("{} {}", key, label), style));
        spans.push(Span::raw("   "));
    }

    if state.any_loading() {
        spans.push(Span::styled(
            spinner(state.tick_count),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Detail screens highlight the tab of the list they belong to.
fn screen_matches_tab(current: Screen, tab: Screen) -> bool {
    match (current, tab) {
        (Screen::Packages, Screen::Packages)
        | (Screen::PackageDetail(_), Screen::Packages)
        | (Screen::Booking(_), Screen::Packages)
        | (Screen::BookingConfirmed, Screen::Packages)
        | (Screen::Gallery, Screen::Gallery)
        | (Screen::Blogs, Screen::Blogs)
        | (Screen::BlogDetail(_), Screen::Blogs)
        | (Screen::Contact, Screen::Contact)
        | (Screen::About, Screen::About)
        | (Screen::Profile, Screen::Profile) => true,
        _ => false,
    }
}

/// True while the focused widget on the current screen is a text input.
/// Used by the help bar to swap key hints, not to gate event routing.
fn text_entry_active(state: &AppState) -> bool {
    match state.screen {
        Screen::Booking(_) => !matches!(state.wizard, Some(crate::wizard::Wizard::Confirmed(_))),
        Screen::Contact => true,
        Screen::PackageDetail(_) => state.enquiry_open,
        Screen::Packages => {
            state.packages_focus == PackagesFocus::Filters && state.filter_cursor == 0
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inr_formatting_groups_thousands() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(45_000), "₹45,000");
        assert_eq!(format_inr(1_350_000), "₹1,350,000");
    }

    #[test]
    fn global_keys_navigate_between_tabs() {
        let state = AppState::new();
        assert_eq!(
            global_key(KeyCode::Char('2'), &state),
            vec![Action::NavGoto(Screen::Gallery)]
        );
        // Already on packages
        assert!(global_key(KeyCode::Char('1'), &state).is_empty());
        assert_eq!(global_key(KeyCode::Char('q'), &state), vec![Action::Quit]);
    }

    #[test]
    fn esc_closes_enquiry_before_leaving_the_screen() {
        let mut state = AppState::new();
        state.screen = Screen::PackageDetail(1);
        state.enquiry_open = true;

        assert_eq!(global_key(KeyCode::Esc, &state), vec![Action::EnquiryToggle]);

        state.enquiry_open = false;
        assert_eq!(global_key(KeyCode::Esc, &state), vec![Action::NavBack]);
    }

    #[test]
    fn esc_on_payment_steps_the_wizard_back() {
        let mut state = AppState::new();
        state.screen = Screen::Booking(1);
        state.wizard = Some(crate::wizard::Wizard::Payment {
            traveler: crate::wizard::TravelerDetails {
                first_name: "A".into(),
                last_name: "B".into(),
                email: "a@b.c".into(),
                phone: "1234567890".into(),
                date: "2026-10-02".into(),
                travelers: 2,
            },
            payment: Default::default(),
        });

        assert_eq!(global_key(KeyCode::Esc, &state), vec![Action::WizardBack]);
    }
}
