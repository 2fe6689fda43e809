//! Full-frame render checks over a test backend.

use wayfarer::components::AppUi;
use wayfarer::model::{Booking, Package};
use wayfarer::state::{AppState, Screen};
use wayfarer::wizard::Wizard;
use wayfarer_core::RenderHarness;

fn sample_state() -> AppState {
    let mut state = AppState::new();
    state.packages.loaded(vec![
        Package {
            id: 1,
            title: "Goa Weekend".into(),
            description: "Three lazy days on the sand".into(),
            image: String::new(),
            price: 12_000,
            rating: 4.2,
            location: "Goa, India".into(),
            region: Some("Asia".into()),
            category: "Weekend".into(),
            sub_category: Some("Beach".into()),
            duration: "3 Days / 2 Nights".into(),
            featured: true,
        },
        Package {
            id: 2,
            title: "Swiss Alps".into(),
            description: "A week above the clouds".into(),
            image: String::new(),
            price: 95_000,
            rating: 4.8,
            location: "Interlaken".into(),
            region: Some("Europe".into()),
            category: "International".into(),
            sub_category: None,
            duration: "7 Days / 6 Nights".into(),
            featured: false,
        },
    ]);
    state
}

fn render(state: &AppState) -> String {
    let mut ui = AppUi::new();
    let mut harness = RenderHarness::new(100, 32);
    harness.render_to_string_plain(|frame| ui.render(frame, frame.area(), state))
}

#[test]
fn packages_screen_lists_the_catalog() {
    let output = render(&sample_state());

    assert!(output.contains("WanderLux"));
    assert!(output.contains("Packages (2)"));
    assert!(output.contains("Goa Weekend"));
    assert!(output.contains("FEATURED"));
    assert!(output.contains("Swiss Alps"));
    assert!(output.contains("Filters"));
}

#[test]
fn package_detail_shows_itinerary_and_key_hints() {
    let mut state = sample_state();
    state.screen = Screen::PackageDetail(2);

    let output = render(&state);
    assert!(output.contains("Swiss Alps"));
    assert!(output.contains("Day 1: Arrival"));
    // Outline is capped at five days regardless of trip length
    assert!(output.contains("Day 5: Check-out"));
    assert!(output.contains("b book"));
}

#[test]
fn missing_package_renders_a_fallback() {
    let mut state = sample_state();
    state.screen = Screen::PackageDetail(404);

    let output = render(&state);
    assert!(output.contains("Package not found"));
}

#[test]
fn booking_wizard_shows_progress_and_running_total() {
    let mut state = sample_state();
    state.screen = Screen::Booking(2);
    state.wizard = Some(Wizard::new());
    if let Some(Wizard::TravelerInfo(form)) = &mut state.wizard {
        form.travelers = "3".into();
    }

    let output = render(&state);
    assert!(output.contains("Step 1 of 3"));
    assert!(output.contains("First name"));
    assert!(output.contains("Summary"));
    // 95,000 x 3
    assert!(output.contains("285,000"));
}

#[test]
fn confirmation_screen_shows_the_booking() {
    let mut state = sample_state();
    let booking: Booking = serde_json::from_value(serde_json::json!({
        "id": 1756000000000_i64,
        "packageId": 2,
        "packageTitle": "Swiss Alps",
        "firstName": "Priya",
        "lastName": "Sharma",
        "date": "2026-10-02",
        "travelers": 3,
        "totalAmount": 285000,
        "status": "Confirmed"
    }))
    .expect("booking json");
    state.bookings.slice.loaded(vec![booking.clone()]);
    state.bookings.current = Some(booking);
    state.screen = Screen::BookingConfirmed;

    let output = render(&state);
    assert!(output.contains("Booking Confirmed!"));
    assert!(output.contains("#1756000000000"));
    assert!(output.contains("Priya Sharma"));
    assert!(output.contains("₹285,000"));
}

#[test]
fn confirmation_without_a_booking_shows_the_fallback() {
    let mut state = sample_state();
    state.screen = Screen::BookingConfirmed;

    let output = render(&state);
    assert!(output.contains("No booking found"));
    assert!(!output.contains("Booking Confirmed!"));
}

#[test]
fn profile_lists_bookings_with_placeholders() {
    let mut state = sample_state();
    let booking: Booking =
        serde_json::from_str(r#"{"id": 9, "packageId": 1}"#).expect("booking json");
    state.bookings.slice.loaded(vec![booking]);
    state.screen = Screen::Profile;

    let output = render(&state);
    assert!(output.contains("Priya Sharma"));
    assert!(output.contains("Member since January 2024"));
    assert!(output.contains("N/A"));
    assert!(output.contains("Pending"));
}

#[test]
fn empty_filter_result_prompts_to_clear() {
    let mut state = sample_state();
    state.filter.query = "mars".into();

    let output = render(&state);
    assert!(output.contains("No packages match"));
}
