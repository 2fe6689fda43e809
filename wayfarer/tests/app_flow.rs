//! End-to-end state flows driven through the store: catalog filtering,
//! the booking wizard, and the enquiry forms, with async results played
//! back as the actions the runtime would enqueue.

use wayfarer::action::{Action, ContactField, EnquiryField, WizardField};
use wayfarer::effect::Effect;
use wayfarer::model::{Enquiry, GalleryItem, Package};
use wayfarer::reducer::reducer;
use wayfarer::state::{AppState, NoticeLevel, Screen};
use wayfarer::wizard::Wizard;
use wayfarer_core::Store;

fn package(id: i64, title: &str, price: u64, category: &str, region: &str) -> Package {
    Package {
        id,
        title: title.into(),
        description: String::new(),
        image: String::new(),
        price,
        rating: 4.5,
        location: format!("{} City", title),
        region: Some(region.into()),
        category: category.into(),
        sub_category: None,
        duration: "5 Days / 4 Nights".into(),
        featured: false,
    }
}

fn catalog() -> Vec<Package> {
    vec![
        package(1, "Goa Weekend", 12_000, "Weekend", "Asia"),
        package(2, "Swiss Alps", 95_000, "International", "Europe"),
        package(3, "Kerala Backwaters", 30_000, "Domestic", "Asia"),
    ]
}

fn store_with_catalog() -> Store<AppState, Action, Effect> {
    let mut store = Store::new(AppState::new(), reducer);
    store.dispatch(Action::PackagesDidLoad(catalog()));
    store
}

#[test]
fn filters_narrow_the_catalog_and_clear_restores_it() {
    let mut store = store_with_catalog();
    assert_eq!(store.state().visible_packages().len(), 3);

    store.dispatch(Action::FilterToggleCategory("weekend".into()));
    let visible: Vec<i64> = store.state().visible_packages().iter().map(|p| p.id).collect();
    assert_eq!(visible, vec![1]);

    // A second category widens the selection
    store.dispatch(Action::FilterToggleCategory("Domestic".into()));
    let visible: Vec<i64> = store.state().visible_packages().iter().map(|p| p.id).collect();
    assert_eq!(visible, vec![1, 3]);

    // Price ceiling is inclusive
    store.state_mut().filter.price_ceiling = Some(30_000);
    let visible: Vec<i64> = store.state().visible_packages().iter().map(|p| p.id).collect();
    assert_eq!(visible, vec![1, 3]);

    store.state_mut().filter.price_ceiling = Some(29_999);
    let visible: Vec<i64> = store.state().visible_packages().iter().map(|p| p.id).collect();
    assert_eq!(visible, vec![1]);

    store.dispatch(Action::FilterClear);
    assert_eq!(store.state().visible_packages().len(), 3);
}

#[test]
fn search_matches_title_or_location_case_insensitively() {
    let mut store = store_with_catalog();

    store.dispatch(Action::FilterQueryChange("ALPS".into()));
    let visible: Vec<i64> = store.state().visible_packages().iter().map(|p| p.id).collect();
    assert_eq!(visible, vec![2]);

    store.dispatch(Action::FilterQueryChange("backwaters city".into()));
    let visible: Vec<i64> = store.state().visible_packages().iter().map(|p| p.id).collect();
    assert_eq!(visible, vec![3]);
}

#[test]
fn booking_wizard_end_to_end() {
    let mut store = store_with_catalog();

    store.dispatch(Action::WizardStart(2));
    assert_eq!(store.state().screen, Screen::Booking(2));

    for (field, value) in [
        (WizardField::FirstName, "Priya"),
        (WizardField::LastName, "Sharma"),
        (WizardField::Email, "priya@example.com"),
        (WizardField::Phone, "9876543210"),
        (WizardField::Date, "2026-10-02"),
        (WizardField::Travelers, "3"),
    ] {
        store.dispatch(Action::WizardFieldChange(field, value.into()));
    }
    store.dispatch(Action::WizardSubmitTraveler);
    assert!(matches!(store.state().wizard, Some(Wizard::Payment { .. })));

    let result = store.dispatch(Action::WizardSubmitPayment);
    let Some(Effect::CreateBooking(booking)) = result.effects.into_iter().next() else {
        panic!("expected a CreateBooking effect");
    };

    // Total is price times travelers
    assert_eq!(booking.total_amount, Some(95_000 * 3));
    assert_eq!(booking.package_title.as_deref(), Some("Swiss Alps"));
    assert_eq!(booking.status.as_deref(), Some("Confirmed"));
    assert!(booking.booking_date.is_some());

    // Server echoes the booking back
    store.dispatch(Action::BookingDidCreate(booking.clone()));
    assert_eq!(store.state().screen, Screen::BookingConfirmed);
    assert_eq!(store.state().bookings.current.as_ref(), Some(&booking));
    assert_eq!(store.state().bookings.slice.items, vec![booking]);
    assert!(store.state().bookings.success);
}

#[test]
fn wizard_blocks_on_missing_fields_and_keeps_input_across_back() {
    let mut store = store_with_catalog();
    store.dispatch(Action::WizardStart(1));

    store.dispatch(Action::WizardFieldChange(WizardField::FirstName, "Priya".into()));
    store.dispatch(Action::WizardSubmitTraveler);

    // Still on step 1, with the untouched fields flagged
    assert!(matches!(store.state().wizard, Some(Wizard::TravelerInfo(_))));
    assert!(!store.state().wizard_ui.missing.contains(&"first_name"));
    assert!(store.state().wizard_ui.missing.contains(&"last_name"));

    for (field, value) in [
        (WizardField::LastName, "Sharma"),
        (WizardField::Email, "priya@example.com"),
        (WizardField::Phone, "9876543210"),
        (WizardField::Date, "2026-10-02"),
        (WizardField::Travelers, "2"),
    ] {
        store.dispatch(Action::WizardFieldChange(field, value.into()));
    }
    store.dispatch(Action::WizardSubmitTraveler);
    store.dispatch(Action::WizardBack);

    let Some(Wizard::TravelerInfo(form)) = &store.state().wizard else {
        panic!("expected step 1 after back");
    };
    assert_eq!(form.first_name, "Priya");
    assert_eq!(form.travelers, "2");
}

#[test]
fn failed_booking_creation_keeps_the_wizard_on_payment() {
    let mut store = store_with_catalog();
    store.dispatch(Action::WizardStart(1));
    for (field, value) in [
        (WizardField::FirstName, "Priya"),
        (WizardField::LastName, "Sharma"),
        (WizardField::Email, "priya@example.com"),
        (WizardField::Phone, "9876543210"),
        (WizardField::Date, "2026-10-02"),
        (WizardField::Travelers, "2"),
    ] {
        store.dispatch(Action::WizardFieldChange(field, value.into()));
    }
    store.dispatch(Action::WizardSubmitTraveler);
    store.dispatch(Action::WizardSubmitPayment);

    store.dispatch(Action::BookingDidError("Failed to create booking".into()));

    assert_eq!(store.state().screen, Screen::Booking(1));
    assert!(matches!(store.state().wizard, Some(Wizard::Payment { .. })));
    assert!(store.state().bookings.slice.items.is_empty());
    let notice = store.state().notice.as_ref().expect("error notice");
    assert_eq!(notice.level, NoticeLevel::Error);
}

#[test]
fn package_enquiry_validates_then_submits_with_prefilled_destination() {
    let mut store = store_with_catalog();
    store.dispatch(Action::NavGoto(Screen::PackageDetail(3)));
    store.dispatch(Action::EnquiryToggle);
    assert_eq!(store.state().enquiry_form.destination, "Kerala Backwaters City");
    assert_eq!(store.state().enquiry_form.guests, "1");

    // Bad email and phone are rejected with per-field messages
    store.dispatch(Action::EnquiryFieldChange(EnquiryField::Name, "Priya".into()));
    store.dispatch(Action::EnquiryFieldChange(EnquiryField::Email, "not-an-email".into()));
    store.dispatch(Action::EnquiryFieldChange(EnquiryField::Phone, "12345".into()));
    store.dispatch(Action::EnquiryFieldChange(EnquiryField::Date, "2026-12-20".into()));
    let result = store.dispatch(Action::EnquirySubmit);
    assert!(result.effects.is_empty());
    assert_eq!(
        store.state().enquiry_form.error_for("email"),
        Some("Email is invalid")
    );
    assert_eq!(
        store.state().enquiry_form.error_for("phone"),
        Some("Phone must be 10 digits")
    );

    store.dispatch(Action::EnquiryFieldChange(
        EnquiryField::Email,
        "priya@example.com".into(),
    ));
    store.dispatch(Action::EnquiryFieldChange(
        EnquiryField::Phone,
        "(987) 654-3210".into(),
    ));
    let result = store.dispatch(Action::EnquirySubmit);
    let Some(Effect::SubmitEnquiry(enquiry)) = result.effects.into_iter().next() else {
        panic!("expected a SubmitEnquiry effect");
    };
    assert_eq!(enquiry.kind, "Package Enquiry");
    assert_eq!(enquiry.destination, "Kerala Backwaters City");
    assert!(store.state().enquiry_status.loading);

    // Success clears the form and, after the timer, the flag
    store.dispatch(Action::EnquiryDidSubmit(enquiry));
    assert!(store.state().enquiry_status.success);
    assert!(store.state().enquiry_form.name.is_empty());
    store.dispatch(Action::NoticeExpired);
    assert!(!store.state().enquiry_status.success);
    assert!(store.state().notice.is_none());
}

#[test]
fn contact_form_posts_a_general_enquiry() {
    let mut store = store_with_catalog();
    store.dispatch(Action::NavGoto(Screen::Contact));

    let result = store.dispatch(Action::ContactSubmit);
    assert!(result.effects.is_empty());
    assert_eq!(
        store.state().contact_form.error_for("first_name"),
        Some("First name is required")
    );

    for (field, value) in [
        (ContactField::FirstName, "Priya"),
        (ContactField::LastName, "Sharma"),
        (ContactField::Email, "priya@example.com"),
        (ContactField::Message, "Planning a honeymoon in May"),
    ] {
        store.dispatch(Action::ContactFieldChange(field, value.into()));
    }
    let result = store.dispatch(Action::ContactSubmit);
    let Some(Effect::SubmitEnquiry(enquiry)) = result.effects.into_iter().next() else {
        panic!("expected a SubmitEnquiry effect");
    };
    assert_eq!(enquiry.kind, "General Enquiry");
    assert_eq!(enquiry.name, "Priya Sharma");
    assert!(enquiry.destination.is_empty());
}

#[test]
fn navigation_fetches_each_screens_missing_data_once() {
    let mut store = Store::new(AppState::new(), reducer);

    let result = store.dispatch(Action::NavGoto(Screen::Gallery));
    assert_eq!(result.effects, vec![Effect::FetchGallery]);

    // A failed fetch leaves the slice refetchable on the next visit
    store.dispatch(Action::GalleryDidError("Failed to fetch gallery".into()));
    let result = store.dispatch(Action::NavGoto(Screen::Gallery));
    assert_eq!(result.effects, vec![Effect::FetchGallery]);

    store.dispatch(Action::GalleryDidLoad(vec![GalleryItem {
        id: 1,
        title: "Dunes".into(),
        image: String::new(),
        year: 2025,
        category: "Desert".into(),
        location: "Jaisalmer".into(),
    }]));
    let result = store.dispatch(Action::NavGoto(Screen::Gallery));
    assert!(result.effects.is_empty());
}

#[test]
fn enquiry_error_reports_the_server_message() {
    let mut store = store_with_catalog();
    store.state_mut().enquiry_status.loading = true;

    store.dispatch(Action::EnquiryDidError("Failed to submit enquiry".into()));

    let state = store.state();
    assert!(!state.enquiry_status.loading);
    assert_eq!(
        state.enquiry_status.error.as_deref(),
        Some("Failed to submit enquiry")
    );
    let notice = state.notice.as_ref().expect("error notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Failed to submit enquiry");
}

#[test]
fn enquiry_payload_round_trips_the_type_discriminator() {
    let enquiry = Enquiry {
        kind: "Package Enquiry".into(),
        name: "Priya".into(),
        email: "priya@example.com".into(),
        phone: "9876543210".into(),
        destination: "Goa".into(),
        date: "2026-10-02".into(),
        guests: "2".into(),
        message: String::new(),
        submitted_at: "2026-08-30T12:00:00+00:00".into(),
    };
    let json = serde_json::to_value(&enquiry).expect("serialize");
    assert_eq!(json["type"], "Package Enquiry");
    let back: Enquiry = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, enquiry);
}
