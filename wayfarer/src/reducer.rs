//! Reducer - pure function: (state, action) -> Dispatched<Effect>
//!
//! All state mutation happens here; side effects are returned as
//! declarative `Effect` values for the runtime to execute. Navigation is
//! the single place fetches are decided: entering a screen emits a fetch
//! effect for each empty slice that screen reads.

use chrono::Utc;
use wayfarer_core::Dispatched;

use crate::action::{Action, ContactField, EnquiryField, WizardField};
use crate::effect::Effect;
use crate::filters::{gallery_years, MAX_PRICE, MIN_PRICE, PRICE_STEP};
use crate::model::{Enquiry, ENQUIRY_KIND_GENERAL, ENQUIRY_KIND_PACKAGE};
use crate::state::{
    AppState, ContactForm, EnquiryForm, Notice, PackagesFocus, Screen, WizardUi, FILTER_CONTROLS,
};
use crate::validate;
use crate::wizard::Wizard;

pub fn reducer(state: &mut AppState, action: Action) -> Dispatched<Effect> {
    match action {
        // ===== Navigation =====
        Action::NavGoto(screen) => navigate(state, screen),
        Action::NavBack => {
            let target = state.screen.back_target();
            navigate(state, target)
        }

        // ===== Remote collections =====
        Action::PackagesFetch => {
            state.packages.begin();
            Dispatched::changed_with(Effect::FetchPackages)
        }
        Action::PackagesDidLoad(items) => {
            state.packages.loaded(items);
            clamp_selections(state);
            Dispatched::changed()
        }
        Action::PackagesDidError(message) => {
            state.packages.failed(message);
            Dispatched::changed()
        }

        Action::CategoriesFetch => {
            state.categories.begin();
            Dispatched::changed_with(Effect::FetchCategories)
        }
        Action::CategoriesDidLoad(items) => {
            state.categories.loaded(items);
            Dispatched::changed()
        }
        Action::CategoriesDidError(message) => {
            state.categories.failed(message);
            Dispatched::changed()
        }

        Action::BlogsFetch => {
            state.blogs.begin();
            Dispatched::changed_with(Effect::FetchBlogs)
        }
        Action::BlogsDidLoad(items) => {
            state.blogs.loaded(items);
            clamp_selections(state);
            Dispatched::changed()
        }
        Action::BlogsDidError(message) => {
            state.blogs.failed(message);
            Dispatched::changed()
        }

        Action::GalleryFetch => {
            state.gallery.begin();
            Dispatched::changed_with(Effect::FetchGallery)
        }
        Action::GalleryDidLoad(items) => {
            state.gallery.loaded(items);
            clamp_selections(state);
            Dispatched::changed()
        }
        Action::GalleryDidError(message) => {
            state.gallery.failed(message);
            Dispatched::changed()
        }

        Action::BookingsFetch => {
            state.bookings.slice.begin();
            Dispatched::changed_with(Effect::FetchBookings)
        }
        Action::BookingsDidLoad(items) => {
            state.bookings.slice.loaded(items);
            clamp_selections(state);
            Dispatched::changed()
        }
        Action::BookingsDidError(message) => {
            state.bookings.slice.failed(message);
            Dispatched::changed()
        }

        // ===== Packages screen =====
        Action::PackageSelect(index) => {
            state.packages_selected = index;
            Dispatched::changed()
        }
        Action::PackageOpen(index) => {
            match state.visible_packages().get(index).map(|p| p.id) {
                Some(id) => navigate(state, Screen::PackageDetail(id)),
                None => Dispatched::unchanged(),
            }
        }
        Action::PackagesFocusToggle => {
            state.packages_focus = match state.packages_focus {
                PackagesFocus::List => PackagesFocus::Filters,
                PackagesFocus::Filters => PackagesFocus::List,
            };
            Dispatched::changed()
        }
        Action::FilterCursorMove(delta) => {
            let len = FILTER_CONTROLS as i8;
            let cursor = state.filter_cursor as i8 + delta;
            state.filter_cursor = cursor.rem_euclid(len) as usize;
            Dispatched::changed()
        }
        Action::FilterQueryChange(query) => {
            state.filter.query = query;
            state.packages_selected = 0;
            Dispatched::changed()
        }
        Action::FilterToggleCategory(category) => {
            state.filter.toggle_category(&category);
            state.packages_selected = 0;
            Dispatched::changed()
        }
        Action::FilterCycleRegion => {
            let regions = distinct(state.packages.items.iter().filter_map(|p| p.region.as_deref()));
            state.filter.region = cycle(&regions, state.filter.region.as_deref());
            state.packages_selected = 0;
            Dispatched::changed()
        }
        Action::FilterCycleSubCategory => {
            let subs = distinct(
                state
                    .packages
                    .items
                    .iter()
                    .filter_map(|p| p.sub_category.as_deref()),
            );
            state.filter.sub_category = cycle(&subs, state.filter.sub_category.as_deref());
            state.packages_selected = 0;
            Dispatched::changed()
        }
        Action::FilterPriceLower => {
            let current = state.effective_price_ceiling();
            state.filter.price_ceiling =
                Some(current.saturating_sub(PRICE_STEP).max(MIN_PRICE));
            state.packages_selected = 0;
            Dispatched::changed()
        }
        Action::FilterPriceRaise => {
            let next = (state.effective_price_ceiling() + PRICE_STEP).min(MAX_PRICE);
            state.filter.price_ceiling = if next >= MAX_PRICE { None } else { Some(next) };
            state.packages_selected = 0;
            Dispatched::changed()
        }
        Action::FilterClear => {
            state.filter.clear();
            state.packages_selected = 0;
            Dispatched::changed()
        }

        // ===== Gallery / blogs / profile =====
        Action::GallerySelect(index) => {
            state.gallery_selected = index;
            Dispatched::changed()
        }
        Action::GalleryYearCycle => {
            let years = gallery_years(&state.gallery.items);
            state.gallery_filter.year = cycle_years(&years, state.gallery_filter.year);
            state.gallery_selected = 0;
            Dispatched::changed()
        }
        Action::BlogSelect(index) => {
            state.blogs_selected = index;
            Dispatched::changed()
        }
        Action::BlogOpen(index) => match state.blogs.items.get(index).map(|b| b.id) {
            Some(id) => navigate(state, Screen::BlogDetail(id)),
            None => Dispatched::unchanged(),
        },
        Action::ProfileSelect(index) => {
            state.profile_selected = index;
            Dispatched::changed()
        }

        // ===== Booking wizard =====
        Action::WizardStart(package_id) => {
            state.wizard = Some(Wizard::new());
            state.wizard_ui = WizardUi::default();
            state.bookings.success = false;
            navigate(state, Screen::Booking(package_id))
        }
        Action::WizardFieldChange(field, value) => reduce_wizard_field(state, field, value),
        Action::WizardFocusNext => move_wizard_focus(state, 1),
        Action::WizardFocusPrev => move_wizard_focus(state, -1),
        Action::WizardSubmitTraveler => {
            let Some(wizard) = state.wizard.take() else {
                return Dispatched::unchanged();
            };
            match wizard.submit_traveler() {
                Ok(next) => {
                    state.wizard = Some(next);
                    state.wizard_ui = WizardUi::default();
                }
                Err((unchanged, missing)) => {
                    state.wizard = Some(unchanged);
                    state.wizard_ui.missing = missing;
                }
            }
            Dispatched::changed()
        }
        Action::WizardBack => {
            if let Some(wizard) = state.wizard.take() {
                state.wizard = Some(wizard.back());
                state.wizard_ui = WizardUi::default();
            }
            Dispatched::changed()
        }
        Action::WizardSubmitPayment => reduce_payment_submit(state),
        Action::BookingDidCreate(booking) => {
            state.bookings.slice.loading = false;
            state.bookings.slice.items.push(booking.clone());
            state.bookings.success = true;
            state.bookings.current = Some(booking.clone());
            state.wizard = Some(Wizard::Confirmed(booking));
            state.notice = Some(Notice::success("Booking confirmed successfully!"));
            navigate(state, Screen::BookingConfirmed).with(Effect::ScheduleNoticeClear)
        }
        Action::BookingDidError(message) => {
            state.bookings.slice.loading = false;
            state.notice = Some(Notice::error(message));
            Dispatched::changed_with(Effect::ScheduleNoticeClear)
        }

        // ===== Enquiry form =====
        Action::EnquiryToggle => {
            state.enquiry_open = !state.enquiry_open;
            if state.enquiry_open {
                let destination = match state.screen {
                    Screen::PackageDetail(id) => state
                        .package(id)
                        .map(|p| p.location.clone())
                        .unwrap_or_default(),
                    _ => String::new(),
                };
                state.enquiry_form = EnquiryForm::for_destination(&destination);
                state.enquiry_status = Default::default();
            }
            Dispatched::changed()
        }
        Action::EnquiryFieldChange(field, value) => {
            set_enquiry_field(state, field, value);
            Dispatched::changed()
        }
        Action::EnquiryFocusNext => {
            state.enquiry_form.focus = (state.enquiry_form.focus + 1) % EnquiryForm::FIELDS;
            Dispatched::changed()
        }
        Action::EnquiryFocusPrev => {
            state.enquiry_form.focus =
                (state.enquiry_form.focus + EnquiryForm::FIELDS - 1) % EnquiryForm::FIELDS;
            Dispatched::changed()
        }
        Action::EnquirySubmit => reduce_enquiry_submit(state),
        Action::EnquiryDidSubmit(enquiry) => {
            state.enquiry_status.loading = false;
            state.enquiry_status.success = true;
            let message = if enquiry.kind == ENQUIRY_KIND_GENERAL {
                state.contact_form = Default::default();
                "Message sent successfully!"
            } else {
                state.enquiry_form = Default::default();
                "Enquiry submitted successfully!"
            };
            state.notice = Some(Notice::success(message));
            Dispatched::changed_with(Effect::ScheduleNoticeClear)
        }
        Action::EnquiryDidError(message) => {
            state.enquiry_status.loading = false;
            state.enquiry_status.error = Some(message.clone());
            state.notice = Some(Notice::error(message));
            Dispatched::changed_with(Effect::ScheduleNoticeClear)
        }

        // ===== Contact form =====
        Action::ContactFieldChange(field, value) => {
            set_contact_field(state, field, value);
            Dispatched::changed()
        }
        Action::ContactFocusNext => {
            state.contact_form.focus = (state.contact_form.focus + 1) % ContactForm::FIELDS;
            Dispatched::changed()
        }
        Action::ContactFocusPrev => {
            state.contact_form.focus =
                (state.contact_form.focus + ContactForm::FIELDS - 1) % ContactForm::FIELDS;
            Dispatched::changed()
        }
        Action::ContactSubmit => reduce_contact_submit(state),

        // ===== Tickets =====
        Action::TicketSave(index) => {
            match state.bookings.slice.items.get(index) {
                Some(booking) => Dispatched::effect(Effect::SaveTicket(booking.clone())),
                None => Dispatched::unchanged(),
            }
        }
        Action::TicketDidSave(path) => {
            state.notice = Some(Notice::success(format!(
                "Ticket saved to {}",
                path.display()
            )));
            Dispatched::changed_with(Effect::ScheduleNoticeClear)
        }
        Action::TicketDidError(message) => {
            state.notice = Some(Notice::error(message));
            Dispatched::changed_with(Effect::ScheduleNoticeClear)
        }

        // ===== Global =====
        Action::NoticeExpired => {
            state.notice = None;
            state.enquiry_status.success = false;
            Dispatched::changed()
        }
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.any_loading() {
                Dispatched::changed()
            } else {
                Dispatched::unchanged()
            }
        }
        Action::Quit => Dispatched::unchanged(),
    }
}

/// Switch screens and fetch whatever the target reads and doesn't have.
fn navigate(state: &mut AppState, screen: Screen) -> Dispatched<Effect> {
    state.screen = screen;
    state.enquiry_open = false;

    let mut result = Dispatched::changed();

    let wants_packages = matches!(
        screen,
        Screen::Packages | Screen::PackageDetail(_) | Screen::Booking(_)
    );
    if wants_packages && state.packages.needs_fetch() {
        state.packages.begin();
        result = result.with(Effect::FetchPackages);
    }
    if matches!(screen, Screen::Packages) && state.categories.needs_fetch() {
        state.categories.begin();
        result = result.with(Effect::FetchCategories);
    }
    if matches!(screen, Screen::Blogs | Screen::BlogDetail(_)) && state.blogs.needs_fetch() {
        state.blogs.begin();
        result = result.with(Effect::FetchBlogs);
    }
    if matches!(screen, Screen::Gallery) && state.gallery.needs_fetch() {
        state.gallery.begin();
        result = result.with(Effect::FetchGallery);
    }
    if matches!(screen, Screen::Profile) && state.bookings.slice.needs_fetch() {
        state.bookings.slice.begin();
        result = result.with(Effect::FetchBookings);
    }

    // A booking screen always has a live wizard
    if matches!(screen, Screen::Booking(_)) && state.wizard.is_none() {
        state.wizard = Some(Wizard::new());
        state.wizard_ui = WizardUi::default();
    }

    result
}

/// Keep list selections in range after a collection is replaced.
fn clamp_selections(state: &mut AppState) {
    let visible = state.visible_packages().len();
    state.packages_selected = state.packages_selected.min(visible.saturating_sub(1));
    state.blogs_selected = state
        .blogs_selected
        .min(state.blogs.items.len().saturating_sub(1));
    state.gallery_selected = state
        .gallery_selected
        .min(state.visible_gallery().len().saturating_sub(1));
    state.profile_selected = state
        .profile_selected
        .min(state.bookings.slice.items.len().saturating_sub(1));
}

/// First-seen-order distinct values, case-insensitive.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|v| v.eq_ignore_ascii_case(value)) {
            out.push(value.to_string());
        }
    }
    out
}

/// Cycle None -> values[0] -> ... -> values[last] -> None.
fn cycle(values: &[String], current: Option<&str>) -> Option<String> {
    match current {
        None => values.first().cloned(),
        Some(current) => {
            let pos = values.iter().position(|v| v.eq_ignore_ascii_case(current));
            match pos {
                Some(i) if i + 1 < values.len() => Some(values[i + 1].clone()),
                _ => None,
            }
        }
    }
}

fn cycle_years(years: &[i32], current: Option<i32>) -> Option<i32> {
    match current {
        None => years.first().copied(),
        Some(current) => {
            let pos = years.iter().position(|y| *y == current);
            match pos {
                Some(i) if i + 1 < years.len() => Some(years[i + 1]),
                _ => None,
            }
        }
    }
}

fn reduce_wizard_field(
    state: &mut AppState,
    field: WizardField,
    value: String,
) -> Dispatched<Effect> {
    let Some(wizard) = state.wizard.as_mut() else {
        return Dispatched::unchanged();
    };

    match (wizard, field) {
        (Wizard::TravelerInfo(form), WizardField::FirstName) => form.first_name = value,
        (Wizard::TravelerInfo(form), WizardField::LastName) => form.last_name = value,
        (Wizard::TravelerInfo(form), WizardField::Email) => form.email = value,
        (Wizard::TravelerInfo(form), WizardField::Phone) => form.phone = value,
        (Wizard::TravelerInfo(form), WizardField::Date) => form.date = value,
        (Wizard::TravelerInfo(form), WizardField::Travelers) => form.travelers = value,
        (Wizard::Payment { payment, .. }, WizardField::CardNumber) => {
            payment.card_number = value
        }
        (Wizard::Payment { payment, .. }, WizardField::Expiry) => payment.expiry = value,
        (Wizard::Payment { payment, .. }, WizardField::Cvv) => payment.cvv = value,
        _ => return Dispatched::unchanged(),
    }

    // Editing a flagged field unflags it
    let flag = wizard_field_key(field);
    state.wizard_ui.missing.retain(|f| *f != flag);

    Dispatched::changed()
}

fn wizard_field_key(field: WizardField) -> &'static str {
    match field {
        WizardField::FirstName => "first_name",
        WizardField::LastName => "last_name",
        WizardField::Email => "email",
        WizardField::Phone => "phone",
        WizardField::Date => "date",
        WizardField::Travelers => "travelers",
        WizardField::CardNumber => "card_number",
        WizardField::Expiry => "expiry",
        WizardField::Cvv => "cvv",
    }
}

fn move_wizard_focus(state: &mut AppState, delta: i8) -> Dispatched<Effect> {
    let fields = match state.wizard {
        Some(Wizard::TravelerInfo(_)) => 6,
        Some(Wizard::Payment { .. }) => 3,
        _ => return Dispatched::unchanged(),
    };
    let focus = state.wizard_ui.focus as i8 + delta;
    state.wizard_ui.focus = focus.rem_euclid(fields) as usize;
    Dispatched::changed()
}

fn reduce_payment_submit(state: &mut AppState) -> Dispatched<Effect> {
    let Screen::Booking(package_id) = state.screen else {
        return Dispatched::unchanged();
    };
    let Some(package) = state.package(package_id).cloned() else {
        state.notice = Some(Notice::error("No package found for this booking"));
        return Dispatched::changed_with(Effect::ScheduleNoticeClear);
    };
    let Some(booking) = state.wizard.as_ref().and_then(|w| w.build_booking(&package)) else {
        return Dispatched::unchanged();
    };

    state.bookings.slice.loading = true;
    Dispatched::changed_with(Effect::CreateBooking(booking))
}

fn set_enquiry_field(state: &mut AppState, field: EnquiryField, value: String) {
    let form = &mut state.enquiry_form;
    let key = match field {
        EnquiryField::Name => {
            form.name = value;
            "name"
        }
        EnquiryField::Email => {
            form.email = value;
            "email"
        }
        EnquiryField::Phone => {
            form.phone = value;
            "phone"
        }
        EnquiryField::Destination => {
            form.destination = value;
            "destination"
        }
        EnquiryField::Date => {
            form.date = value;
            "date"
        }
        EnquiryField::Guests => {
            form.guests = value;
            "guests"
        }
        EnquiryField::Message => {
            form.message = value;
            "message"
        }
    };
    form.errors.retain(|e| e.field != key);
}

fn reduce_enquiry_submit(state: &mut AppState) -> Dispatched<Effect> {
    // One submission at a time
    if state.enquiry_status.loading {
        return Dispatched::unchanged();
    }

    let form = &state.enquiry_form;
    let mut errors = Vec::new();

    if let Err(e) = validate::require("name", &form.name, "Name") {
        errors.push(e);
    }
    if let Err(e) = validate::email("email", &form.email) {
        errors.push(e);
    }
    if let Err(e) = validate::phone("phone", &form.phone) {
        errors.push(e);
    }
    if let Err(e) = validate::require("destination", &form.destination, "Destination") {
        errors.push(e);
    }
    if let Err(e) = validate::require("date", &form.date, "Date") {
        errors.push(e);
    }

    if !errors.is_empty() {
        state.enquiry_form.errors = errors;
        return Dispatched::changed();
    }

    let enquiry = Enquiry {
        kind: ENQUIRY_KIND_PACKAGE.to_string(),
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: form.phone.trim().to_string(),
        destination: form.destination.trim().to_string(),
        date: form.date.trim().to_string(),
        guests: form.guests.trim().to_string(),
        message: form.message.trim().to_string(),
        submitted_at: Utc::now().to_rfc3339(),
    };

    state.enquiry_form.errors.clear();
    state.enquiry_status.loading = true;
    state.enquiry_status.error = None;
    state.enquiry_status.success = false;

    Dispatched::changed_with(Effect::SubmitEnquiry(enquiry))
}

fn set_contact_field(state: &mut AppState, field: ContactField, value: String) {
    let form = &mut state.contact_form;
    let key = match field {
        ContactField::FirstName => {
            form.first_name = value;
            "first_name"
        }
        ContactField::LastName => {
            form.last_name = value;
            "last_name"
        }
        ContactField::Email => {
            form.email = value;
            "email"
        }
        ContactField::Message => {
            form.message = value;
            "message"
        }
    };
    form.errors.retain(|e| e.field != key);
}

fn reduce_contact_submit(state: &mut AppState) -> Dispatched<Effect> {
    if state.enquiry_status.loading {
        return Dispatched::unchanged();
    }

    let form = &state.contact_form;
    let mut errors = Vec::new();

    if let Err(e) = validate::require("first_name", &form.first_name, "First name") {
        errors.push(e);
    }
    if let Err(e) = validate::require("last_name", &form.last_name, "Last name") {
        errors.push(e);
    }
    if let Err(e) = validate::email("email", &form.email) {
        errors.push(e);
    }
    if let Err(e) = validate::require("message", &form.message, "Message") {
        errors.push(e);
    }

    if !errors.is_empty() {
        state.contact_form.errors = errors;
        return Dispatched::changed();
    }

    let enquiry = Enquiry {
        kind: ENQUIRY_KIND_GENERAL.to_string(),
        name: format!("{} {}", form.first_name.trim(), form.last_name.trim()),
        email: form.email.trim().to_string(),
        phone: String::new(),
        destination: String::new(),
        date: String::new(),
        guests: String::new(),
        message: form.message.trim().to_string(),
        submitted_at: Utc::now().to_rfc3339(),
    };

    state.contact_form.errors.clear();
    state.enquiry_status.loading = true;
    state.enquiry_status.error = None;
    state.enquiry_status.success = false;

    Dispatched::changed_with(Effect::SubmitEnquiry(enquiry))
}
