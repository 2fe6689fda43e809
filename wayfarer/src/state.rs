//! Application state - single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it.
//! Remote collections live in per-entity slices with fetch-and-replace
//! semantics; navigating to a screen triggers fetches for exactly the
//! empty slices that screen reads.

use crate::filters::{GalleryFilter, PackageFilter, MAX_PRICE};
use crate::model::{Blog, Booking, Category, GalleryItem, Package};
use crate::validate::FieldError;
use crate::wizard::Wizard;

/// One remote collection plus its request status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Slice<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Slice<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Whether navigation should trigger a fetch for this slice.
    pub fn needs_fetch(&self) -> bool {
        self.items.is_empty() && !self.loading
    }

    /// Request in flight.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the collection wholesale.
    pub fn loaded(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}

/// Bookings slice; also tracks the wizard's create-request outcome and the
/// booking carried to the confirmation screen (never re-fetched).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingsSlice {
    pub slice: Slice<Booking>,
    pub success: bool,
    pub current: Option<Booking>,
}

/// Enquiry submission status shared by the enquiry and contact forms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnquiryStatus {
    pub loading: bool,
    pub error: Option<String>,
    pub success: bool,
}

/// The active screen; detail screens carry the entity id they show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Packages,
    PackageDetail(i64),
    Booking(i64),
    BookingConfirmed,
    Profile,
    Gallery,
    Blogs,
    BlogDetail(i64),
    Contact,
    About,
}

impl Screen {
    /// Where Esc leads from this screen.
    pub fn back_target(self) -> Screen {
        match self {
            Screen::PackageDetail(_) => Screen::Packages,
            Screen::Booking(id) => Screen::PackageDetail(id),
            Screen::BookingConfirmed => Screen::Packages,
            Screen::BlogDetail(_) => Screen::Blogs,
            _ => Screen::Packages,
        }
    }
}

/// Transient banner severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient banner, auto-cleared 3 seconds after it is raised.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Which pane owns key events on the packages screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PackagesFocus {
    #[default]
    List,
    Filters,
}

/// Filter panel rows, cycled with up/down while the panel has focus.
pub const FILTER_CONTROLS: usize = 6; // search, price, 3 category rows, region/sub-category

/// Enquiry form opened from a package detail screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub destination: String,
    pub date: String,
    pub guests: String,
    pub message: String,
    pub focus: usize,
    pub errors: Vec<FieldError>,
}

impl EnquiryForm {
    pub const FIELDS: usize = 7;

    /// Fresh form with destination prefilled and one guest.
    pub fn for_destination(destination: &str) -> Self {
        Self {
            destination: destination.to_string(),
            guests: "1".to_string(),
            ..Self::default()
        }
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Contact page form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub focus: usize,
    pub errors: Vec<FieldError>,
}

impl ContactForm {
    pub const FIELDS: usize = 4;

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Wizard presentation state: which field has focus and which fields the
/// last submit flagged as missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WizardUi {
    pub focus: usize,
    pub missing: Vec<&'static str>,
}

/// Static identity block shown on the profile screen.
pub struct MockUser {
    pub name: &'static str,
    pub email: &'static str,
    pub member_since: &'static str,
}

pub const MOCK_USER: MockUser = MockUser {
    name: "Priya Sharma",
    email: "priya.sharma@example.com",
    member_since: "January 2024",
};

/// Everything the UI needs to render.
#[derive(Clone, Debug)]
pub struct AppState {
    pub screen: Screen,

    // Remote collections
    pub packages: Slice<Package>,
    pub categories: Slice<Category>,
    pub blogs: Slice<Blog>,
    pub gallery: Slice<GalleryItem>,
    pub bookings: BookingsSlice,

    // Packages screen
    pub filter: PackageFilter,
    pub packages_focus: PackagesFocus,
    pub packages_selected: usize,
    pub filter_cursor: usize,

    // Gallery screen
    pub gallery_filter: GalleryFilter,
    pub gallery_selected: usize,

    // Blogs / profile selections
    pub blogs_selected: usize,
    pub profile_selected: usize,

    // Booking wizard; present only while a booking is being made
    pub wizard: Option<Wizard>,
    pub wizard_ui: WizardUi,

    // Forms
    pub enquiry_open: bool,
    pub enquiry_form: EnquiryForm,
    pub enquiry_status: EnquiryStatus,
    pub contact_form: ContactForm,

    // Transient banner
    pub notice: Option<Notice>,

    /// Animation frame counter for loading spinners
    pub tick_count: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Packages,
            packages: Slice::new(),
            categories: Slice::new(),
            blogs: Slice::new(),
            gallery: Slice::new(),
            bookings: BookingsSlice::default(),
            filter: PackageFilter::default(),
            packages_focus: PackagesFocus::default(),
            packages_selected: 0,
            filter_cursor: 0,
            gallery_filter: GalleryFilter::default(),
            gallery_selected: 0,
            blogs_selected: 0,
            profile_selected: 0,
            wizard: None,
            wizard_ui: WizardUi::default(),
            enquiry_open: false,
            enquiry_form: EnquiryForm::default(),
            enquiry_status: EnquiryStatus::default(),
            contact_form: ContactForm::default(),
            notice: None,
            tick_count: 0,
        }
    }

    /// Seed the initial filter from CLI flags (themed entry).
    pub fn with_filter(mut self, filter: PackageFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Look up a package by id.
    pub fn package(&self, id: i64) -> Option<&Package> {
        self.packages.items.iter().find(|p| p.id == id)
    }

    /// Look up a blog by id.
    pub fn blog(&self, id: i64) -> Option<&Blog> {
        self.blogs.items.iter().find(|b| b.id == id)
    }

    /// Filtered package view in source order.
    pub fn visible_packages(&self) -> Vec<&Package> {
        self.filter.apply(&self.packages.items)
    }

    /// Filtered gallery view in source order.
    pub fn visible_gallery(&self) -> Vec<&GalleryItem> {
        self.gallery_filter.apply(&self.gallery.items)
    }

    /// Whether any slice relevant anywhere is mid-flight (spinner).
    pub fn any_loading(&self) -> bool {
        self.packages.loading
            || self.categories.loading
            || self.blogs.loading
            || self.gallery.loading
            || self.bookings.slice.loading
            || self.enquiry_status.loading
    }

    /// Price ceiling shown on the filter panel.
    pub fn effective_price_ceiling(&self) -> u64 {
        self.filter.price_ceiling.unwrap_or(MAX_PRICE)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_lifecycle() {
        let mut slice: Slice<i32> = Slice::new();
        assert!(slice.needs_fetch());

        slice.begin();
        assert!(slice.loading);
        assert!(!slice.needs_fetch());

        slice.loaded(vec![1, 2, 3]);
        assert!(!slice.loading);
        assert!(!slice.needs_fetch());
        assert_eq!(slice.items.len(), 3);

        slice.failed("boom".into());
        assert_eq!(slice.error.as_deref(), Some("boom"));
    }

    #[test]
    fn failed_empty_slice_is_refetchable() {
        let mut slice: Slice<i32> = Slice::new();
        slice.begin();
        slice.failed("network".into());

        // Navigating again should retry
        assert!(slice.needs_fetch());
    }

    #[test]
    fn bookings_slice_starts_empty() {
        let bookings = BookingsSlice::default();
        assert!(bookings.slice.needs_fetch());
        assert!(!bookings.success);
        assert!(bookings.current.is_none());
    }

    #[test]
    fn back_targets() {
        assert_eq!(Screen::PackageDetail(7).back_target(), Screen::Packages);
        assert_eq!(Screen::Booking(7).back_target(), Screen::PackageDetail(7));
        assert_eq!(Screen::BlogDetail(2).back_target(), Screen::Blogs);
        assert_eq!(Screen::About.back_target(), Screen::Packages);
    }

    #[test]
    fn enquiry_form_prefills_destination() {
        let form = EnquiryForm::for_destination("Bali, Indonesia");
        assert_eq!(form.destination, "Bali, Indonesia");
        assert_eq!(form.guests, "1");
        assert!(form.name.is_empty());
    }
}
