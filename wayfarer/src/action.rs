//! Actions; every state change flows through one of these.
//!
//! Naming convention: the prefix groups related actions (Packages*,
//! Wizard*, Enquiry*), `Did*` marks an async result landing back in the
//! reducer. Intent actions dispatch effects; result actions settle slices.

use std::path::PathBuf;

use crate::model::{Blog, Booking, Category, Enquiry, GalleryItem, Package};
use crate::state::Screen;

/// A field in the booking wizard forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardField {
    FirstName,
    LastName,
    Email,
    Phone,
    Date,
    Travelers,
    CardNumber,
    Expiry,
    Cvv,
}

/// A field in the enquiry form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnquiryField {
    Name,
    Email,
    Phone,
    Destination,
    Date,
    Guests,
    Message,
}

/// A field in the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Message,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Navigation =====
    NavGoto(Screen),
    NavBack,

    // ===== Remote collections =====
    PackagesFetch,
    PackagesDidLoad(Vec<Package>),
    PackagesDidError(String),
    CategoriesFetch,
    CategoriesDidLoad(Vec<Category>),
    CategoriesDidError(String),
    BlogsFetch,
    BlogsDidLoad(Vec<Blog>),
    BlogsDidError(String),
    GalleryFetch,
    GalleryDidLoad(Vec<GalleryItem>),
    GalleryDidError(String),
    BookingsFetch,
    BookingsDidLoad(Vec<Booking>),
    BookingsDidError(String),

    // ===== Packages screen =====
    PackageSelect(usize),
    PackageOpen(usize),
    PackagesFocusToggle,
    FilterCursorMove(i8),
    FilterQueryChange(String),
    FilterToggleCategory(String),
    FilterCycleRegion,
    FilterCycleSubCategory,
    FilterPriceLower,
    FilterPriceRaise,
    FilterClear,

    // ===== Gallery / blogs / profile =====
    GallerySelect(usize),
    GalleryYearCycle,
    BlogSelect(usize),
    BlogOpen(usize),
    ProfileSelect(usize),

    // ===== Booking wizard =====
    WizardStart(i64),
    WizardFieldChange(WizardField, String),
    WizardFocusNext,
    WizardFocusPrev,
    WizardSubmitTraveler,
    WizardBack,
    WizardSubmitPayment,
    BookingDidCreate(Booking),
    BookingDidError(String),

    // ===== Enquiry form (package detail) =====
    EnquiryToggle,
    EnquiryFieldChange(EnquiryField, String),
    EnquiryFocusNext,
    EnquiryFocusPrev,
    EnquirySubmit,
    EnquiryDidSubmit(Enquiry),
    EnquiryDidError(String),

    // ===== Contact form =====
    ContactFieldChange(ContactField, String),
    ContactFocusNext,
    ContactFocusPrev,
    ContactSubmit,

    // ===== Tickets =====
    TicketSave(usize),
    TicketDidSave(PathBuf),
    TicketDidError(String),

    // ===== Global =====
    NoticeExpired,
    Tick,
    Quit,
}

impl wayfarer_core::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::NavGoto(_) => "NavGoto",
            Action::NavBack => "NavBack",
            Action::PackagesFetch => "PackagesFetch",
            Action::PackagesDidLoad(_) => "PackagesDidLoad",
            Action::PackagesDidError(_) => "PackagesDidError",
            Action::CategoriesFetch => "CategoriesFetch",
            Action::CategoriesDidLoad(_) => "CategoriesDidLoad",
            Action::CategoriesDidError(_) => "CategoriesDidError",
            Action::BlogsFetch => "BlogsFetch",
            Action::BlogsDidLoad(_) => "BlogsDidLoad",
            Action::BlogsDidError(_) => "BlogsDidError",
            Action::GalleryFetch => "GalleryFetch",
            Action::GalleryDidLoad(_) => "GalleryDidLoad",
            Action::GalleryDidError(_) => "GalleryDidError",
            Action::BookingsFetch => "BookingsFetch",
            Action::BookingsDidLoad(_) => "BookingsDidLoad",
            Action::BookingsDidError(_) => "BookingsDidError",
            Action::PackageSelect(_) => "PackageSelect",
            Action::PackageOpen(_) => "PackageOpen",
            Action::PackagesFocusToggle => "PackagesFocusToggle",
            Action::FilterCursorMove(_) => "FilterCursorMove",
            Action::FilterQueryChange(_) => "FilterQueryChange",
            Action::FilterToggleCategory(_) => "FilterToggleCategory",
            Action::FilterCycleRegion => "FilterCycleRegion",
            Action::FilterCycleSubCategory => "FilterCycleSubCategory",
            Action::FilterPriceLower => "FilterPriceLower",
            Action::FilterPriceRaise => "FilterPriceRaise",
            Action::FilterClear => "FilterClear",
            Action::GallerySelect(_) => "GallerySelect",
            Action::GalleryYearCycle => "GalleryYearCycle",
            Action::BlogSelect(_) => "BlogSelect",
            Action::BlogOpen(_) => "BlogOpen",
            Action::ProfileSelect(_) => "ProfileSelect",
            Action::WizardStart(_) => "WizardStart",
            Action::WizardFieldChange(..) => "WizardFieldChange",
            Action::WizardFocusNext => "WizardFocusNext",
            Action::WizardFocusPrev => "WizardFocusPrev",
            Action::WizardSubmitTraveler => "WizardSubmitTraveler",
            Action::WizardBack => "WizardBack",
            Action::WizardSubmitPayment => "WizardSubmitPayment",
            Action::BookingDidCreate(_) => "BookingDidCreate",
            Action::BookingDidError(_) => "BookingDidError",
            Action::EnquiryToggle => "EnquiryToggle",
            Action::EnquiryFieldChange(..) => "EnquiryFieldChange",
            Action::EnquiryFocusNext => "EnquiryFocusNext",
            Action::EnquiryFocusPrev => "EnquiryFocusPrev",
            Action::EnquirySubmit => "EnquirySubmit",
            Action::EnquiryDidSubmit(_) => "EnquiryDidSubmit",
            Action::EnquiryDidError(_) => "EnquiryDidError",
            Action::ContactFieldChange(..) => "ContactFieldChange",
            Action::ContactFocusNext => "ContactFocusNext",
            Action::ContactFocusPrev => "ContactFocusPrev",
            Action::ContactSubmit => "ContactSubmit",
            Action::TicketSave(_) => "TicketSave",
            Action::TicketDidSave(_) => "TicketDidSave",
            Action::TicketDidError(_) => "TicketDidError",
            Action::NoticeExpired => "NoticeExpired",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}
