//! Declarative side effects emitted by the reducer
//!
//! The reducer describes what should happen; the runtime's effect handler
//! spawns the matching task on the `TaskManager`, keyed so a repeat request
//! replaces the one in flight.

use crate::model::{Booking, Enquiry};

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    FetchPackages,
    FetchCategories,
    FetchBlogs,
    FetchGallery,
    FetchBookings,
    /// POST the locally built booking.
    CreateBooking(Booking),
    /// POST an enquiry or contact submission.
    SubmitEnquiry(Enquiry),
    /// Render the PDF ticket for a booking.
    SaveTicket(Booking),
    /// Clear the transient notice after 3 seconds.
    ScheduleNoticeClear,
}
