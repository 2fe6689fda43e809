//! Booking wizard state machine
//!
//! A tagged union rather than a step counter: each state carries exactly the
//! data valid at that point, so "payment details without traveler info"
//! cannot be represented. Back from Payment restores the traveler form
//! with every field intact.

use chrono::Utc;

use crate::model::{next_booking_id, Booking, Package};

/// Step 1 form. All free text; travelers is parsed on submit.
#[derive(Clone, Debug, PartialEq)]
pub struct TravelerForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub travelers: String,
}

impl Default for TravelerForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            date: String::new(),
            travelers: "2".to_string(),
        }
    }
}

/// Validated traveler data carried into the payment step.
#[derive(Clone, Debug, PartialEq)]
pub struct TravelerDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub travelers: u32,
}

/// Step 2 form. Mock payment, never validated beyond presence, never sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentForm {
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

/// The wizard, one state per step.
#[derive(Clone, Debug, PartialEq)]
pub enum Wizard {
    TravelerInfo(TravelerForm),
    Payment {
        traveler: TravelerDetails,
        payment: PaymentForm,
    },
    Confirmed(Booking),
}

impl Wizard {
    /// Fresh wizard at step 1.
    pub fn new() -> Self {
        Wizard::TravelerInfo(TravelerForm::default())
    }

    /// 1-based step number for the progress bar.
    pub fn step(&self) -> u8 {
        match self {
            Wizard::TravelerInfo(_) => 1,
            Wizard::Payment { .. } => 2,
            Wizard::Confirmed(_) => 3,
        }
    }

    /// Advance TravelerInfo -> Payment.
    ///
    /// Presence-only validation: every field non-empty and travelers parses
    /// to at least 1. On failure the wizard is unchanged and the offending
    /// fields are returned.
    pub fn submit_traveler(self) -> Result<Self, (Self, Vec<&'static str>)> {
        let Wizard::TravelerInfo(form) = self else {
            return Ok(self);
        };

        let mut missing = Vec::new();
        if form.first_name.trim().is_empty() {
            missing.push("first_name");
        }
        if form.last_name.trim().is_empty() {
            missing.push("last_name");
        }
        if form.email.trim().is_empty() {
            missing.push("email");
        }
        if form.phone.trim().is_empty() {
            missing.push("phone");
        }
        if form.date.trim().is_empty() {
            missing.push("date");
        }

        let travelers = form.travelers.trim().parse::<u32>().ok().filter(|n| *n >= 1);
        if travelers.is_none() {
            missing.push("travelers");
        }

        if !missing.is_empty() {
            return Err((Wizard::TravelerInfo(form), missing));
        }

        let travelers = travelers.unwrap_or(1);
        Ok(Wizard::Payment {
            traveler: TravelerDetails {
                first_name: form.first_name.trim().to_string(),
                last_name: form.last_name.trim().to_string(),
                email: form.email.trim().to_string(),
                phone: form.phone.trim().to_string(),
                date: form.date.trim().to_string(),
                travelers,
            },
            payment: PaymentForm::default(),
        })
    }

    /// Back from Payment to TravelerInfo, traveler data preserved.
    pub fn back(self) -> Self {
        match self {
            Wizard::Payment { traveler, .. } => Wizard::TravelerInfo(TravelerForm {
                first_name: traveler.first_name,
                last_name: traveler.last_name,
                email: traveler.email,
                phone: traveler.phone,
                date: traveler.date,
                travelers: traveler.travelers.to_string(),
            }),
            other => other,
        }
    }

    /// Build the booking submitted from the Payment step.
    pub fn build_booking(&self, package: &Package) -> Option<Booking> {
        let Wizard::Payment { traveler, .. } = self else {
            return None;
        };

        Some(Booking {
            id: next_booking_id(),
            package_id: package.id,
            package_title: Some(package.title.clone()),
            first_name: Some(traveler.first_name.clone()),
            last_name: Some(traveler.last_name.clone()),
            email: Some(traveler.email.clone()),
            phone: Some(traveler.phone.clone()),
            date: Some(traveler.date.clone()),
            travelers: Some(traveler.travelers),
            total_amount: Some(total(package.price, traveler.travelers)),
            booking_date: Some(Utc::now().to_rfc3339()),
            status: Some("Confirmed".to_string()),
        })
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

/// Live total shown in the summary sidebar and stored on the booking.
pub fn total(price: u64, travelers: u32) -> u64 {
    price * travelers as u64
}
