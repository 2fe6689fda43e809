//! Domain models mirroring the WanderLux API payloads
//!
//! The API serves camelCase JSON; every struct derives serde with
//! `rename_all = "camelCase"`. Bookings fetched from the server may predate
//! the current schema, so their descriptive fields are optional and default.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A travel package offered in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub price: u64,
    #[serde(default)]
    pub rating: f64,
    pub location: String,
    #[serde(default)]
    pub region: Option<String>,
    pub category: String,
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub featured: bool,
}

impl Package {
    /// Number of itinerary days derived from the leading integer of
    /// `duration` ("5 Days / 4 Nights" -> 5). Fallback 3, capped at 5.
    pub fn itinerary_days(&self) -> u32 {
        let leading: String = self
            .duration
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        leading.parse::<u32>().unwrap_or(3).clamp(1, 5)
    }
}

/// A package category (weekend / domestic / international).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub package_count: u32,
}

/// A photo in the destination gallery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: String,
    pub year: i32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
}

/// A blog post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub image: String,
}

/// An enquiry or contact-form submission, built once on submit.
///
/// Both the package enquiry form and the contact page post here; `kind`
/// discriminates them server-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub guests: String,
    #[serde(default)]
    pub message: String,
    pub submitted_at: String,
}

/// Enquiry kind posted by the package enquiry form.
pub const ENQUIRY_KIND_PACKAGE: &str = "Package Enquiry";
/// Enquiry kind posted by the contact page.
pub const ENQUIRY_KIND_GENERAL: &str = "General Enquiry";

/// A confirmed booking.
///
/// Created locally by the wizard with every field present; entries fetched
/// from `/bookings` may be missing descriptive fields, so those are optional
/// and renderers substitute placeholders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub package_id: i64,
    #[serde(default)]
    pub package_title: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub travelers: Option<u32>,
    #[serde(default)]
    pub total_amount: Option<u64>,
    #[serde(default)]
    pub booking_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Booking {
    /// Traveler full name, or "N/A" when both parts are missing.
    pub fn traveler_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (None, None) => "N/A".to_string(),
            (first, last) => format!("{} {}", first.unwrap_or(""), last.unwrap_or(""))
                .trim()
                .to_string(),
        }
    }
}

/// A fresh time-based booking id (epoch milliseconds).
pub fn next_booking_id() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_deserializes_camel_case() {
        let json = r#"{
            "id": 4,
            "title": "Bali Escape",
            "description": "Seven nights in Ubud",
            "image": "bali.jpg",
            "price": 45000,
            "rating": 4.7,
            "location": "Bali, Indonesia",
            "region": "Asia",
            "category": "International",
            "subCategory": "Beach",
            "duration": "7 Days / 6 Nights",
            "featured": true
        }"#;

        let pkg: Package = serde_json::from_str(json).unwrap();
        assert_eq!(pkg.sub_category.as_deref(), Some("Beach"));
        assert!(pkg.featured);
        assert_eq!(pkg.price, 45000);
    }

    #[test]
    fn itinerary_days_parses_leading_integer() {
        let mut pkg = sample_package();

        pkg.duration = "5 Days / 4 Nights".into();
        assert_eq!(pkg.itinerary_days(), 5);

        pkg.duration = "2D/1N".into();
        assert_eq!(pkg.itinerary_days(), 2);

        // No leading integer falls back to 3
        pkg.duration = "One week".into();
        assert_eq!(pkg.itinerary_days(), 3);

        // Long trips capped at 5
        pkg.duration = "14 Days".into();
        assert_eq!(pkg.itinerary_days(), 5);
    }

    #[test]
    fn sparse_booking_deserializes_with_defaults() {
        let json = r#"{"id": 1700000000000, "packageId": 4}"#;
        let booking: Booking = serde_json::from_str(json).unwrap();

        assert_eq!(booking.package_id, 4);
        assert!(booking.package_title.is_none());
        assert!(booking.total_amount.is_none());
        assert_eq!(booking.traveler_name(), "N/A");
    }

    #[test]
    fn traveler_name_handles_partial_fields() {
        let mut booking: Booking =
            serde_json::from_str(r#"{"id": 1, "packageId": 2}"#).unwrap();

        booking.first_name = Some("Priya".into());
        assert_eq!(booking.traveler_name(), "Priya");

        booking.last_name = Some("Sharma".into());
        assert_eq!(booking.traveler_name(), "Priya Sharma");
    }

    #[test]
    fn enquiry_serializes_type_discriminator() {
        let enquiry = Enquiry {
            kind: ENQUIRY_KIND_GENERAL.into(),
            name: "Priya Sharma".into(),
            email: "priya@example.com".into(),
            phone: String::new(),
            destination: String::new(),
            date: String::new(),
            guests: String::new(),
            message: "Planning a honeymoon".into(),
            submitted_at: "2026-08-30T10:00:00Z".into(),
        };

        let json = serde_json::to_value(&enquiry).unwrap();
        assert_eq!(json["type"], "General Enquiry");
        assert_eq!(json["submittedAt"], "2026-08-30T10:00:00Z");
    }

    fn sample_package() -> Package {
        Package {
            id: 1,
            title: "Test".into(),
            description: String::new(),
            image: String::new(),
            price: 10000,
            rating: 4.0,
            location: "Goa".into(),
            region: None,
            category: "Domestic".into(),
            sub_category: None,
            duration: "3 Days".into(),
            featured: false,
        }
    }
}
