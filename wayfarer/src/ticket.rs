//! PDF ticket renderer
//!
//! Renders a single-page booking confirmation: orange header band, booking
//! id/date line, a two-column details table, and a footer. Missing optional
//! fields become "N/A"/"0" so a sparse server booking still yields a ticket.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::DateTime;
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, Line, Mm, PdfDocument, PdfLayerReference, Point, Polygon, Rgb,
};
use thiserror::Error;
use tracing::info;

use crate::model::Booking;

/// Agency name printed on the header and footer.
pub const AGENCY_NAME: &str = "WanderLux";
/// Support contact printed in the footer.
pub const SUPPORT_EMAIL: &str = "support@wanderlux.example";

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const HEADER_HEIGHT: f32 = 40.0;

#[derive(Debug, Error)]
pub enum TicketError {
    #[error("could not write ticket file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not render ticket: {0}")]
    Pdf(#[from] printpdf::Error),
}

fn orange() -> Color {
    // The brand primary, #ff5722
    Color::Rgb(Rgb::new(1.0, 0.34, 0.13, None))
}

fn white() -> Color {
    Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn gray() -> Color {
    Color::Rgb(Rgb::new(0.4, 0.4, 0.4, None))
}

/// Group digits in threes: 135000 -> "135,000".
fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Booking date for display, `N/A` when absent or unparseable.
fn display_booking_date(booking: &Booking) -> String {
    booking
        .booking_date
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn filled_band(layer: &PdfLayerReference, y_bottom: f32, height: f32, color: Color) {
    layer.set_fill_color(color);
    layer.add_polygon(Polygon {
        rings: vec![vec![
            (Point::new(Mm(0.0), Mm(y_bottom)), false),
            (Point::new(Mm(PAGE_WIDTH), Mm(y_bottom)), false),
            (Point::new(Mm(PAGE_WIDTH), Mm(y_bottom + height)), false),
            (Point::new(Mm(0.0), Mm(y_bottom + height)), false),
        ]],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
}

fn separator(layer: &PdfLayerReference, y: f32) {
    layer.set_outline_color(Color::Rgb(Rgb::new(0.8, 0.8, 0.8, None)));
    layer.set_outline_thickness(0.3);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(14.0), Mm(y)), false),
            (Point::new(Mm(PAGE_WIDTH - 14.0), Mm(y)), false),
        ],
        is_closed: false,
    });
}

/// Render the ticket for `booking` into `dir`, returning the file path.
pub fn render_ticket(booking: &Booking, dir: &Path) -> Result<PathBuf, TicketError> {
    let (doc, page, layer_index) = PdfDocument::new(
        format!("Ticket_{}", booking.id),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "ticket",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let layer = doc.get_page(page).get_layer(layer_index);

    // Header band
    filled_band(&layer, PAGE_HEIGHT - HEADER_HEIGHT, HEADER_HEIGHT, orange());
    layer.set_fill_color(white());
    layer.use_text(AGENCY_NAME, 22.0, Mm(80.0), Mm(PAGE_HEIGHT - 22.0), &bold);
    layer.use_text(
        "Booking Confirmation",
        12.0,
        Mm(84.0),
        Mm(PAGE_HEIGHT - 32.0),
        &regular,
    );

    // Booking info line
    layer.set_fill_color(black());
    layer.use_text(
        format!("Booking ID: #{}", booking.id),
        14.0,
        Mm(14.0),
        Mm(PAGE_HEIGHT - 60.0),
        &bold,
    );
    layer.use_text(
        format!("Date: {}", display_booking_date(booking)),
        14.0,
        Mm(14.0),
        Mm(PAGE_HEIGHT - 70.0),
        &regular,
    );

    // Details table
    let rows: Vec<(&str, String)> = vec![
        (
            "Package Name",
            booking
                .package_title
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
        ),
        ("Traveler Name", booking.traveler_name()),
        (
            "Travel Date",
            booking.date.clone().unwrap_or_else(|| "N/A".to_string()),
        ),
        (
            "Travelers",
            booking
                .travelers
                .map(|n| n.to_string())
                .unwrap_or_else(|| "0".to_string()),
        ),
        (
            "Contact Email",
            booking.email.clone().unwrap_or_else(|| "N/A".to_string()),
        ),
        (
            "Contact Phone",
            booking.phone.clone().unwrap_or_else(|| "N/A".to_string()),
        ),
        (
            "Status",
            booking
                .status
                .clone()
                .unwrap_or_else(|| "Pending".to_string()),
        ),
        (
            "Total Amount",
            format!("Rs. {}", format_amount(booking.total_amount.unwrap_or(0))),
        ),
    ];

    let table_top = PAGE_HEIGHT - 80.0;
    let row_height = 9.0;

    // Column header row on an orange band
    filled_band(&layer, table_top - 7.0, 9.0, orange());
    layer.set_fill_color(white());
    layer.use_text("Description", 12.0, Mm(16.0), Mm(table_top - 4.0), &bold);
    layer.use_text("Details", 12.0, Mm(92.0), Mm(table_top - 4.0), &bold);

    layer.set_fill_color(black());
    let mut y = table_top - 7.0 - row_height;
    for (label, value) in &rows {
        layer.use_text(*label, 12.0, Mm(16.0), Mm(y + 2.0), &bold);
        layer.use_text(value.as_str(), 12.0, Mm(92.0), Mm(y + 2.0), &regular);
        separator(&layer, y);
        y -= row_height;
    }

    // Footer
    let footer_y = y - 12.0;
    layer.set_fill_color(gray());
    layer.use_text(
        format!("Thank you for choosing {}.", AGENCY_NAME),
        10.0,
        Mm(70.0),
        Mm(footer_y),
        &regular,
    );
    layer.use_text(
        format!("For support, contact: {}", SUPPORT_EMAIL),
        10.0,
        Mm(66.0),
        Mm(footer_y - 6.0),
        &regular,
    );

    let path = dir.join(format!("Ticket_{}.pdf", booking.id));
    let file = File::create(&path)?;
    doc.save(&mut BufWriter::new(file))?;

    info!(path = %path.display(), "ticket saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_booking() -> Booking {
        Booking {
            id: 1700000000000,
            package_id: 4,
            package_title: Some("Bali Escape".into()),
            first_name: Some("Priya".into()),
            last_name: Some("Sharma".into()),
            email: Some("priya@example.com".into()),
            phone: Some("9876543210".into()),
            date: Some("2026-10-02".into()),
            travelers: Some(3),
            total_amount: Some(135_000),
            booking_date: Some("2026-08-30T10:00:00+00:00".into()),
            status: Some("Confirmed".into()),
        }
    }

    #[test]
    fn amount_grouping() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(45_000), "45,000");
        assert_eq!(format_amount(1_350_000), "1,350,000");
    }

    #[test]
    fn booking_date_formats_or_falls_back() {
        let mut booking = full_booking();
        assert_eq!(display_booking_date(&booking), "30/08/2026");

        booking.booking_date = Some("not-a-date".into());
        assert_eq!(display_booking_date(&booking), "N/A");

        booking.booking_date = None;
        assert_eq!(display_booking_date(&booking), "N/A");
    }

    #[test]
    fn renders_ticket_for_full_booking() {
        let dir = tempfile::tempdir().unwrap();
        let path = render_ticket(&full_booking(), dir.path()).unwrap();

        assert!(path.exists());
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "Ticket_1700000000000.pdf"
        );
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn renders_ticket_for_sparse_booking() {
        let dir = tempfile::tempdir().unwrap();
        let sparse: Booking =
            serde_json::from_str(r#"{"id": 42, "packageId": 1}"#).unwrap();

        // Placeholders substitute, nothing panics
        let path = render_ticket(&sparse, dir.path()).unwrap();
        assert!(path.exists());
    }
}
