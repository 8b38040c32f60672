use super::{DocumentKind, DocumentTemplate};
use crate::canvas::Canvas;
use crate::error::Result;
use crate::fonts::{FontTier, TypeScale};
use crate::geometry::Rectangle;
use crate::graphics::Color;
use crate::record::FieldRecord;
use crate::report::{iso_date, ExpectationReport};

const WIDTH: u32 = 500;
// Tall enough for the last entry line (y = 370) and the border below it
const HEIGHT: u32 = 450;
const ROW: i32 = 20;

pub const FRRO_HEADING: &str = "Expected extracted data (FRRO C-Form Ready):";

/// Indian e-Visa sticker with the fields an FRRO C-Form needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisaSticker;

impl DocumentTemplate for VisaSticker {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Visa
    }

    fn record(&self) -> FieldRecord {
        FieldRecord::from_pairs([
            ("visa_type", "Tourist"),
            ("visa_category", "e-Visa"),
            ("visa_number", "900F3927P"),
            ("country", "India"),
            ("authority", "BUREAU OF IMMIGRATION INDIA"),
            ("issue_date", "14 MAR 2025"),
            ("expiry_date", "09 Mar 2026"),
            ("place_of_issue", "New Delhi"),
            ("purpose_of_visit", "Tourism"),
            ("port_of_entry", "IGI AIRPORT, NEW DELHI"),
            ("entries", "MULTIPLE"),
            ("stay_duration", "Each Stay not to exceed 90 days"),
            ("nationality", "Estonia"),
            ("passport_number", "KF0250087"),
            ("visa_status", "Active"),
            ("remarks", "Valid for tourism and leisure activities"),
            ("code", "C4"),
        ])
    }

    fn type_scale(&self) -> TypeScale {
        TypeScale::new(14.0, 11.0, 9.0)
    }

    fn layout(&self, record: &FieldRecord) -> Result<Canvas> {
        let mut canvas = Canvas::new(WIDTH, HEIGHT, Color::white())?;

        canvas
            .stroke_rect(
                Rectangle::from_corners(10, 10, WIDTH as i32 - 10, 50),
                Color::black(),
                2,
            )
            .text((20, 20), "INDIAN VISA", FontTier::Large, Color::black());

        let details = [
            ("Visa Type", "visa_type"),
            ("Visa Category", "visa_category"),
            ("Visa Number", "visa_number"),
            ("Country", "country"),
            ("Authority", "authority"),
            ("Place of Issue", "place_of_issue"),
            ("Purpose", "purpose_of_visit"),
        ];
        labelled_rows(&mut canvas, record, 70, &details)?;

        canvas
            .text(
                (20, 200),
                format!("Issue Date: {}", record.field("issue_date")?),
                FontTier::Medium,
                Color::red(),
            )
            .text(
                (20, 200 + ROW),
                format!("Expiry Date: {}", record.field("expiry_date")?),
                FontTier::Medium,
                Color::black(),
            );

        let entry = [
            ("Port of Entry", "port_of_entry"),
            ("Entries", "entries"),
            ("Stay Duration", "stay_duration"),
            ("Nationality", "nationality"),
            ("Passport No", "passport_number"),
            ("Status", "visa_status"),
            ("Remarks", "remarks"),
        ];
        labelled_rows(&mut canvas, record, 250, &entry)?;

        canvas.stroke_rect(
            Rectangle::from_corners(5, 5, WIDTH as i32 - 5, HEIGHT as i32 - 5),
            Color::blue(),
            3,
        );

        Ok(canvas)
    }

    fn expectations(&self, record: &FieldRecord) -> Result<ExpectationReport> {
        Ok(ExpectationReport::new(FRRO_HEADING)
            .entry("Visa Type", record.field("visa_type")?)
            .entry("Visa Category", record.field("visa_category")?)
            .entry("Visa Number", record.field("visa_number")?)
            .entry("Country", record.field("country")?)
            .entry("Place of Issue", record.field("place_of_issue")?)
            .entry("Purpose of Visit", record.field("purpose_of_visit")?)
            .entry("Issue Date", iso_date(record.field("issue_date")?)?)
            .entry("Expiry Date", iso_date(record.field("expiry_date")?)?)
            .entry("Port of Entry", record.field("port_of_entry")?)
            .entry("Entries", record.field("entries")?)
            .entry("Duration of Stay", record.field("stay_duration")?)
            .entry("Nationality", record.field("nationality")?)
            .entry("Passport Number", record.field("passport_number")?)
            .entry("Visa Status", record.field("visa_status")?)
            .entry("Remarks", record.field("remarks")?))
    }
}

/// `Label: value` rows in medium black text at x = 20.
fn labelled_rows(
    canvas: &mut Canvas,
    record: &FieldRecord,
    top: i32,
    rows: &[(&str, &str)],
) -> Result<()> {
    for (index, (label, field)) in rows.iter().enumerate() {
        canvas.text(
            (20, top + index as i32 * ROW),
            format!("{label}: {}", record.field(field)?),
            FontTier::Medium,
            Color::black(),
        );
    }
    Ok(())
}
