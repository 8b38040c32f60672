use super::{DocumentKind, DocumentTemplate};
use crate::canvas::Canvas;
use crate::error::Result;
use crate::fonts::{FontTier, TypeScale};
use crate::geometry::Rectangle;
use crate::graphics::Color;
use crate::record::FieldRecord;
use crate::report::{ExpectationReport, DEFAULT_HEADING};

const WIDTH: u32 = 600;
const HEIGHT: u32 = 400;
const HEADER_COLOR: Color = Color::rgb(0xFF, 0x6B, 0x35);
const LINE_PITCH: i32 = 25;

/// Indian Aadhaar card.
#[derive(Debug, Clone, Copy, Default)]
pub struct NationalIdCard;

impl DocumentTemplate for NationalIdCard {
    fn kind(&self) -> DocumentKind {
        DocumentKind::NationalId
    }

    fn record(&self) -> FieldRecord {
        FieldRecord::from_pairs([
            ("name", "KATRINA UUENI"),
            ("aadhaar_number", "1234 5678 9012"),
            ("date_of_birth", "1990-10-19"),
            ("address", "Tallinn, Estonia"),
            ("gender", "Female"),
            ("father_name", "JOHN UUENI"),
        ])
    }

    fn type_scale(&self) -> TypeScale {
        TypeScale::new(24.0, 16.0, 12.0)
    }

    fn layout(&self, record: &FieldRecord) -> Result<Canvas> {
        let mut canvas = Canvas::new(WIDTH, HEIGHT, Color::white())?;

        canvas
            .fill_rect(Rectangle::from_corners(0, 0, WIDTH as i32, 60), HEADER_COLOR)
            .text((20, 20), "Government of India", FontTier::Large, Color::white())
            .text((20, 45), "Aadhaar", FontTier::Medium, Color::white());

        let lines = [
            format!("Name: {}", record.field("name")?),
            format!("Aadhaar No: {}", record.field("aadhaar_number")?),
            format!("Date of Birth: {}", record.field("date_of_birth")?),
            format!("Gender: {}", record.field("gender")?),
            format!("Father's Name: {}", record.field("father_name")?),
            format!("Address: {}", record.field("address")?),
        ];
        for (row, line) in lines.into_iter().enumerate() {
            let y = 80 + row as i32 * LINE_PITCH;
            canvas.text((20, y), line, FontTier::Medium, Color::black());
        }

        // QR code placeholder
        canvas
            .stroke_rect(Rectangle::from_corners(400, 80, 580, 260), Color::black(), 2)
            .text((420, 170), "QR Code", FontTier::Small, Color::black());

        canvas.text(
            (20, HEIGHT as i32 - 30),
            "This is a test Aadhaar card for development purposes",
            FontTier::Small,
            Color::gray(),
        );

        Ok(canvas)
    }

    fn expectations(&self, record: &FieldRecord) -> Result<ExpectationReport> {
        Ok(ExpectationReport::new(DEFAULT_HEADING)
            .entry("Full Name", record.field("name")?)
            .entry("Aadhaar Number", record.field("aadhaar_number")?)
            .entry("Date of Birth", record.field("date_of_birth")?)
            .entry("Address", record.field("address")?)
            .entry("Gender", record.field("gender")?))
    }
}
