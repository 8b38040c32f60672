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
// Tan card stock under a saddle-brown header
const BACKGROUND: Color = Color::rgb(0xD2, 0xB4, 0x8C);
const HEADER_COLOR: Color = Color::rgb(0x8B, 0x45, 0x13);

/// Indian PAN (Permanent Account Number) card.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxIdCard;

impl DocumentTemplate for TaxIdCard {
    fn kind(&self) -> DocumentKind {
        DocumentKind::TaxId
    }

    fn record(&self) -> FieldRecord {
        FieldRecord::from_pairs([
            ("name", "KATRINA UUENI"),
            ("pan_number", "ABCDE1234F"),
            ("father_name", "JOHN UUENI"),
            ("date_of_birth", "1990-10-19"),
        ])
    }

    fn type_scale(&self) -> TypeScale {
        TypeScale::new(24.0, 16.0, 12.0)
    }

    fn layout(&self, record: &FieldRecord) -> Result<Canvas> {
        let mut canvas = Canvas::new(WIDTH, HEIGHT, BACKGROUND)?;

        canvas
            .fill_rect(Rectangle::from_corners(0, 0, WIDTH as i32, 60), HEADER_COLOR)
            .text((20, 20), "INCOME TAX DEPARTMENT", FontTier::Large, Color::white())
            .text((20, 45), "GOVT. OF INDIA", FontTier::Medium, Color::white());

        let y = 80;
        canvas
            .text((20, y), "Permanent Account Number Card", FontTier::Medium, Color::black())
            .text(
                (20, y + 30),
                format!("Name: {}", record.field("name")?),
                FontTier::Medium,
                Color::black(),
            )
            .text(
                (20, y + 55),
                format!("Father's Name: {}", record.field("father_name")?),
                FontTier::Medium,
                Color::black(),
            )
            .text(
                (20, y + 80),
                format!("Date of Birth: {}", record.field("date_of_birth")?),
                FontTier::Medium,
                Color::black(),
            )
            .text(
                (20, y + 105),
                format!("PAN: {}", record.field("pan_number")?),
                FontTier::Medium,
                Color::black(),
            );

        // Signature placeholder
        canvas
            .stroke_rect(Rectangle::from_corners(400, 150, 580, 200), Color::black(), 1)
            .text((420, 175), "Signature", FontTier::Small, Color::black());

        canvas.text(
            (20, HEIGHT as i32 - 30),
            "This is a test PAN card for development purposes",
            FontTier::Small,
            Color::gray(),
        );

        Ok(canvas)
    }

    fn expectations(&self, record: &FieldRecord) -> Result<ExpectationReport> {
        Ok(ExpectationReport::new(DEFAULT_HEADING)
            .entry("Full Name", record.field("name")?)
            .entry("PAN Number", record.field("pan_number")?)
            .entry("Father's Name", record.field("father_name")?)
            .entry("Date of Birth", record.field("date_of_birth")?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_pan_line_position() {
        let template = TaxIdCard;
        let canvas = template.layout(&template.record()).unwrap();

        assert_eq!(canvas.background(), BACKGROUND);
        assert!(canvas
            .text_lines()
            .any(|line| line == (Point::new(20, 185), "PAN: ABCDE1234F")));
    }

    #[test]
    fn test_expectations_order() {
        let template = TaxIdCard;
        let report = template.expectations(&template.record()).unwrap();
        let labels: Vec<_> = report.entries.iter().map(|e| e.label.as_str()).collect();

        assert_eq!(
            labels,
            vec!["Full Name", "PAN Number", "Father's Name", "Date of Birth"]
        );
        assert_eq!(report.value("PAN Number"), Some("ABCDE1234F"));
    }
}
