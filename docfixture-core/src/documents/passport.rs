use super::{DocumentKind, DocumentTemplate};
use crate::canvas::Canvas;
use crate::error::{FixtureError, Result};
use crate::fonts::{FontTier, TypeScale};
use crate::geometry::Rectangle;
use crate::graphics::Color;
use crate::record::FieldRecord;
use crate::report::{country_name, iso_date, ExpectationReport, DEFAULT_HEADING};

const WIDTH: u32 = 600;
const HEIGHT: u32 = 400;
const ROW: i32 = 20;

/// Estonian passport data page with a two-line MRZ.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passport;

impl DocumentTemplate for Passport {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Passport
    }

    fn record(&self) -> FieldRecord {
        FieldRecord::from_pairs([
            ("type", "P"),
            ("country_code", "EST"),
            ("surname", "UUENI"),
            ("given_name", "KATRINA"),
            ("personal_code", "49010195221"),
            ("date_of_birth", "19.10.1990"),
            ("document_number", "KF0250087"),
            ("citizenship", "EST"),
            ("sex", "N/F"),
            ("place_of_birth", "EST"),
            ("date_of_issue", "13.02.2023"),
            ("date_of_expiry", "13.02.2033"),
            ("authority", "PPA/PBGB"),
            ("mrz_line1", "P<ESTUUENI<<KATRINA<<<<<<<<<<<<"),
            ("mrz_line2", "KF02500875EST9010196F330213049010195221<<<08"),
        ])
    }

    fn type_scale(&self) -> TypeScale {
        TypeScale::new(16.0, 12.0, 10.0)
    }

    fn layout(&self, record: &FieldRecord) -> Result<Canvas> {
        let mut canvas = Canvas::new(WIDTH, HEIGHT, Color::white())?;
        let right = WIDTH as i32 - 10;

        canvas
            .stroke_rect(Rectangle::from_corners(10, 10, right, 50), Color::black(), 2)
            .text((20, 20), "ESTONIAN PASSPORT", FontTier::Large, Color::black());

        let header = [
            format!("Liik/Type: {}", record.field("type")?),
            format!("Riigi kood/Country code: {}", record.field("country_code")?),
        ];
        stack(&mut canvas, 20, 70, header);

        let personal = [
            format!("1. Perekonnanimi / Surname: {}", record.field("surname")?),
            format!("2. Eesnimi / Given name: {}", record.field("given_name")?),
            format!("3. Isikukood / Personal code: {}", record.field("personal_code")?),
            format!("4. Kodakondsus / Citizenship: {}", record.field("citizenship")?),
            format!("5. Sünniaeg / Date of birth: {}", record.field("date_of_birth")?),
            format!("6. Sugu / Sex: {}", record.field("sex")?),
            "7. Sünnikoht / Place of birth: Tallinn, Estonia".to_string(),
            "8. Aadress / Address: Tallinn, Estonia".to_string(),
        ];
        stack(&mut canvas, 20, 120, personal);

        let details = [
            format!("Dokumendi number: {}", record.field("document_number")?),
            format!("8. Välja antud: {}", record.field("date_of_issue")?),
            format!("9. Kehtiv kuni: {}", record.field("date_of_expiry")?),
            format!("11. Väljaandja: {}", record.field("authority")?),
            "Address: Police and Border Guard Board, Tallinn, Estonia".to_string(),
        ];
        stack(&mut canvas, 300, 260, details);

        let mrz_top = HEIGHT as i32 - 60;
        canvas
            .stroke_rect(
                Rectangle::from_corners(10, mrz_top, right, HEIGHT as i32 - 10),
                Color::black(),
                1,
            )
            .text((15, mrz_top + 10), record.field("mrz_line1")?, FontTier::Small, Color::black())
            .text((15, mrz_top + 25), record.field("mrz_line2")?, FontTier::Small, Color::black());

        Ok(canvas)
    }

    fn expectations(&self, record: &FieldRecord) -> Result<ExpectationReport> {
        let citizenship = record.field("citizenship")?;
        let nationality = country_name(citizenship).ok_or_else(|| {
            FixtureError::MissingField(format!("country name for citizenship code {citizenship}"))
        })?;

        Ok(ExpectationReport::new(DEFAULT_HEADING)
            .entry(
                "Full Name",
                format!("{}, {}", record.field("surname")?, record.field("given_name")?),
            )
            .entry("Passport Number", record.field("document_number")?)
            .entry("Nationality", nationality)
            .entry("Date of Birth", iso_date(record.field("date_of_birth")?)?)
            .entry("Expiry Date", iso_date(record.field("date_of_expiry")?)?)
            .entry("Issue Date", iso_date(record.field("date_of_issue")?)?))
    }
}

/// Medium black lines at `x`, one row apart starting at `top`.
fn stack<I>(canvas: &mut Canvas, x: i32, top: i32, lines: I)
where
    I: IntoIterator<Item = String>,
{
    for (row, line) in lines.into_iter().enumerate() {
        canvas.text((x, top + row as i32 * ROW), line, FontTier::Medium, Color::black());
    }
}
