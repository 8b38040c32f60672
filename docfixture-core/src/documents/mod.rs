//! Document templates
//!
//! Each supported document type owns a literal [`FieldRecord`], a
//! [`TypeScale`] and a layout that turns the record into a [`Canvas`]. The
//! same record feeds the [`ExpectationReport`], so what is drawn and what is
//! reported come from one source.

mod national_id;
mod passport;
mod tax_id;
mod visa;

pub use national_id::NationalIdCard;
pub use passport::Passport;
pub use tax_id::TaxIdCard;
pub use visa::VisaSticker;

use crate::canvas::Canvas;
use crate::error::{FixtureError, Result};
use crate::fonts::TypeScale;
use crate::record::FieldRecord;
use crate::report::ExpectationReport;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Supported document types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// Indian Aadhaar card
    NationalId,
    /// Indian PAN card
    TaxId,
    /// Estonian passport data page
    Passport,
    /// Indian e-Visa sticker
    Visa,
}

impl DocumentKind {
    /// All kinds in generation order
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::NationalId,
        DocumentKind::TaxId,
        DocumentKind::Passport,
        DocumentKind::Visa,
    ];

    /// Output file name without extension
    pub fn file_stem(&self) -> &'static str {
        match self {
            DocumentKind::NationalId => "aadhaar",
            DocumentKind::TaxId => "pan",
            DocumentKind::Passport => "passport",
            DocumentKind::Visa => "visa",
        }
    }

    /// Short description used in console banners
    pub fn description(&self) -> &'static str {
        match self {
            DocumentKind::NationalId => "Indian Aadhaar data",
            DocumentKind::TaxId => "Indian PAN card data",
            DocumentKind::Passport => "Estonian passport data",
            DocumentKind::Visa => "Indian visa data",
        }
    }

    /// Command-line name
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::NationalId => "national-id",
            DocumentKind::TaxId => "tax-id",
            DocumentKind::Passport => "passport",
            DocumentKind::Visa => "visa",
        }
    }

    pub fn template(&self) -> &'static dyn DocumentTemplate {
        match self {
            DocumentKind::NationalId => &NationalIdCard,
            DocumentKind::TaxId => &TaxIdCard,
            DocumentKind::Passport => &Passport,
            DocumentKind::Visa => &VisaSticker,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self> {
        DocumentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.file_stem() == s)
            .ok_or_else(|| FixtureError::InvalidOptions(format!("unknown document kind: {s}")))
    }
}

/// Record, type scale and layout for one document type.
pub trait DocumentTemplate: Send + Sync {
    fn kind(&self) -> DocumentKind;

    /// The literal data drawn onto the fixture
    fn record(&self) -> FieldRecord;

    fn type_scale(&self) -> TypeScale;

    /// Lay `record` out as draw directives
    fn layout(&self, record: &FieldRecord) -> Result<Canvas>;

    /// Values an extractor should read back from the fixture
    fn expectations(&self, record: &FieldRecord) -> Result<ExpectationReport>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(DocumentKind::NationalId.file_stem(), "aadhaar");
        assert_eq!(DocumentKind::TaxId.file_stem(), "pan");
        assert_eq!(DocumentKind::Visa.to_string(), "visa");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("tax-id".parse::<DocumentKind>().unwrap(), DocumentKind::TaxId);
        assert_eq!("aadhaar".parse::<DocumentKind>().unwrap(), DocumentKind::NationalId);
        assert!("driver-license".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_templates_match_their_kind() {
        for kind in DocumentKind::ALL {
            assert_eq!(kind.template().kind(), kind);
        }
    }

    #[test]
    fn test_every_layout_resolves_its_record() {
        for kind in DocumentKind::ALL {
            let template = kind.template();
            let record = template.record();
            assert!(template.layout(&record).is_ok(), "{kind} layout failed");
            assert!(template.expectations(&record).is_ok(), "{kind} report failed");
        }
    }

    #[test]
    fn test_layout_fails_on_incomplete_record() {
        for kind in DocumentKind::ALL {
            let empty = FieldRecord::from_pairs(Vec::<(&'static str, String)>::new());
            assert!(matches!(
                kind.template().layout(&empty),
                Err(FixtureError::MissingField(_))
            ));
        }
    }
}
