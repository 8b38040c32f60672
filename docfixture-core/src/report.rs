//! Expected-extraction reports
//!
//! A report lists what a downstream extractor should read back from a
//! fixture. It is always built from the same [`FieldRecord`](crate::FieldRecord)
//! that was drawn, so the two cannot drift apart.

use crate::error::{FixtureError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

pub const DEFAULT_HEADING: &str = "Expected extracted data:";

/// One `Label: value` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpectedField {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpectationReport {
    pub heading: String,
    pub entries: Vec<ExpectedField>,
}

impl ExpectationReport {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            entries: Vec::new(),
        }
    }

    pub fn entry(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(ExpectedField {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    /// Value reported under `label`, if any.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }
}

impl fmt::Display for ExpectationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        for field in &self.entries {
            writeln!(f, "{}: {}", field.label, field.value)?;
        }
        Ok(())
    }
}

/// Normalize a printed date to ISO `YYYY-MM-DD`.
///
/// Accepts `YYYY-MM-DD`, `DD.MM.YYYY` and `DD Mon YYYY` (month abbreviation
/// in any case).
pub fn iso_date(value: &str) -> Result<String> {
    const FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%d %b %Y"];

    let trimmed = value.trim();
    FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .map(|date| date.format("%Y-%m-%d").to_string())
        .ok_or_else(|| FixtureError::DateFormat {
            value: value.to_string(),
            expected: "YYYY-MM-DD, DD.MM.YYYY or DD Mon YYYY".to_string(),
        })
}

/// English country name for an ISO 3166 alpha-3 code used on the fixtures.
pub fn country_name(code: &str) -> Option<&'static str> {
    match code {
        "EST" => Some("Estonia"),
        "IND" => Some("India"),
        "LVA" => Some("Latvia"),
        "LTU" => Some("Lithuania"),
        "FIN" => Some("Finland"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_rendering() {
        let report = ExpectationReport::new(DEFAULT_HEADING)
            .entry("Full Name", "KATRINA UUENI")
            .entry("PAN Number", "ABCDE1234F");

        assert_eq!(
            report.to_string(),
            "Expected extracted data:\nFull Name: KATRINA UUENI\nPAN Number: ABCDE1234F\n"
        );
        assert_eq!(report.value("PAN Number"), Some("ABCDE1234F"));
        assert_eq!(report.value("Gender"), None);
    }

    #[test]
    fn test_json_rendering() {
        let report = ExpectationReport::new("Heading").entry("Entries", "MULTIPLE");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["heading"], "Heading");
        assert_eq!(json["entries"][0]["label"], "Entries");
        assert_eq!(json["entries"][0]["value"], "MULTIPLE");
    }

    #[test]
    fn test_iso_date_formats() {
        assert_eq!(iso_date("1990-10-19").unwrap(), "1990-10-19");
        assert_eq!(iso_date("19.10.1990").unwrap(), "1990-10-19");
        assert_eq!(iso_date("13.02.2033").unwrap(), "2033-02-13");
        assert_eq!(iso_date("14 MAR 2025").unwrap(), "2025-03-14");
        assert_eq!(iso_date("09 Mar 2026").unwrap(), "2026-03-09");
    }

    #[test]
    fn test_iso_date_rejects_unknown_format() {
        assert!(matches!(
            iso_date("19/10/1990"),
            Err(FixtureError::DateFormat { .. })
        ));
        assert!(iso_date("31.02.2020").is_err());
    }

    #[test]
    fn test_country_name() {
        assert_eq!(country_name("EST"), Some("Estonia"));
        assert_eq!(country_name("XXX"), None);
    }
}
