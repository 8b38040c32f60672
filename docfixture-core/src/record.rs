//! Literal field records
//!
//! A record is fixed at authoring time and read-only afterwards. Lookups of
//! absent fields are errors, never defaults, so a layout or report that
//! references a field the record lacks fails loudly.

use crate::error::{FixtureError, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Flat, insertion-ordered mapping from field name to value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    fields: Vec<(&'static str, String)>,
}

impl FieldRecord {
    /// Build a record from `(name, value)` pairs.
    ///
    /// A repeated name keeps its first position and takes the last value.
    pub fn from_pairs<I, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, V)>,
        V: Into<String>,
    {
        let mut fields: Vec<(&'static str, String)> = Vec::new();
        for (name, value) in pairs {
            let value = value.into();
            match fields.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = value,
                None => fields.push((name, value)),
            }
        }
        Self { fields }
    }

    /// Value of `name`, or [`FixtureError::MissingField`].
    pub fn field(&self, name: &str) -> Result<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value.as_str())
            .ok_or_else(|| FixtureError::MissingField(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(existing, _)| *existing == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

impl Serialize for FieldRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FieldRecord {
        FieldRecord::from_pairs([
            ("name", "KATRINA UUENI"),
            ("pan_number", "ABCDE1234F"),
        ])
    }

    #[test]
    fn test_field_lookup() {
        let record = sample();
        assert_eq!(record.field("name").unwrap(), "KATRINA UUENI");
        assert_eq!(record.field("pan_number").unwrap(), "ABCDE1234F");
        assert!(record.contains("name"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let record = sample();
        match record.field("father_name") {
            Err(FixtureError::MissingField(name)) => assert_eq!(name, "father_name"),
            other => panic!("Expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_keeps_position_takes_last_value() {
        let record = FieldRecord::from_pairs([("a", "1"), ("b", "2"), ("a", "3")]);
        let pairs: Vec<_> = record.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"name":"KATRINA UUENI","pan_number":"ABCDE1234F"}"#);
    }
}
