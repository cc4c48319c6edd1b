/// DataTable Record Implementation
///
/// A Record is one row of the table: an ordered map from field name to
/// scalar value, with a distinguished integer `id` field. Field order is
/// the order the renderer paints cells in.
///
/// # Examples
///
/// ```
/// use datatable::{FieldValue, Record};
///
/// let record = Record::new(1)
///     .with("name", "Laptop")
///     .with("price", 999.99);
///
/// assert_eq!(record.id(), 1);
/// assert_eq!(record.get("name").and_then(FieldValue::as_str), Some("Laptop"));
/// assert_eq!(record.field_names().collect::<Vec<_>>(), vec!["id", "name", "price"]);
/// ```

use crate::error::RecordError;
use crate::value::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the identifier field every record carries.
pub const ID_FIELD: &str = "id";

/// One row of data. Serializes as a flat JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IndexMap<String, FieldValue>", into = "IndexMap<String, FieldValue>")]
pub struct Record {
    id: i64,
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    /// Create a record holding only its `id` field.
    pub fn new(id: i64) -> Self {
        let mut fields = IndexMap::new();
        fields.insert(ID_FIELD.to_string(), FieldValue::Int(id));
        Record { id, fields }
    }

    /// Builder-style field insertion.
    ///
    /// The `id` field is fixed at construction; passing `id` here is ignored.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let name = name.into();
        if name != ID_FIELD {
            self.fields.insert(name, value.into());
        }
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the value of a field, or `None` if the record has no such field.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Returns true if the record's `field` contains `needle_lower` in its
    /// text form. A missing field never matches.
    pub fn field_contains(&self, field: &str, needle_lower: &str) -> bool {
        self.get(field)
            .map(|value| value.contains_lowercase(needle_lower))
            .unwrap_or(false)
    }

    /// Text form of a field for display; empty when absent or null.
    pub fn display_text(&self, field: &str) -> String {
        self.get(field).map(|v| v.to_string()).unwrap_or_default()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TryFrom<IndexMap<String, FieldValue>> for Record {
    type Error = RecordError;

    fn try_from(fields: IndexMap<String, FieldValue>) -> Result<Self, Self::Error> {
        let value = fields.get(ID_FIELD).ok_or(RecordError::MissingId)?;
        let id = value
            .as_i64()
            .ok_or_else(|| RecordError::InvalidId(format!("{:?}", value)))?;
        Ok(Record { id, fields })
    }
}

impl From<Record> for IndexMap<String, FieldValue> {
    fn from(record: Record) -> Self {
        record.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder_keeps_field_order() {
        let record = Record::new(4)
            .with("title", "Phone")
            .with("brand", "Acme")
            .with("price", 10);

        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["id", "title", "brand", "price"]);
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_record_id_is_fixed() {
        let record = Record::new(4).with("id", 99);
        assert_eq!(record.id(), 4);
        assert_eq!(record.get("id"), Some(&FieldValue::Int(4)));
    }

    #[test]
    fn test_field_contains() {
        let record = Record::new(12).with("title", "Samsung Universe 9");
        assert!(record.field_contains("title", "universe"));
        assert!(record.field_contains("id", "1"));
        assert!(!record.field_contains("brand", ""));
        assert!(!record.field_contains("title", "iphone"));
    }

    #[test]
    fn test_record_from_json() {
        let record: Record =
            serde_json::from_str(r#"{"id": 3, "name": "c", "price": 12.5}"#).unwrap();
        assert_eq!(record.id(), 3);
        assert_eq!(record.get("price").and_then(FieldValue::as_f64), Some(12.5));

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":3,"name":"c","price":12.5}"#);
    }

    #[test]
    fn test_record_id_validation() {
        let err = serde_json::from_str::<Record>(r#"{"name": "x"}"#).unwrap_err();
        assert!(err.to_string().contains("no `id` field"));

        let mut fields = IndexMap::new();
        fields.insert("id".to_string(), FieldValue::from("abc"));
        assert!(matches!(Record::try_from(fields), Err(RecordError::InvalidId(_))));
    }

    #[test]
    fn test_display_text() {
        let record = Record::new(1).with("name", "a").with("rating", FieldValue::Null);
        assert_eq!(record.display_text("name"), "a");
        assert_eq!(record.display_text("rating"), "");
        assert_eq!(record.display_text("missing"), "");
    }
}
